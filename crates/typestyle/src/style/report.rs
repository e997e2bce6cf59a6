//! Reporting hooks for failed styles.

use super::error::StyleError;

/// Receives one call per style that failed to resolve.
pub trait StyleReporter {
    fn report(&self, name: &str, error: &StyleError);
}

/// Logs each failure as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl StyleReporter for TracingReporter {
    fn report(&self, name: &str, error: &StyleError) {
        tracing::warn!(style = %name, kind = error.kind(), "{error}");
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl StyleReporter for SilentReporter {
    fn report(&self, _name: &str, _error: &StyleError) {}
}

impl<F> StyleReporter for F
where
    F: Fn(&str, &StyleError),
{
    fn report(&self, name: &str, error: &StyleError) {
        self(name, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_reporter() {
        let count = Cell::new(0);
        let reporter = |_: &str, _: &StyleError| count.set(count.get() + 1);
        let error = StyleError::NotFound {
            style: "a".into(),
            target: "b".into(),
        };
        reporter.report("a", &error);
        reporter.report("a", &error);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_tracing_reporter_does_not_panic_without_subscriber() {
        let error = StyleError::CyclicReference {
            cycle: vec!["a".into()],
        };
        TracingReporter.report("a", &error);
        SilentReporter.report("a", &error);
    }
}
