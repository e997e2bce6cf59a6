//! Style resolution errors.

/// Error recorded for a style that could not be resolved.
///
/// Errors are scoped to a single style and never abort a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The `extends` chain loops back on itself. `cycle` lists the styles in
    /// the loop in traversal order, starting at the first repeated name.
    #[error("cyclic reference in style inheritance: {}", .cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },
    /// `style` extends `target`, which exists but failed to resolve.
    #[error("style '{style}' extends '{target}', which could not be resolved")]
    InvalidReference { style: String, target: String },
    /// `style` extends `target`, which is not defined.
    #[error("style '{style}' extends non-existent style '{target}'")]
    NotFound { style: String, target: String },
}

impl StyleError {
    /// The referenced style for reference errors, `None` for cycles.
    pub fn target(&self) -> Option<&str> {
        match self {
            StyleError::CyclicReference { .. } => None,
            StyleError::InvalidReference { target, .. } | StyleError::NotFound { target, .. } => {
                Some(target)
            }
        }
    }

    /// The styles forming the loop, for cyclic references.
    pub fn cycle(&self) -> Option<&[String]> {
        match self {
            StyleError::CyclicReference { cycle } => Some(cycle),
            _ => None,
        }
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleError::CyclicReference { .. } => "cyclic-reference",
            StyleError::InvalidReference { .. } => "invalid-reference",
            StyleError::NotFound { .. } => "not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        let err = StyleError::NotFound {
            style: "orphan".to_string(),
            target: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orphan"));
        assert!(msg.contains("missing"));
        assert_eq!(err.target(), Some("missing"));
    }

    #[test]
    fn test_invalid_reference_error_display() {
        let err = StyleError::InvalidReference {
            style: "caption".to_string(),
            target: "body".to_string(),
        };
        assert!(err.to_string().contains("could not be resolved"));
        assert_eq!(err.target(), Some("body"));
        assert_eq!(err.kind(), "invalid-reference");
    }

    #[test]
    fn test_cyclic_reference_error_display() {
        let err = StyleError::CyclicReference {
            cycle: vec!["a".to_string(), "b".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cyclic"));
        assert!(msg.contains("a -> b"));
        assert_eq!(err.target(), None);
        assert_eq!(err.cycle().map(<[String]>::len), Some(2));
    }
}
