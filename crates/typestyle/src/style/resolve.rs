//! Inheritance resolution for style tables.
//!
//! A resolution pass turns every entry of a [`StyleTable`] into either a
//! resolved [`Typography`] or a [`StyleError`]. An entry that `extends`
//! another is resolved after its parent and layered on top of it with
//! [`Typography::extend`].
//!
//! # Algorithm
//!
//! The pass walks the table in name order and resolves each entry depth
//! first along its `extends` chain. Outcomes are memoized, so an entry shared
//! by several children is resolved once and its record reused.
//!
//! The names currently being resolved form the back-trace, a stack that is
//! pushed on entry and popped on exit. When an entry extends a name already
//! on the back-trace, the slice from that name's first occurrence to the top
//! of the stack is the cycle. Every member of the cycle fails with
//! [`StyleError::CyclicReference`]; entries outside it that lead into the
//! cycle fail with [`StyleError::InvalidReference`].
//!
//! ```text
//! a -> b -> c -> b      cycle [b, c], a is an invalid reference
//! a -> a                cycle [a]
//! a -> ghost            not found
//! ```
//!
//! The pass itself has no side effects. Use [`Resolution::report_to`] to hand
//! failures to a [`StyleReporter`](super::StyleReporter).

use std::collections::BTreeMap;

use super::entry::{StyleEntry, StyleTable};
use super::error::StyleError;
use super::report::StyleReporter;
use super::typography::Typography;
use crate::color::ColorLookup;

/// Outcome of one resolution pass.
///
/// Every style of the input table appears in exactly one of
/// [`styles`](Self::styles) and [`errors`](Self::errors).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    styles: BTreeMap<String, Typography>,
    errors: BTreeMap<String, StyleError>,
}

impl Resolution {
    /// The resolved style named `name`, if it resolved.
    pub fn style(&self, name: &str) -> Option<&Typography> {
        self.styles.get(name)
    }

    /// The error recorded for `name`, if it failed.
    pub fn error(&self, name: &str) -> Option<&StyleError> {
        self.errors.get(name)
    }

    pub fn styles(&self) -> &BTreeMap<String, Typography> {
        &self.styles
    }

    pub fn errors(&self) -> &BTreeMap<String, StyleError> {
        &self.errors
    }

    /// True when no style failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Sends each failure to `reporter`, in name order.
    pub fn report_to(&self, reporter: &dyn StyleReporter) {
        for (name, error) in &self.errors {
            reporter.report(name, error);
        }
    }

    /// Splits the resolution into its resolved table and error report.
    pub fn into_parts(self) -> (BTreeMap<String, Typography>, BTreeMap<String, StyleError>) {
        (self.styles, self.errors)
    }
}

/// Resolves every entry of `table`, looking up color names in `colors`.
///
/// ```rust
/// use typestyle::{resolve_all, ColorPalette, StyleTable};
/// use serde_json::json;
///
/// let table = StyleTable::from_json(&json!({
///     "base": { "font-name": "Arial", "point-size": 12 },
///     "child": { "extends": "base", "point-size": 14 },
///     "orphan": { "extends": "ghost" },
/// }));
///
/// let resolution = resolve_all(&table, &ColorPalette::new());
/// let child = resolution.style("child").unwrap();
/// assert_eq!(child.font_name.as_deref(), Some("Arial"));
/// assert_eq!(child.point_size, Some(14.0));
/// assert!(resolution.error("orphan").is_some());
/// ```
pub fn resolve_all(table: &StyleTable, colors: &dyn ColorLookup) -> Resolution {
    Resolver::new(table, colors).run()
}

/// State for a single pass. Dropped when the pass completes.
struct Resolver<'a> {
    table: &'a StyleTable,
    colors: &'a dyn ColorLookup,
    resolved: BTreeMap<String, Typography>,
    failed: BTreeMap<String, StyleError>,
    back_trace: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(table: &'a StyleTable, colors: &'a dyn ColorLookup) -> Self {
        Self {
            table,
            colors,
            resolved: BTreeMap::new(),
            failed: BTreeMap::new(),
            back_trace: Vec::new(),
        }
    }

    fn run(mut self) -> Resolution {
        let table = self.table;
        for name in table.names() {
            self.back_trace.clear();
            self.resolve(name);
        }
        debug_assert_eq!(self.resolved.len() + self.failed.len(), table.len());

        Resolution {
            styles: self.resolved,
            errors: self.failed,
        }
    }

    fn is_settled(&self, name: &str) -> bool {
        self.resolved.contains_key(name) || self.failed.contains_key(name)
    }

    fn resolve(&mut self, name: &str) {
        if self.is_settled(name) {
            return;
        }
        let table = self.table;
        let Some(entry) = table.get(name) else {
            return;
        };

        self.back_trace.push(name.to_string());
        let outcome = self.resolve_entry(name, entry);
        self.back_trace.pop();

        // Cycle members are recorded at detection; keep that first outcome.
        if self.failed.contains_key(name) {
            return;
        }
        match outcome {
            Ok(typography) => {
                self.resolved.insert(name.to_string(), typography);
            }
            Err(error) => {
                self.failed.insert(name.to_string(), error);
            }
        }
    }

    fn resolve_entry(&mut self, name: &str, entry: &'a StyleEntry) -> Result<Typography, StyleError> {
        let own = entry.to_typography(name, self.colors);

        let Some(parent) = entry.extends.as_deref() else {
            return Ok(own);
        };

        if let Some(start) = self.back_trace.iter().position(|n| n == parent) {
            let cycle = self.back_trace[start..].to_vec();
            for member in &cycle {
                self.failed
                    .entry(member.clone())
                    .or_insert_with(|| StyleError::CyclicReference {
                        cycle: cycle.clone(),
                    });
            }
            return Err(StyleError::CyclicReference { cycle });
        }

        if !self.table.contains(parent) {
            return Err(StyleError::NotFound {
                style: name.to_string(),
                target: parent.to_string(),
            });
        }

        self.resolve(parent);

        match self.resolved.get(parent) {
            Some(base) => Ok(base.extend(&own)),
            None => Err(StyleError::InvalidReference {
                style: name.to_string(),
                target: parent.to_string(),
            }),
        }
    }
}
