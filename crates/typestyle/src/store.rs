//! Published resolved styles for UI bindings.
//!
//! A [`TypographyStore`] holds the result of the latest resolution pass as an
//! immutable [`StyleSnapshot`]. Reloading runs a fresh pass and swaps the
//! snapshot in one step, so readers see either the old table or the new one,
//! never a mix. Reloads are serialized.
//!
//! ```rust
//! use typestyle::{TypographyConfig, TypographyStore};
//!
//! let store = TypographyStore::new();
//! let config = TypographyConfig::from_yaml_str(r#"
//! ui-font-text-styles:
//!   body: { font-name: Avenir, point-size: 16 }
//!   title: { extends: body, point-size: 28 }
//! "#).unwrap();
//!
//! store.reload(&config);
//! let title = store.style("title").unwrap();
//! assert_eq!(title.font_name.as_deref(), Some("Avenir"));
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::{ConfigError, TypographyConfig, TypographySettings};
use crate::scaling::ContentSizeCategory;
use crate::style::{Resolution, StyleReporter, TracingReporter, Typography};

/// One published resolution pass together with the settings it was loaded with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSnapshot {
    pub settings: TypographySettings,
    pub resolution: Resolution,
}

impl StyleSnapshot {
    pub fn style(&self, name: &str) -> Option<&Typography> {
        self.resolution.style(name)
    }

    /// Scaled point size of `name` for `category`.
    pub fn point_size(&self, name: &str, category: ContentSizeCategory) -> Option<f32> {
        self.style(name)?
            .scaled_point_size(category, &self.settings)
    }
}

type SharedReporter = Box<dyn StyleReporter + Send + Sync>;

/// The current resolved style table, replaced wholesale on reload.
pub struct TypographyStore {
    current: RwLock<Arc<StyleSnapshot>>,
    reload_lock: Mutex<()>,
    reporter: SharedReporter,
}

impl TypographyStore {
    /// Creates an empty store that logs failures with `tracing`.
    pub fn new() -> Self {
        Self::with_reporter(TracingReporter)
    }

    /// Creates an empty store that sends failures to `reporter`.
    pub fn with_reporter<R>(reporter: R) -> Self
    where
        R: StyleReporter + Send + Sync + 'static,
    {
        Self {
            current: RwLock::new(Arc::new(StyleSnapshot::default())),
            reload_lock: Mutex::new(()),
            reporter: Box::new(reporter),
        }
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<StyleSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A copy of the resolved style named `name`.
    ///
    /// `None` means the style is unavailable and the caller should fall back
    /// to its platform default.
    pub fn style(&self, name: &str) -> Option<Typography> {
        self.snapshot().style(name).cloned()
    }

    /// Resolves `config`, reports failures and publishes the result.
    pub fn reload(&self, config: &TypographyConfig) -> Arc<StyleSnapshot> {
        let _guard = self.reload_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let resolution = config.resolve();
        tracing::debug!(
            resolved = resolution.styles().len(),
            failed = resolution.errors().len(),
            "resolved typography styles"
        );
        resolution.report_to(self.reporter.as_ref());

        let snapshot = Arc::new(StyleSnapshot {
            settings: config.settings,
            resolution,
        });
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);
        snapshot
    }

    /// Loads a configuration file and publishes its styles.
    ///
    /// On error the previous snapshot stays published.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<Arc<StyleSnapshot>, ConfigError> {
        let config = TypographyConfig::from_path(path)?;
        Ok(self.reload(&config))
    }
}

impl Default for TypographyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypographyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypographyStore")
            .field("current", &self.snapshot())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(styles: serde_json::Value) -> TypographyConfig {
        TypographyConfig::from_value(&json!({ "ui-font-text-styles": styles })).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = TypographyStore::new();
        assert!(store.style("anything").is_none());
        assert!(store.snapshot().resolution.is_clean());
    }

    #[test]
    fn test_reload_replaces_table() {
        let store = TypographyStore::new();
        store.reload(&config(json!({ "old": { "point-size": 1 } })));
        let before = store.snapshot();

        store.reload(&config(json!({ "new": { "point-size": 2 } })));

        assert!(store.style("old").is_none());
        assert!(store.style("new").is_some());
        // Readers holding the previous snapshot keep a consistent view.
        assert!(before.style("old").is_some());
        assert!(before.style("new").is_none());
    }

    #[test]
    fn test_reload_reports_each_failure() {
        static REPORTED: AtomicUsize = AtomicUsize::new(0);
        let store = TypographyStore::with_reporter(|_: &str, _: &StyleError| {
            REPORTED.fetch_add(1, Ordering::SeqCst);
        });

        store.reload(&config(json!({
            "a": { "extends": "a" },
            "b": { "extends": "ghost" },
            "c": {},
        })));

        assert_eq!(REPORTED.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_snapshot_point_size() {
        let store = TypographyStore::new();
        let snapshot = store.reload(&config(json!({ "body": { "point-size": 16 } })));
        assert_eq!(
            snapshot.point_size("body", ContentSizeCategory::ExtraExtraLarge),
            Some(20.0)
        );
        assert_eq!(snapshot.point_size("missing", ContentSizeCategory::Large), None);
    }

    #[test]
    fn test_reload_from_missing_path_keeps_previous() {
        let store = TypographyStore::new();
        store.reload(&config(json!({ "kept": {} })));
        let result = store.reload_from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
        assert!(store.style("kept").is_some());
    }

    #[test]
    fn test_concurrent_readers_see_whole_tables() {
        let store = Arc::new(TypographyStore::with_reporter(crate::style::SilentReporter));
        let small = config(json!({ "a": {} }));
        let large = config(json!({ "a": {}, "b": {}, "c": {} }));
        store.reload(&small);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let len = store.snapshot().resolution.styles().len();
                        assert!(len == 1 || len == 3);
                    }
                })
            })
            .collect();

        for i in 0..50 {
            store.reload(if i % 2 == 0 { &large } else { &small });
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
