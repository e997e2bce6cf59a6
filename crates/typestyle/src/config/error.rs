//! Configuration loading errors.

use std::path::PathBuf;

/// Error returned when a configuration document cannot be loaded.
///
/// Problems inside a well-formed document (unknown keys, bad colors, broken
/// `extends` references) are not configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported configuration format for {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("configuration root must be a mapping")]
    NotAMapping,
}
