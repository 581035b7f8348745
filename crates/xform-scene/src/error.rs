//! Error types for the scene driver.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while loading or updating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Kernel error outside of per-entity uniform computation.
    #[error(transparent)]
    Math(#[from] xform_core::Error),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A config value is out of its valid range.
    #[error("invalid config value for '{field}': {reason}")]
    InvalidConfig {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An entity's model matrix could not be inverted for its normal matrix.
    #[error("entity {index}: normal matrix unavailable: {source}")]
    NormalMatrix {
        /// Entity index in the scene.
        index: usize,
        /// Underlying kernel error.
        source: xform_core::Error,
    },
}

impl SceneError {
    /// Creates a [`SceneError::InvalidConfig`] error.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
