use std::path::PathBuf;

use thiserror::Error;

/// Error surfaced when a content document cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document could not be read from disk.
    #[error("failed to read content document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML syntax or shape error.
    #[error("invalid YAML content document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON syntax or shape error.
    #[error("invalid JSON content document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but breaks a content rule.
    #[error("invalid content at {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ContentError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
