//! Error types for palette loading and persistence.
//!
//! The aggregation pipeline itself never fails: sources degrade to an empty
//! palette. These errors surface only from the I/O edges (settings stores and
//! theme JSON files), where callers decide whether to degrade or report.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing palette inputs.
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    /// Failed to read or write a file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON document could not be parsed or serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be parsed or serialized.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document parsed but does not have the expected shape.
    #[error("Invalid document{}: {}", location(.path), .message)]
    InvalidDocument {
        path: Option<PathBuf>,
        message: String,
    },

    /// An option key is not part of the settings record.
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
}

impl SwatchError {
    /// Create an I/O error tagged with the file it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a document-shape error.
    pub fn invalid_document(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path,
            message: message.into(),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for swatchbook I/O operations.
pub type Result<T> = std::result::Result<T, SwatchError>;
