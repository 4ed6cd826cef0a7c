//! Error types for standards document loading.

use std::path::PathBuf;

/// Errors that can occur when loading a standards document.
///
/// Only document access can fail. Structural problems inside a readable
/// document are reported as [`SectionIssue`](crate::parser::SectionIssue)
/// diagnostics and never abort a parse.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// The document is missing, unreadable, or not valid UTF-8.
    #[error("standards document unavailable at {path}: {source}")]
    DocumentUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StandardsError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Path of the document that triggered the error.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DocumentUnavailable { path, .. } => path,
        }
    }
}

/// Result type for standards loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
