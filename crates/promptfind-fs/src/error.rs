//! Error types for the filesystem backend.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filesystem operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur in filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Workspace folder path is not absolute or not representable as a URL.
    #[error("invalid workspace folder '{0}'")]
    InvalidRoot(PathBuf),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
