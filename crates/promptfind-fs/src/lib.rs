//! Local filesystem implementations of the promptfind collaborators.
//!
//! Provides:
//! - `LocalFiles`: batched directory listing over `tokio::fs`
//! - `FolderWorkspace`: workspace topology from explicit folder paths
//! - `LocatorConfig`: YAML configuration in `.promptfind/config.yml`

pub mod config;
pub mod error;
pub mod files;
pub mod workspace;

pub use config::LocatorConfig;
pub use error::{FsError, Result};
pub use files::LocalFiles;
pub use workspace::FolderWorkspace;
