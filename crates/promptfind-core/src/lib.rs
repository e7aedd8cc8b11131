//! promptfind-core: Locator logic for prompt file discovery.
//!
//! This crate provides:
//! - `uri`: arithmetic helpers over `file://` resource URLs
//! - `PathSet`: a resource set keyed by raw path string
//! - Capability traits for the injected collaborators (file access,
//!   workspace topology, source configuration)
//! - `PromptLocator`: candidate enumeration and prompt file discovery

pub mod exclude;
pub mod locator;
pub mod services;
pub mod uri;

pub use exclude::PathSet;
pub use locator::{PromptLocator, PROMPT_FILE_EXTENSION};
pub use services::{
    DirEntry, DirListing, FileAccess, SourceConfig, WorkbenchState, WorkspaceFolder, WorkspaceView,
};
