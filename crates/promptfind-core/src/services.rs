//! Capability traits for the injected collaborators.
//!
//! The locator depends only on these narrow interfaces, never on a concrete
//! host runtime. Implementations live in `promptfind-fs` (local filesystem)
//! and in test fakes.

use async_trait::async_trait;
use url::Url;

/// How the current workbench session is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbenchState {
    /// No folder or workspace is open.
    Empty,
    /// A single folder is open.
    Folder,
    /// A multi-root workspace is open.
    Workspace,
}

/// A named root directory registered in the current workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    /// Display name of the folder.
    pub name: String,
    /// Root URL of the folder, without a trailing slash.
    pub uri: Url,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File or directory name within the parent.
    pub name: String,
    /// Full URL of the child.
    pub resource: Url,
    /// Whether the child is itself a directory.
    pub is_directory: bool,
}

/// Listing outcome for one requested directory.
#[derive(Debug, Clone)]
pub struct DirListing {
    /// The directory that was requested.
    pub resource: Url,
    /// Immediate children, or `None` when the directory could not be read.
    pub children: Option<Vec<DirEntry>>,
}

/// Read access to directory listings.
#[async_trait]
pub trait FileAccess: Send + Sync {
    /// Resolve every requested directory in one batch.
    ///
    /// The result has one entry per request, in request order. Failures are
    /// reported per directory via `children: None`, never as a call-level
    /// error.
    async fn read_dirs(&self, resources: &[Url]) -> Vec<DirListing>;
}

/// Current workspace topology.
pub trait WorkspaceView: Send + Sync {
    /// Current workbench state.
    fn state(&self) -> WorkbenchState;

    /// Ordered list of workspace folder roots.
    fn folders(&self) -> Vec<WorkspaceFolder>;
}

/// Access to the configured source folder names.
pub trait SourceConfig: Send + Sync {
    /// Configured locations where prompt files live, each a relative or
    /// absolute path string.
    fn source_folders(&self) -> Vec<String>;
}
