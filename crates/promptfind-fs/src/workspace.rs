//! Workspace topology assembled from explicit root folders.

use crate::error::{FsError, Result};
use promptfind_core::{WorkbenchState, WorkspaceFolder, WorkspaceView};
use std::path::Path;
use tracing::debug;
use url::Url;

/// Workspace topology built from local folder paths.
///
/// The workbench state derives from the folder count: none, one, or many
/// (multi-root).
#[derive(Debug, Clone, Default)]
pub struct FolderWorkspace {
    folders: Vec<WorkspaceFolder>,
}

impl FolderWorkspace {
    /// Build a workspace from absolute local folder paths, kept in order.
    ///
    /// # Errors
    /// Returns error if a path is relative or not representable as a URL.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut folders = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let uri = Url::from_file_path(path)
                .map_err(|()| FsError::InvalidRoot(path.to_path_buf()))?;
            let name = path.file_name().map_or_else(
                || uri.path().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            folders.push(WorkspaceFolder { name, uri });
        }

        debug!(count = folders.len(), "Opened workspace folders");

        Ok(Self { folders })
    }

    /// Number of folders in the workspace.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }
}

impl WorkspaceView for FolderWorkspace {
    fn state(&self) -> WorkbenchState {
        match self.folders.len() {
            0 => WorkbenchState::Empty,
            1 => WorkbenchState::Folder,
            _ => WorkbenchState::Workspace,
        }
    }

    fn folders(&self) -> Vec<WorkspaceFolder> {
        self.folders.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_state_from_folder_count() {
        let empty = FolderWorkspace::from_paths(Vec::<PathBuf>::new()).unwrap();
        assert_eq!(empty.state(), WorkbenchState::Empty);

        let single = FolderWorkspace::from_paths(["/ws/a"]).unwrap();
        assert_eq!(single.state(), WorkbenchState::Folder);

        let multi = FolderWorkspace::from_paths(["/ws/a", "/ws/b"]).unwrap();
        assert_eq!(multi.state(), WorkbenchState::Workspace);
        assert_eq!(multi.folder_count(), 2);
    }

    #[test]
    fn test_folder_names_and_uris() {
        let ws = FolderWorkspace::from_paths(["/ws/alpha", "/ws/beta"]).unwrap();
        let folders = ws.folders();

        assert_eq!(folders[0].name, "alpha");
        assert_eq!(folders[0].uri.as_str(), "file:///ws/alpha");
        assert_eq!(folders[1].name, "beta");
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let result = FolderWorkspace::from_paths(["relative/folder"]);
        assert!(matches!(result, Err(FsError::InvalidRoot(_))));
    }
}
