//! Candidate-location enumeration and prompt file discovery.

use crate::exclude::PathSet;
use crate::services::{FileAccess, SourceConfig, WorkbenchState, WorkspaceView};
use crate::uri;
use tracing::debug;
use url::Url;

/// File extension that marks a prompt file.
pub const PROMPT_FILE_EXTENSION: &str = ".prompt.md";

/// Discovers prompt files across the configured source folders of the
/// current workspace.
///
/// Every call recomputes locations from the collaborators' current state;
/// nothing is cached or persisted between calls.
pub struct PromptLocator<W, C, F> {
    workspace: W,
    config: C,
    files: F,
}

impl<W, C, F> PromptLocator<W, C, F>
where
    W: WorkspaceView,
    C: SourceConfig,
    F: FileAccess,
{
    /// Create a locator over the given collaborators.
    pub fn new(workspace: W, config: C, files: F) -> Self {
        Self {
            workspace,
            config,
            files,
        }
    }

    /// List prompt files across all candidate locations, omitting any
    /// resource whose path appears in `exclude`.
    pub async fn list_files(&self, exclude: &[Url]) -> Vec<Url> {
        let excluded = PathSet::from_resources(exclude);

        // Candidate directories whose own path is excluded are not searched.
        let locations: Vec<Url> = self
            .candidate_locations()
            .into_iter()
            .filter(|location| !excluded.contains(location))
            .collect();

        self.find_in(&locations, &excluded).await
    }

    /// Directory URLs to search, derived from the workspace topology and the
    /// configured source folder names.
    ///
    /// Deduplication keys on the raw path string, so candidates differing
    /// only in casing or a trailing slash stay distinct.
    pub fn candidate_locations(&self) -> Vec<Url> {
        if self.workspace.state() == WorkbenchState::Empty {
            return Vec::new();
        }

        let folders = self.workspace.folders();
        let names = self.config.source_folders();

        // The parent of the first folder stands in for the workspace root in
        // the multi-root case.
        let workspace_root = if folders.len() > 1 {
            folders.first().map(|folder| uri::dirname(&folder.uri))
        } else {
            None
        };

        let mut seen = PathSet::new();
        let mut locations = Vec::new();

        for folder in &folders {
            for name in &names {
                let candidate = uri::resolve_path(&folder.uri, name);
                if seen.insert(&candidate) {
                    locations.push(candidate);
                }

                // In a multi-root workspace the same name may also designate
                // a single directory at the workspace root, as long as it
                // falls inside this folder's subtree.
                if let Some(root) = &workspace_root {
                    let root_candidate = uri::resolve_path(root, name);
                    if !seen.contains(&root_candidate)
                        && root_candidate.path().starts_with(folder.uri.path())
                    {
                        seen.insert(&root_candidate);
                        locations.push(root_candidate);
                    }
                }
            }
        }

        debug!(count = locations.len(), "Computed candidate locations");

        locations
    }

    /// Scan candidate directories for prompt files not present in `excluded`.
    ///
    /// All directories are resolved in one batched request. A directory that
    /// fails to resolve contributes nothing; this is not an error.
    async fn find_in(&self, locations: &[Url], excluded: &PathSet) -> Vec<Url> {
        if locations.is_empty() {
            return Vec::new();
        }

        let listings = self.files.read_dirs(locations).await;
        let mut found = Vec::new();

        for listing in listings {
            let Some(children) = listing.children else {
                debug!(resource = %listing.resource, "Skipping unresolved location");
                continue;
            };

            for child in children {
                if child.is_directory {
                    continue;
                }
                if !child.name.ends_with(PROMPT_FILE_EXTENSION) {
                    continue;
                }
                if excluded.contains(&child.resource) {
                    continue;
                }
                found.push(child.resource);
            }
        }

        debug!(count = found.len(), "Discovered prompt files");

        found
    }
}
