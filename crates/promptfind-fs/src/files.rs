//! Batched directory listing over the local filesystem.

use async_trait::async_trait;
use promptfind_core::{DirEntry, DirListing, FileAccess};
use tokio::fs;
use tracing::debug;
use url::Url;

/// Directory listing backed by the local filesystem.
///
/// Any per-directory failure (missing directory, permission denied, a
/// non-`file://` URL) degrades to `children: None`; entries that fail to
/// stat are skipped individually.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl LocalFiles {
    /// Create a new filesystem listing service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn read_one(resource: &Url) -> Option<Vec<DirEntry>> {
        let Ok(path) = resource.to_file_path() else {
            debug!(resource = %resource, "Not a local file URL");
            return None;
        };

        let mut reader = match fs::read_dir(&path).await {
            Ok(reader) => reader,
            Err(e) => {
                debug!(resource = %resource, error = %e, "Failed to read directory");
                return None;
            }
        };

        let mut children = Vec::new();
        while let Ok(Some(entry)) = reader.next_entry().await {
            let name = entry.file_name().to_string_lossy().into_owned();

            let Ok(child) = Url::from_file_path(entry.path()) else {
                debug!(name = %name, "Skipping entry with unrepresentable path");
                continue;
            };

            let is_directory = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false);

            children.push(DirEntry {
                name,
                resource: child,
                is_directory,
            });
        }

        Some(children)
    }
}

#[async_trait]
impl FileAccess for LocalFiles {
    async fn read_dirs(&self, resources: &[Url]) -> Vec<DirListing> {
        let mut listings = Vec::with_capacity(resources.len());

        for resource in resources {
            let children = Self::read_one(resource).await;
            listings.push(DirListing {
                resource: resource.clone(),
                children,
            });
        }

        listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocatorConfig;
    use crate::workspace::FolderWorkspace;
    use pretty_assertions::assert_eq;
    use promptfind_core::PromptLocator;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn as_url(path: &std::path::Path) -> Url {
        Url::from_file_path(path).unwrap()
    }

    #[tokio::test]
    async fn test_read_dirs_lists_immediate_children() {
        let tmp = TempDir::new().unwrap();
        std_fs::write(tmp.path().join("a.prompt.md"), "hello").unwrap();
        std_fs::write(tmp.path().join("b.txt"), "other").unwrap();
        std_fs::create_dir(tmp.path().join("sub.prompt.md")).unwrap();

        let listings = LocalFiles::new().read_dirs(&[as_url(tmp.path())]).await;
        assert_eq!(listings.len(), 1);

        let mut children = listings[0].children.clone().unwrap();
        children.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<(&str, bool)> = children
            .iter()
            .map(|c| (c.name.as_str(), c.is_directory))
            .collect();
        assert_eq!(
            names,
            vec![
                ("a.prompt.md", false),
                ("b.txt", false),
                ("sub.prompt.md", true),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_directory_fails_per_entry() {
        let tmp = TempDir::new().unwrap();
        std_fs::write(tmp.path().join("a.prompt.md"), "hello").unwrap();

        let missing = as_url(&tmp.path().join("does-not-exist"));
        let listings = LocalFiles::new()
            .read_dirs(&[missing, as_url(tmp.path())])
            .await;

        assert_eq!(listings.len(), 2);
        assert!(listings[0].children.is_none());
        assert_eq!(listings[1].children.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_batch_preserves_request_order() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        std_fs::create_dir(&first).unwrap();
        std_fs::create_dir(&second).unwrap();

        let requests = [as_url(&second), as_url(&first)];
        let listings = LocalFiles::new().read_dirs(&requests).await;

        assert_eq!(listings[0].resource, requests[0]);
        assert_eq!(listings[1].resource, requests[1]);
    }

    #[tokio::test]
    async fn test_locate_prompt_files_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let prompts = tmp.path().join(".prompts");
        std_fs::create_dir(&prompts).unwrap();
        std_fs::write(prompts.join("review.prompt.md"), "review").unwrap();
        std_fs::write(prompts.join("notes.txt"), "notes").unwrap();

        let workspace = FolderWorkspace::from_paths([tmp.path()]).unwrap();
        let config = LocatorConfig::default();
        let locator = PromptLocator::new(workspace, config, LocalFiles::new());

        let found = locator.list_files(&[]).await;
        assert_eq!(found, vec![as_url(&prompts.join("review.prompt.md"))]);

        let excluded = locator
            .list_files(&[as_url(&prompts.join("review.prompt.md"))])
            .await;
        assert!(excluded.is_empty());
    }
}
