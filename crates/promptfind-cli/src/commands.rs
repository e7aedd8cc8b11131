//! CLI command implementations.

use crate::output::{self, OutputFormat};
use anyhow::{anyhow, Context, Result};
use promptfind_core::PromptLocator;
use promptfind_fs::{FolderWorkspace, LocalFiles, LocatorConfig};
use std::path::PathBuf;
use url::Url;

/// Write a default configuration file.
pub fn init(dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    LocatorConfig::default()
        .save(&dir)
        .context("Failed to write config")?;

    output::print_success(
        &format!("Wrote {}/.promptfind/config.yml", dir.display()),
        format,
    );
    Ok(())
}

/// Print candidate source directories.
pub fn locations(folders: Vec<PathBuf>, source: Vec<String>, format: OutputFormat) -> Result<()> {
    let (workspace, config) = open(folders, source)?;
    let locator = PromptLocator::new(workspace, config, LocalFiles::new());

    output::print_resources(
        &locator.candidate_locations(),
        "No candidate locations.",
        format,
    );
    Ok(())
}

/// List prompt files across the workspace folders.
pub async fn list(
    folders: Vec<PathBuf>,
    exclude: Vec<PathBuf>,
    source: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let (workspace, config) = open(folders, source)?;
    let locator = PromptLocator::new(workspace, config, LocalFiles::new());

    let exclude = to_urls(&exclude)?;
    let found = locator.list_files(&exclude).await;

    output::print_resources(&found, "No prompt files found.", format);
    Ok(())
}

/// Open the workspace folders and resolve the source configuration.
///
/// Configuration is read from the first folder unless overridden on the
/// command line.
fn open(folders: Vec<PathBuf>, source: Vec<String>) -> Result<(FolderWorkspace, LocatorConfig)> {
    let folders = absolutize(folders)?;

    let config = if source.is_empty() {
        match folders.first() {
            Some(first) => LocatorConfig::load(first).context("Failed to load config")?,
            None => LocatorConfig::default(),
        }
    } else {
        LocatorConfig::with_source_folders(source)
    };

    let workspace =
        FolderWorkspace::from_paths(&folders).context("Failed to open workspace folders")?;

    Ok((workspace, config))
}

/// Resolve folder arguments against the current directory; no arguments
/// means the current directory itself.
fn absolutize(folders: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    if folders.is_empty() {
        return Ok(vec![cwd]);
    }

    Ok(folders
        .into_iter()
        .map(|folder| {
            if folder.is_absolute() {
                folder
            } else {
                cwd.join(folder)
            }
        })
        .collect())
}

fn to_urls(paths: &[PathBuf]) -> Result<Vec<Url>> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    paths
        .iter()
        .map(|path| {
            let abs = if path.is_absolute() {
                path.clone()
            } else {
                cwd.join(path)
            };
            Url::from_file_path(&abs).map_err(|()| anyhow!("Invalid path '{}'", abs.display()))
        })
        .collect()
}
