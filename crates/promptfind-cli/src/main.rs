//! promptfind CLI - Prompt file discovery from the command line.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "promptfind")]
#[command(author, version, about = "Prompt file discovery CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// Override configured source folder names (can be given multiple times)
    #[arg(long, short = 's', global = true)]
    source: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Directory to configure (defaults to current directory)
        dir: Option<PathBuf>,
    },

    /// Print candidate source directories
    Locations {
        /// Workspace folders (defaults to current directory)
        folders: Vec<PathBuf>,
    },

    /// List prompt files across workspace folders
    #[command(alias = "ls")]
    List {
        /// Workspace folders (defaults to current directory)
        folders: Vec<PathBuf>,

        /// Exclude a file by path (can be given multiple times)
        #[arg(long, short = 'x')]
        exclude: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { dir } => commands::init(dir, cli.format),
        Commands::Locations { folders } => commands::locations(folders, cli.source, cli.format),
        Commands::List { folders, exclude } => {
            commands::list(folders, exclude, cli.source, cli.format).await
        }
    }
}
