//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Pandoc reader - split markdown metadata and render content
#[derive(Parser, Debug)]
#[command(name = "pandoc-reader", version)]
#[command(about = "Split markdown metadata blocks and render content through pandoc", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print metadata and raw content as JSON without running pandoc
    Split {
        /// Document to split
        file: PathBuf,
    },
    /// Read a document through pandoc and print output and metadata as JSON
    Render {
        /// Document to render
        file: PathBuf,
        /// Print only the metadata
        #[arg(long)]
        metadata_only: bool,
    },
    /// List the file extensions handled by the reader
    Extensions,
    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key, e.g. `pandoc.program`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
