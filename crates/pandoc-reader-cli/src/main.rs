//! Pandoc Reader CLI
//!
//! Command-line interface for splitting and rendering markdown documents.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use pandoc_reader::ReaderConfig;
use pandoc_reader_cli::cli::{Cli, Command};
use pandoc_reader_cli::{commands, config_handlers, logging};

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let config_path = args.config.as_deref();

    let output = match args.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
            return Ok(());
        }
        Command::Split { file } => commands::cmd_split(&load_config(config_path)?, &file)?,
        Command::Render {
            file,
            metadata_only,
        } => commands::cmd_render(&load_config(config_path)?, &file, metadata_only)?,
        Command::Extensions => commands::cmd_extensions(&load_config(config_path)?)?,
    };
    println!("{output}");

    Ok(())
}

fn load_config(config_path: Option<&str>) -> pandoc_reader::Result<ReaderConfig> {
    let config = ReaderConfig::load(config_path)?;
    tracing::debug!(program = %config.pandoc.program, "Loaded reader configuration");
    Ok(config)
}
