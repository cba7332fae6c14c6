//! Document commands: `split`, `render`, `extensions`.
//!
//! Each handler returns the text to print so `main` owns stdout.

use std::path::Path;
use std::sync::Arc;

use pandoc_reader::content::{Metadata, MetadataSplitter};
use pandoc_reader::{Error as ReaderError, PandocReader, ReaderConfig, ReaderRegistry};
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct SplitOutput<'a> {
    metadata: &'a Metadata,
    content: &'a str,
}

/// Split `path` into metadata and raw content, as pretty JSON.
///
/// Values are collapsed but not processed or converted.
pub fn cmd_split(config: &ReaderConfig, path: &Path) -> Result<String> {
    let splitter = MetadataSplitter::from_config(&config.metadata)?;
    let text = std::fs::read_to_string(path).map_err(|e| ReaderError::io_with_path(e, path))?;
    let (content, metadata) = splitter.split_text(&text).into_parts();
    log::debug!("Split {} into {} field(s)", path.display(), metadata.len());

    let json = serde_json::to_string_pretty(&SplitOutput {
        metadata: &metadata,
        content: &content,
    })?;
    Ok(json)
}

/// Build the registry holding the configured reader.
pub fn build_registry(config: &ReaderConfig) -> Result<ReaderRegistry> {
    let mut registry = ReaderRegistry::new();
    registry.register(Arc::new(PandocReader::from_config(config)?));
    Ok(registry)
}

/// Read `path` through its registered reader, as pretty JSON.
pub fn cmd_render(config: &ReaderConfig, path: &Path, metadata_only: bool) -> Result<String> {
    let registry = build_registry(config)?;
    let doc = registry.read(path)?;

    let json = if metadata_only {
        serde_json::to_string_pretty(&doc.metadata)?
    } else {
        serde_json::to_string_pretty(&doc)?
    };
    Ok(json)
}

/// Registered extensions, one per line.
pub fn cmd_extensions(config: &ReaderConfig) -> Result<String> {
    let registry = build_registry(config)?;
    Ok(registry.extensions().join("\n"))
}
