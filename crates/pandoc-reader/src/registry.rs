//! Dispatch from file extension to reader.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use pandoc_reader_core::{Error, ReaderConfig, Result};

use crate::reader::{PandocReader, ReadOutput, Reader};

/// Maps file extensions to readers.
///
/// Extensions are stored lower-cased without a leading dot. Registering an
/// extension twice replaces the earlier reader.
#[derive(Clone, Default)]
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn Reader>>,
}

impl fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

impl ReaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `reader` for every extension it reports.
    pub fn register(&mut self, reader: Arc<dyn Reader>) {
        for ext in reader.file_extensions() {
            self.register_extension(ext, reader.clone());
        }
    }

    /// Register `reader` for a single extension.
    pub fn register_extension(&mut self, ext: &str, reader: Arc<dyn Reader>) {
        let ext = normalize_extension(ext);
        if self.readers.insert(ext.clone(), reader).is_some() {
            log::debug!("Replacing reader for '.{ext}'");
        }
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.readers.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// The reader for `path`'s extension, if any.
    pub fn reader_for(&self, path: &Path) -> Option<Arc<dyn Reader>> {
        let ext = path.extension()?.to_str()?;
        self.readers.get(&normalize_extension(ext)).cloned()
    }

    /// Read `path` with the matching reader.
    pub fn read(&self, path: &Path) -> Result<ReadOutput> {
        let reader = self
            .reader_for(path)
            .ok_or_else(|| Error::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        reader.read(path)
    }
}

/// Register a configured [`PandocReader`] for its extensions.
pub fn register(registry: &mut ReaderRegistry, config: &ReaderConfig) -> Result<()> {
    let reader = PandocReader::from_config(config)?;
    registry.register(Arc::new(reader));
    Ok(())
}
