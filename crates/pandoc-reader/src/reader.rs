//! Document reading.
//!
//! [`PandocReader`] turns a file into rendered output plus metadata:
//!
//! 1. Split the metadata block from the content.
//! 2. Collapse each field: no lines become `""`, one line becomes a trimmed
//!    string, more lines stay a list. Fields listed as markdown fields (by
//!    default `summary`) are instead joined with newlines and rendered.
//! 3. Pass every field through the host's [`MetadataProcessor`].
//! 4. Render the content with the [`Converter`].
//!
//! A forced line break is stored by the splitter as a `"\n"` entry, so a
//! joined markdown field shows two blank lines where the break was. Markdown
//! renders that the same as a single paragraph break.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use pandoc_reader_content::{
    FieldProcessors, MetaValue, Metadata, MetadataProcessor, MetadataSplitter, strip_bom,
};
use pandoc_reader_core::{Error, ReaderConfig, Result};
use serde::Serialize;

use crate::converter::{Converter, PandocConverter};

/// Rendered output and metadata for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadOutput {
    /// Converted content.
    pub output: String,
    /// Processed metadata keyed by lower-cased field name.
    pub metadata: Metadata,
}

/// A reader for one family of file extensions.
pub trait Reader: Send + Sync {
    /// Extensions (without the dot) this reader handles.
    fn file_extensions(&self) -> &[String];

    /// Read and convert the file at `path`.
    fn read(&self, path: &Path) -> Result<ReadOutput>;
}

/// Markdown reader backed by a [`Converter`].
pub struct PandocReader {
    splitter: MetadataSplitter,
    converter: Arc<dyn Converter>,
    processor: Arc<dyn MetadataProcessor>,
    markdown_fields: Vec<String>,
    file_extensions: Vec<String>,
}

impl fmt::Debug for PandocReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PandocReader")
            .field("splitter", &self.splitter)
            .field("markdown_fields", &self.markdown_fields)
            .field("file_extensions", &self.file_extensions)
            .finish_non_exhaustive()
    }
}

impl PandocReader {
    /// Create a reader with default settings around `converter`.
    pub fn new(splitter: MetadataSplitter, converter: Arc<dyn Converter>) -> Self {
        let defaults = ReaderConfig::default();
        Self {
            splitter,
            converter,
            processor: Arc::new(FieldProcessors::new()),
            markdown_fields: defaults.metadata.markdown_fields,
            file_extensions: defaults.file_extensions,
        }
    }

    /// Create a pandoc-backed reader from configuration.
    pub fn from_config(config: &ReaderConfig) -> Result<Self> {
        let splitter = MetadataSplitter::from_config(&config.metadata)?;
        let converter = Arc::new(PandocConverter::from_config(&config.pandoc));
        Ok(Self::new(splitter, converter)
            .with_markdown_fields(config.metadata.markdown_fields.clone())
            .with_file_extensions(config.file_extensions.clone()))
    }

    /// Use `processor` for per-field metadata policy.
    pub fn with_processor(mut self, processor: impl MetadataProcessor + 'static) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    /// Fields whose lines are joined and rendered as markdown.
    pub fn with_markdown_fields(mut self, fields: Vec<String>) -> Self {
        self.markdown_fields = fields.into_iter().map(|f| f.to_lowercase()).collect();
        self
    }

    /// Extensions reported to the registry.
    pub fn with_file_extensions(mut self, extensions: Vec<String>) -> Self {
        self.file_extensions = extensions;
        self
    }

    /// The splitter in use.
    pub fn splitter(&self) -> &MetadataSplitter {
        &self.splitter
    }

    /// Split `lines` and build processed metadata.
    ///
    /// Returns the raw (unconverted) content alongside the metadata.
    pub fn extract_metadata<S: AsRef<str>>(&self, lines: &[S]) -> Result<(String, Metadata)> {
        let split = self.splitter.split(lines);
        let mut metadata = Metadata::new();

        for (name, values) in split.fields {
            let value = if values.is_empty() {
                MetaValue::Text(String::new())
            } else if self.markdown_fields.contains(&name) {
                MetaValue::Text(self.convert_markdown(&values.join("\n"))?)
            } else if values.len() == 1 {
                MetaValue::Text(values[0].trim().to_string())
            } else {
                MetaValue::List(values)
            };

            let value = self.processor.process(&name, value)?;
            metadata.insert(name, value);
        }

        Ok((split.content, metadata))
    }

    /// Render markdown through the converter.
    pub fn convert_markdown(&self, content: &str) -> Result<String> {
        self.converter.convert(content)
    }

    /// Extract metadata from and convert already-loaded text.
    ///
    /// A leading byte-order mark is ignored.
    pub fn read_str(&self, text: &str) -> Result<ReadOutput> {
        let lines: Vec<&str> = strip_bom(text).lines().collect();
        let (content, metadata) = self.extract_metadata(&lines)?;
        let output = self.convert_markdown(&content)?;
        Ok(ReadOutput { output, metadata })
    }
}

impl Reader for PandocReader {
    fn file_extensions(&self) -> &[String] {
        &self.file_extensions
    }

    fn read(&self, path: &Path) -> Result<ReadOutput> {
        log::debug!("pandoc_reader: reading '{}'", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        self.read_str(&text)
    }
}

// ============================================================================
// Tests
// ============================================================================
