//! Pandoc-backed markdown reader.
//!
//! Reads a document, splits its leading metadata block from the content,
//! applies per-field processing, and renders the content to HTML through an
//! external converter (pandoc by default).
//!
//! # Modules
//!
//! - [`converter`]: The [`Converter`] trait and the pandoc subprocess
//! - [`reader`]: [`PandocReader`] and the [`Reader`] trait
//! - [`registry`]: Extension → reader dispatch
//!
//! The splitter and configuration crates are re-exported as [`content`] and
//! [`core`].

pub use pandoc_reader_content as content;
pub use pandoc_reader_core as core;

pub mod converter;
pub mod reader;
pub mod registry;

pub use converter::{Converter, PandocConverter};
pub use reader::{PandocReader, ReadOutput, Reader};
pub use registry::{ReaderRegistry, register};

pub use pandoc_reader_content::{MetaValue, Metadata};
pub use pandoc_reader_core::{Error, ReaderConfig, Result};
