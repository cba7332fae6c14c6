//! Pandoc Reader Core: shared errors and configuration.
//!
//! This crate provides the foundational types used across the pandoc-reader
//! crates. It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: On-disk reader configuration

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{Extensions, MetadataConfig, PandocConfig, ReaderConfig};
pub use error::{Error, Result};
