//! # pandoc-reader-cli
//!
//! Command-line front end for the pandoc markdown reader:
//! - Split a document's metadata block from its content
//! - Render documents through pandoc
//! - Inspect and initialise the reader configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
