//! Metadata block extraction for markdown documents.
//!
//! Documents handled here start with a block of `name: value` lines and
//! continue with free-form content after the first blank line:
//!
//! ```text
//! title: A Post        # comments are stripped
//! tags: rust, parsing
//! summary: First line
//!   second line
//! +
//!   new paragraph
//!
//! The body starts at the blank line above.
//! ```
//!
//! # Modules
//!
//! - [`metadata`]: Splitting, comment stripping, value collapsing, and
//!   per-field processing
//!
//! # Example
//!
//! ```rust
//! use pandoc_reader_content::{MetaValue, MetadataSplitter};
//!
//! let splitter = MetadataSplitter::default();
//! let result = splitter.split_text("title: Hello # note\ntags: a\nb\n\nBody");
//!
//! let metadata = result.metadata();
//! assert_eq!(metadata["title"], MetaValue::from("Hello"));
//! assert_eq!(metadata["tags"], MetaValue::from(vec!["a", "b"]));
//! assert_eq!(result.content, "\nBody");
//! ```

pub mod metadata;

// Re-export commonly used types
pub use metadata::{
    CommentStripper, FieldProcessors, MetaValue, Metadata, MetadataProcessor, MetadataSplitter,
    RawFields, SplitOptions, SplitResult, collapse, split_comma_list, split_lines, strip_bom,
    strip_comment, trimmed,
};
