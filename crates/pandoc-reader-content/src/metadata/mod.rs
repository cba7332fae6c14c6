//! Metadata block parsing.
//!
//! - [`comments`]: Trailing comment removal with escaped markers
//! - [`splitter`]: The line-driven metadata/content split
//! - [`value`]: Collapsing accumulated lines into field values
//! - [`processors`]: Pluggable per-field value processing

pub mod comments;
pub mod processors;
pub mod splitter;
pub mod value;

pub use comments::{CommentStripper, strip_comment};
pub use processors::{FieldProcessors, MetadataProcessor, split_comma_list, trimmed};
pub use splitter::{
    MetadataSplitter, RawFields, SplitOptions, SplitResult, split_lines, strip_bom,
};
pub use value::{MetaValue, Metadata, collapse};
