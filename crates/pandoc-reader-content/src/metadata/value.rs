//! Metadata field values.
//!
//! The splitter accumulates one string per line for each field. Consumers
//! collapse those lines into a [`MetaValue`]: no lines become an empty
//! string, one line becomes that string, and anything longer stays a list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::splitter::RawFields;

/// Collapsed metadata, keyed by lower-cased field name.
pub type Metadata = BTreeMap<String, MetaValue>;

/// A metadata field value.
///
/// Serializes untagged, as a JSON string or array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// A single line of text
    Text(String),
    /// One entry per accumulated line
    List(Vec<String>),
}

impl MetaValue {
    /// Collapse accumulated lines into a value.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        match lines.len() {
            0 => MetaValue::Text(String::new()),
            1 => MetaValue::Text(lines.remove(0)),
            _ => MetaValue::List(lines),
        }
    }

    /// The text, if this is a single-line value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    /// The lines, if this is a multi-line value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::Text(_) => None,
            MetaValue::List(items) => Some(items),
        }
    }

    /// The value as text, joining list entries with newlines.
    pub fn joined(&self) -> String {
        match self {
            MetaValue::Text(s) => s.clone(),
            MetaValue::List(items) => items.join("\n"),
        }
    }

    /// Whether this is an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            MetaValue::Text(s) => s.is_empty(),
            MetaValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Text(s)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(items: Vec<String>) -> Self {
        MetaValue::List(items)
    }
}

impl From<Vec<&str>> for MetaValue {
    fn from(items: Vec<&str>) -> Self {
        MetaValue::List(items.into_iter().map(String::from).collect())
    }
}

/// Collapse every field of a split into its [`MetaValue`].
pub fn collapse(fields: RawFields) -> Metadata {
    fields
        .into_iter()
        .map(|(name, lines)| (name, MetaValue::from_lines(lines)))
        .collect()
}
