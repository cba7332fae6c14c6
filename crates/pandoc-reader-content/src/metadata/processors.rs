//! Per-field metadata processing.
//!
//! What a field does with its value (split a tag list, parse a date, render
//! markdown) is policy owned by the host, not the splitter. A
//! [`MetadataProcessor`] receives each collapsed field by name;
//! [`FieldProcessors`] is a ready-made one backed by a name → function map.
//!
//! ```rust
//! use pandoc_reader_content::{FieldProcessors, MetaValue, MetadataProcessor, split_comma_list};
//!
//! let processors = FieldProcessors::new().with("tags", split_comma_list);
//!
//! let tags = processors.process("tags", MetaValue::from("rust, parsing")).unwrap();
//! assert_eq!(tags, MetaValue::from(vec!["rust", "parsing"]));
//!
//! // Unknown fields pass through untouched
//! let title = processors.process("title", MetaValue::from("Hi")).unwrap();
//! assert_eq!(title, MetaValue::from("Hi"));
//! ```

use std::collections::HashMap;
use std::fmt;

use pandoc_reader_core::{Error, Result};

use super::value::MetaValue;

/// Host-supplied processing applied to each metadata field.
pub trait MetadataProcessor: Send + Sync {
    /// Transform the value of field `name`.
    fn process(&self, name: &str, value: MetaValue) -> Result<MetaValue>;
}

impl<F> MetadataProcessor for F
where
    F: Fn(&str, MetaValue) -> Result<MetaValue> + Send + Sync,
{
    fn process(&self, name: &str, value: MetaValue) -> Result<MetaValue> {
        self(name, value)
    }
}

/// A processing function for a single field.
///
/// Returning `Err(message)` rejects the value; the field name is attached
/// by [`FieldProcessors`].
pub type FieldFn = Box<dyn Fn(MetaValue) -> std::result::Result<MetaValue, String> + Send + Sync>;

/// Maps field names to processing functions, passing other fields through.
#[derive(Default)]
pub struct FieldProcessors {
    processors: HashMap<String, FieldFn>,
}

impl FieldProcessors {
    /// Create an empty set (every field passes through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function for `name` (case-insensitive), builder style.
    pub fn with<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(MetaValue) -> std::result::Result<MetaValue, String> + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    /// Register a function for `name` (case-insensitive), replacing any
    /// previous one.
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(MetaValue) -> std::result::Result<MetaValue, String> + Send + Sync + 'static,
    {
        self.processors.insert(name.to_lowercase(), Box::new(f));
    }

    /// Whether a function is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.processors.contains_key(&name.to_lowercase())
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl fmt::Debug for FieldProcessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.processors.keys().collect();
        names.sort();
        f.debug_struct("FieldProcessors")
            .field("fields", &names)
            .finish()
    }
}

impl MetadataProcessor for FieldProcessors {
    fn process(&self, name: &str, value: MetaValue) -> Result<MetaValue> {
        match self.processors.get(&name.to_lowercase()) {
            Some(f) => f(value).map_err(|message| Error::processor(name, message)),
            None => Ok(value),
        }
    }
}

/// Split comma-separated text into a list, dropping empty entries.
///
/// Multi-line values are split line by line and flattened.
pub fn split_comma_list(value: MetaValue) -> std::result::Result<MetaValue, String> {
    let lines = match value {
        MetaValue::Text(s) => vec![s],
        MetaValue::List(items) => items,
    };

    let items = lines
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Ok(MetaValue::List(items))
}

/// Trim surrounding whitespace from the value (each entry, for lists).
pub fn trimmed(value: MetaValue) -> std::result::Result<MetaValue, String> {
    Ok(match value {
        MetaValue::Text(s) => MetaValue::Text(s.trim().to_string()),
        MetaValue::List(items) => {
            MetaValue::List(items.iter().map(|s| s.trim().to_string()).collect())
        }
    })
}
