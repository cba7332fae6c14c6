//! Metadata/content splitting.
//!
//! A document opens with metadata fields. A line matching the key pattern
//! starts a new field; following lines that are neither blank nor new keys
//! extend it. The first blank line ends the metadata block, and that line
//! plus everything after it becomes the content, verbatim.
//!
//! ```text
//! title: Splitting documents     -> title = "Splitting documents"
//! note: first                    -> note  = ["first", "\n", "second"]
//! +
//! second
//!                                <- content starts here
//! Body text.
//! ```
//!
//! A line consisting of the continuation marker (default `+`) is a forced
//! line break and contributes `"\n"` to the current field. Field names are
//! lower-cased, and a name seen twice keeps only its last value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use pandoc_reader_core::config::{
    DEFAULT_COMMENT_MARKER, DEFAULT_CONTINUATION_MARKER, DEFAULT_KEY_PATTERN, MetadataConfig,
};
use pandoc_reader_core::{Error, Result};
use regex::Regex;

use super::comments::strip_comment;
use super::value::{Metadata, collapse};

static DEFAULT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_KEY_PATTERN).expect("Invalid default key pattern"));

/// Uncollapsed fields: each name maps to one entry per accumulated line.
pub type RawFields = BTreeMap<String, Vec<String>>;

/// Options controlling how metadata lines are recognised.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    key_pattern: Regex,
    continuation_marker: String,
    comment_marker: char,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            key_pattern: DEFAULT_KEY_RE.clone(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            comment_marker: DEFAULT_COMMENT_MARKER,
        }
    }
}

impl SplitOptions {
    /// Build options from a key pattern and markers.
    ///
    /// The pattern must compile and contain at least one capture group;
    /// group 1 is taken as the field name.
    pub fn new(
        key_pattern: &str,
        continuation_marker: impl Into<String>,
        comment_marker: char,
    ) -> Result<Self> {
        let key_pattern =
            Regex::new(key_pattern).map_err(|e| Error::invalid_pattern(key_pattern, e))?;
        if key_pattern.captures_len() < 2 {
            return Err(Error::config(format!(
                "Key pattern '{key_pattern}' needs a capture group for the field name"
            )));
        }

        Ok(Self {
            key_pattern,
            continuation_marker: continuation_marker.into(),
            comment_marker,
        })
    }

    /// Build options from the `[metadata]` config section.
    pub fn from_config(config: &MetadataConfig) -> Result<Self> {
        Self::new(
            &config.key_pattern,
            config.continuation_marker.clone(),
            config.comment_marker,
        )
    }

    /// The key pattern.
    pub fn key_pattern(&self) -> &Regex {
        &self.key_pattern
    }

    /// The forced line break marker.
    pub fn continuation_marker(&self) -> &str {
        &self.continuation_marker
    }

    /// The comment marker.
    pub fn comment_marker(&self) -> char {
        self.comment_marker
    }

    /// Match a field-start line, returning the lower-cased name and the text
    /// after the matched prefix.
    fn match_key<'a>(&self, line: &'a str) -> Option<(String, &'a str)> {
        let caps = self.key_pattern.captures(line)?;
        let prefix = caps.get(0)?;
        let name = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
        Some((name, &line[prefix.end()..]))
    }

    fn is_line_break(&self, line: &str) -> bool {
        line.trim_end() == self.continuation_marker
    }
}

/// Output of a split: the content and the uncollapsed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Text from the first blank line onwards, or empty if there was none.
    pub content: String,
    /// Field lines keyed by lower-cased name.
    pub fields: RawFields,
}

impl SplitResult {
    /// Collapsed view of the fields.
    pub fn metadata(&self) -> Metadata {
        collapse(self.fields.clone())
    }

    /// Consume the result, returning content and collapsed metadata.
    pub fn into_parts(self) -> (String, Metadata) {
        (self.content, collapse(self.fields))
    }
}

/// The field currently accumulating lines.
#[derive(Debug)]
struct OpenField {
    name: String,
    values: Vec<String>,
}

/// Scan state threaded through the metadata phase.
#[derive(Debug, Default)]
struct ScanState {
    current: Option<OpenField>,
    fields: RawFields,
}

impl ScanState {
    fn start_field(&mut self, name: String, first: String) {
        self.commit();
        // A pattern may match with an empty name; lines under it are dropped.
        if !name.is_empty() {
            self.current = Some(OpenField {
                name,
                values: vec![first],
            });
        }
    }

    fn push_value(&mut self, value: String) {
        match self.current.as_mut() {
            Some(field) => field.values.push(value),
            None => log::trace!("Discarding metadata line outside any field: {value:?}"),
        }
    }

    fn commit(&mut self) {
        if let Some(field) = self.current.take()
            && self.fields.insert(field.name.clone(), field.values).is_some()
        {
            log::trace!("Metadata field '{}' overwritten by a later occurrence", field.name);
        }
    }

    fn finish(mut self, content: String) -> SplitResult {
        self.commit();
        SplitResult {
            content,
            fields: self.fields,
        }
    }
}

/// Remove one leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Split lines into content and metadata fields.
///
/// Lines must not carry trailing newline characters. Never fails: empty or
/// malformed input yields empty content and/or empty fields.
pub fn split_lines<S: AsRef<str>>(lines: &[S], options: &SplitOptions) -> SplitResult {
    let mut state = ScanState::default();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let key = options.match_key(line);

        if key.is_none() && line.trim_end().is_empty() {
            let content = lines[i..]
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join("\n");
            return state.finish(content);
        }

        match key {
            Some((name, rest)) => {
                state.start_field(name, strip_comment(rest, options.comment_marker));
            }
            None if options.is_line_break(line) => state.push_value("\n".to_string()),
            None => state.push_value(strip_comment(line, options.comment_marker)),
        }
    }

    state.finish(String::new())
}

/// Splits documents using a fixed set of [`SplitOptions`].
#[derive(Debug, Clone, Default)]
pub struct MetadataSplitter {
    options: SplitOptions,
}

impl MetadataSplitter {
    /// Create a splitter with the given options.
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Create a splitter from the `[metadata]` config section.
    pub fn from_config(config: &MetadataConfig) -> Result<Self> {
        Ok(Self::new(SplitOptions::from_config(config)?))
    }

    /// The options in use.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Split pre-separated lines.
    pub fn split<S: AsRef<str>>(&self, lines: &[S]) -> SplitResult {
        split_lines(lines, &self.options)
    }

    /// Split raw text on line boundaries (`\n` or `\r\n`).
    ///
    /// A leading byte-order mark is ignored.
    pub fn split_text(&self, text: &str) -> SplitResult {
        let lines: Vec<&str> = strip_bom(text).lines().collect();
        self.split(&lines)
    }
}

// ============================================================================
// Tests
// ============================================================================
