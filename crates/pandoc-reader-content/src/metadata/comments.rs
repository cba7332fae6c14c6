//! Trailing comment removal.
//!
//! Everything from the first unescaped comment marker to the end of the line
//! is dropped. A marker preceded by a backslash is kept as a literal marker
//! (the backslash is consumed). The result is trimmed.
//!
//! ```rust
//! use pandoc_reader_content::strip_comment;
//!
//! assert_eq!(strip_comment("Hello # ignored", '#'), "Hello");
//! assert_eq!(strip_comment("Hello \\# literal", '#'), "Hello # literal");
//! ```

use pandoc_reader_core::config::DEFAULT_COMMENT_MARKER;

/// Strips a trailing comment introduced by `marker` and trims the result.
///
/// Never fails; a line that is entirely comment yields an empty string.
pub fn strip_comment(line: &str, marker: char) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&marker) {
            out.push(marker);
            chars.next();
        } else if ch == marker {
            break;
        } else {
            out.push(ch);
        }
    }

    out.trim().to_string()
}

/// Comment stripper bound to a specific marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStripper {
    marker: char,
}

impl CommentStripper {
    /// Create a stripper for the given marker.
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The marker character.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Strip a trailing comment from `line`.
    pub fn strip(&self, line: &str) -> String {
        strip_comment(line, self.marker)
    }
}

impl Default for CommentStripper {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_MARKER)
    }
}

// ============================================================================
// Tests
// ============================================================================
