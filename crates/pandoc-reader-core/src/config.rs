//! Reader configuration.
//!
//! Configuration is stored as TOML. Every key has a default, so a missing
//! file (or a partial one) is valid:
//!
//! ```toml
//! file_extensions = ["md", "markdown", "mkd", "mdown"]
//!
//! [metadata]
//! key_pattern = '^([A-Za-z0-9_.]+) *:'
//! continuation_marker = "+"
//! comment_marker = "#"
//! markdown_fields = ["summary"]
//!
//! [pandoc]
//! program = "pandoc"
//! args = ["--mathjax"]
//! extensions = ["+smart", "-citations"]
//! ```
//!
//! The file is located by, in order: an explicit path, the
//! `PANDOC_READER_CONFIG` environment variable, then
//! `<config dir>/pandoc-reader/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "pandoc-reader";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PANDOC_READER_CONFIG";

/// Default pattern recognising a `name:` metadata line.
pub const DEFAULT_KEY_PATTERN: &str = r"^([A-Za-z0-9_.]+) *:";

/// Default forced line break marker.
pub const DEFAULT_CONTINUATION_MARKER: &str = "+";

/// Default inline comment marker.
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// Top-level reader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// File suffixes (without dot) handled by the reader.
    pub file_extensions: Vec<String>,
    /// Metadata block parsing.
    pub metadata: MetadataConfig,
    /// External converter invocation.
    pub pandoc: PandocConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            file_extensions: ["md", "markdown", "mkd", "mdown"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            metadata: MetadataConfig::default(),
            pandoc: PandocConfig::default(),
        }
    }
}

/// Settings for the metadata block at the top of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Regex matching a field-name line; capture group 1 is the name.
    pub key_pattern: String,
    /// Line content that stands for a forced line break.
    pub continuation_marker: String,
    /// Character introducing a trailing comment.
    pub comment_marker: char,
    /// Fields whose lines are joined and rendered as markdown.
    pub markdown_fields: Vec<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            key_pattern: DEFAULT_KEY_PATTERN.to_string(),
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            comment_marker: DEFAULT_COMMENT_MARKER,
            markdown_fields: vec!["summary".to_string()],
        }
    }
}

/// Settings for the pandoc subprocess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PandocConfig {
    /// Executable to run.
    pub program: String,
    /// Extra arguments appended after the format flags.
    pub args: Vec<String>,
    /// Markdown extension flags appended to `--from=markdown`.
    pub extensions: Extensions,
}

impl Default for PandocConfig {
    fn default() -> Self {
        Self {
            program: "pandoc".to_string(),
            args: Vec::new(),
            extensions: Extensions::default(),
        }
    }
}

/// Markdown extension flags, given either as one string or a list.
///
/// A list is concatenated without separators, so `["+smart", "-citations"]`
/// is equivalent to `"+smart-citations"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extensions {
    /// Pre-joined flags
    Joined(String),
    /// Individual flags
    List(Vec<String>),
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::Joined(String::new())
    }
}

impl Extensions {
    /// The flags as they appear after `--from=markdown`.
    pub fn as_flags(&self) -> String {
        match self {
            Extensions::Joined(s) => s.clone(),
            Extensions::List(items) => items.concat(),
        }
    }
}

impl ReaderConfig {
    /// The project name, used in user-facing messages.
    pub fn project_name() -> &'static str {
        PROJECT_NAME
    }

    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path from an explicit path, the environment,
    /// or the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
