//! Handler functions for config CLI commands.
//!
//! Implements the `config` subcommands (`path`, `get`, `init`) over
//! [`ReaderConfig`], plus TOML dotted-key helpers.

use std::path::PathBuf;

use pandoc_reader::{Error as ReaderError, ReaderConfig};

use crate::cli::ConfigAction;
use crate::error::Result;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match ReaderConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!(
                    "(file does not exist; run `{} config init` to create it)",
                    ReaderConfig::project_name()
                );
            }
            Ok(())
        }
        None => Err(ReaderError::config(
            "Could not determine config directory for this platform",
        )
        .into()),
    }
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = ReaderConfig::load(config_path)?;
    println!("{}", lookup_config_value(&config, key)?);
    Ok(())
}

/// Resolve a dotted key against the effective configuration.
pub fn lookup_config_value(config: &ReaderConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| ReaderError::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => Ok(format_toml_value(val)),
        None => Err(ReaderError::config(format!("Key '{key}' not found in configuration")).into()),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ReaderConfig::default_config_path()
            .ok_or_else(|| ReaderError::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(ReaderError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReaderError::io_with_path(e, parent))?;
    }

    let toml_str = ReaderConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| ReaderError::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(items) => items
            .iter()
            .map(format_toml_value)
            .collect::<Vec<_>>()
            .join("\n"),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
