//! Shared fixtures for pandoc-reader integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pandoc_reader::{Converter, Result};
use tempfile::TempDir;

/// Converter that upper-cases its input and records every call.
#[derive(Default)]
pub struct UppercaseConverter {
    pub calls: Mutex<Vec<String>>,
}

impl Converter for UppercaseConverter {
    fn convert(&self, content: &str) -> Result<String> {
        self.calls.lock().unwrap().push(content.to_string());
        Ok(content.to_uppercase())
    }
}

/// Write `content` to `name` inside `dir`, returning the full path.
pub fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Write an executable shell script standing in for pandoc.
#[cfg(unix)]
pub fn fake_pandoc(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// A typical post with comments, a list field, a forced break and a body.
pub const SAMPLE_POST: &str = "\
Title: Splitting Metadata   # working title
Date: 2024-03-01
Tags: rust, parsing
Summary: A short note
+
on line-oriented metadata.
Authors: Ada
Grace

# Heading

Body text with a # that stays.
";
