//! Markdown to HTML conversion.
//!
//! [`PandocConverter`] pipes content through
//! `pandoc --from=markdown<extensions> --to=html5 <args...>`. Any other
//! renderer can stand in by implementing [`Converter`].

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use pandoc_reader_core::{Error, PandocConfig, Result};

/// Renders raw markdown text.
pub trait Converter: Send + Sync {
    /// Convert `content`, returning the rendered output.
    fn convert(&self, content: &str) -> Result<String>;
}

/// Runs pandoc as a subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocConverter {
    program: String,
    args: Vec<String>,
    extensions: String,
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl PandocConverter {
    /// Create a converter running `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            extensions: String::new(),
        }
    }

    /// Create a converter from the `[pandoc]` config section.
    pub fn from_config(config: &PandocConfig) -> Self {
        Self::new(config.program.clone())
            .with_args(config.args.clone())
            .with_extensions(config.extensions.as_flags())
    }

    /// Extra arguments appended after the format flags.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Extension flags appended to `--from=markdown`, e.g. `+smart-citations`.
    pub fn with_extensions(mut self, extensions: impl Into<String>) -> Self {
        self.extensions = extensions.into();
        self
    }

    /// The executable that will be run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The full command line, program first.
    pub fn command_line(&self) -> Vec<String> {
        let mut argv = vec![
            self.program.clone(),
            format!("--from=markdown{}", self.extensions),
            "--to=html5".to_string(),
        ];
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl Converter for PandocConverter {
    fn convert(&self, content: &str) -> Result<String> {
        let argv = self.command_line();
        log::debug!("pandoc_reader: execute `{}`", argv.join(" "));

        let mut child = Command::new(&self.program)
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::process(&self.program, e))?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            Error::process(&self.program, std::io::Error::other("stdin was not captured"))
        })?;

        // Feed stdin from a separate thread so a large document cannot
        // deadlock against a full stdout pipe.
        let input = content.to_owned();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::process(&self.program, e))?;

        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::error!("pandoc_reader: `{}` failed: {stderr}", argv.join(" "));
            return Err(Error::conversion(&self.program, output.status, stderr));
        }

        // A converter may exit before draining stdin; only other write
        // failures matter once it has succeeded.
        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(Error::process(&self.program, e));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            Error::process(
                &self.program,
                std::io::Error::new(ErrorKind::InvalidData, e),
            )
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pandoc_reader_core::Extensions;

    // ------------------------------------------------------------------------
    // Command line
    // ------------------------------------------------------------------------

    #[test]
    fn test_default_command_line() {
        let converter = PandocConverter::default();
        assert_eq!(
            converter.command_line(),
            vec!["pandoc", "--from=markdown", "--to=html5"]
        );
    }

    #[test]
    fn test_command_line_with_args_and_extensions() {
        let converter = PandocConverter::new("pandoc")
            .with_extensions("+smart")
            .with_args(vec!["--mathjax".to_string(), "--toc".to_string()]);
        assert_eq!(
            converter.command_line(),
            vec![
                "pandoc",
                "--from=markdown+smart",
                "--to=html5",
                "--mathjax",
                "--toc"
            ]
        );
    }

    #[test]
    fn test_from_config_joins_extension_list() {
        let config = PandocConfig {
            program: "/opt/bin/pandoc".to_string(),
            args: vec!["--standalone".to_string()],
            extensions: Extensions::List(vec!["+smart".to_string(), "-citations".to_string()]),
        };
        let converter = PandocConverter::from_config(&config);
        assert_eq!(converter.program(), "/opt/bin/pandoc");
        assert_eq!(
            converter.command_line(),
            vec![
                "/opt/bin/pandoc",
                "--from=markdown+smart-citations",
                "--to=html5",
                "--standalone"
            ]
        );
    }

    // ------------------------------------------------------------------------
    // Process handling
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_program() {
        let converter = PandocConverter::new("pandoc-reader-no-such-program");
        let err = converter.convert("text").unwrap_err();
        assert!(matches!(err, Error::Process { .. }));
        assert!(err.to_string().contains("pandoc-reader-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_conversion_failure() {
        let converter = PandocConverter::new("false");
        let err = converter.convert("# Title").unwrap_err();
        let Error::Conversion { program, status, .. } = err else {
            unreachable!("Expected Conversion error variant");
        };
        assert_eq!(program, "false");
        assert!(!status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_empty_output() {
        let converter = PandocConverter::new("true");
        assert_eq!(converter.convert("ignored").unwrap(), "");
    }
}
