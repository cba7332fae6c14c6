//! Error types for the pandoc-reader crates.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for pandoc-reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading and converting documents.
///
/// Metadata splitting itself never fails; these variants cover
/// configuration, file access, and the external converter.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific path
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A metadata key pattern failed to compile
    #[error("Invalid key pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// The converter could not be run or its I/O failed
    #[error("Failed to run '{program}': {source}")]
    Process {
        /// Converter executable
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The converter exited unsuccessfully
    #[error("Conversion failed: '{program}' exited with {status}: {stderr}")]
    Conversion {
        /// Converter executable
        program: String,
        /// Exit status reported by the process
        status: ExitStatus,
        /// Captured diagnostic output
        stderr: String,
    },

    /// No reader is registered for the file's extension
    #[error("No reader registered for {}", .path.display())]
    UnsupportedExtension {
        /// The file that was requested
        path: PathBuf,
    },

    /// A field processor rejected a metadata value
    #[error("Invalid value for metadata field '{field}': {message}")]
    Processor {
        /// Field name
        field: String,
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Wraps an I/O failure while running an external program.
    pub fn process<P: Into<String>>(program: P, source: std::io::Error) -> Self {
        Error::Process {
            program: program.into(),
            source,
        }
    }

    /// Creates a new conversion failure from an exit status and captured stderr.
    pub fn conversion<P, S>(program: P, status: ExitStatus, stderr: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Error::Conversion {
            program: program.into(),
            status,
            stderr: stderr.into(),
        }
    }

    /// Creates a new field processor error.
    pub fn processor<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Processor {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns whether this error was caused by user input rather than the
    /// environment (bad config, unknown extension, invalid field value).
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Config { .. } => true,
            Error::InvalidPattern { .. } => true,
            Error::UnsupportedExtension { .. } => true,
            Error::Processor { .. } => true,
            Error::Io { .. } => false,
            Error::Process { .. } => false,
            Error::Conversion { .. } => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::config("bad marker");
        assert_eq!(err.to_string(), "Configuration error: bad marker");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_io_error_with_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io_with_path(io_error, "/tmp/post.md");
        assert!(err.to_string().contains("/tmp/post.md"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_invalid_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::invalid_pattern("(", source);
        assert!(err.to_string().starts_with("Invalid key pattern '('"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Error::UnsupportedExtension {
            path: PathBuf::from("notes.rst"),
        };
        assert_eq!(err.to_string(), "No reader registered for notes.rst");
    }

    #[test]
    fn test_processor_error() {
        let err = Error::processor("date", "not a date");
        let Error::Processor { field, message } = err else {
            unreachable!("Expected Processor error variant");
        };
        assert_eq!(field, "date");
        assert_eq!(message, "not a date");
    }

    #[test]
    fn test_process_error_not_user_error() {
        let err = Error::process(
            "pandoc",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("pandoc"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
