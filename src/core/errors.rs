//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::types::SourceLocation;

/// Main error type for goiface operations
#[derive(Debug, Error)]
pub enum Error {
    /// A source file is not syntactically valid Go
    #[error("Parse error in {}:{line}:{column}: {message}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A file or directory could not be read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The same exported method appears twice on one receiver type
    #[error("Duplicate method {receiver}.{method} at {first} and {second}")]
    DuplicateMethod {
        receiver: String,
        method: String,
        first: SourceLocation,
        second: SourceLocation,
    },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The Go grammar could not be loaded into the parser
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// An ignore pattern is not a valid glob
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with location
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
