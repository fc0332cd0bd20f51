//! Error types for codetint
//!
//! Highlighting itself never fails; these cover the edges around it
//! (reading input, loading config, command-line usage).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for codetint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0}")]
    Usage(String),
}
