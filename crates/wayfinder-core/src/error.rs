//! Unified error types for the wayfinder crates
//!
//! Only input handling can fail: reading and parsing a graph description, or
//! loading configuration. Graph queries never return an error; an unreachable
//! destination is reported as `None` by the routing functions.
//!
//! # Example
//!
//! ```ignore
//! use wayfinder_core::{WayfinderError, WayfinderResult};
//!
//! fn load(path: &str) -> WayfinderResult<()> {
//!     let text = std::fs::read_to_string(path)?;
//!     parse_graph(&text)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all wayfinder operations.
#[derive(Error, Debug)]
pub enum WayfinderError {
    /// I/O errors (file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Malformed configuration file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration unavailable or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Build a format error for a 1-based input line.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        WayfinderError::Format {
            line,
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using WayfinderError.
pub type WayfinderResult<T> = Result<T, WayfinderError>;
