//! Error types for the Topica library.
//!
//! All fallible operations in Topica return [`Result`], whose error type is
//! the [`TopicaError`] enum.
//!
//! # Examples
//!
//! ```
//! use topica::error::{TopicaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TopicaError::invalid_config("num_topics must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Topica operations.
///
/// Configuration and corpus errors are caller errors and surface before any
/// sampling begins. `Internal` indicates a broken count invariant discovered
/// mid-run (e.g. a count underflow or a degenerate weight vector); it is
/// never recovered from.
#[derive(Error, Debug)]
pub enum TopicaError {
    /// I/O errors (reading corpus files, writing reports, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid sampler configuration (rejected before sampling starts)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed corpus input
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Internal invariant violation; indicates a bug, not a usage error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TopicaError.
pub type Result<T> = std::result::Result<T, TopicaError>;

impl TopicaError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TopicaError::InvalidConfiguration(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TopicaError::Corpus(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        TopicaError::Internal(msg.into())
    }
}
