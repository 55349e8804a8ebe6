//! Error types for the Bazaar library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BazaarError`] enum. Per-request paths (classification, matching,
//! routing) are infallible by design; errors surface only from startup-time
//! work such as loading a catalog file.
//!
//! # Examples
//!
//! ```
//! use bazaar::error::{BazaarError, Result};
//!
//! fn load_something() -> Result<()> {
//!     Err(BazaarError::catalog("catalog file is not a JSON array"))
//! }
//!
//! match load_something() {
//!     Ok(_) => println!("loaded"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Bazaar operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum BazaarError {
    /// I/O errors (reading catalog files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog-related errors (unreadable or unparseable catalog source)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// External agent (generative service) errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BazaarError.
pub type Result<T> = std::result::Result<T, BazaarError>;

impl BazaarError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        BazaarError::Catalog(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        BazaarError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BazaarError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        BazaarError::Query(msg.into())
    }

    /// Create a new agent error.
    pub fn agent<S: Into<String>>(msg: S) -> Self {
        BazaarError::Agent(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BazaarError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BazaarError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
