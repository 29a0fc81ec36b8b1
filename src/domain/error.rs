//! Error types for the recipebox controller layer.
//!
//! This module defines the centralized error type [`RecipeBoxError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Not every variant reaches the user. Controllers catch [`RecipeBoxError::Fetch`]
//! and turn it into a single alert, [`RecipeBoxError::StorageCorrupt`] is swallowed
//! when likes are restored, and [`RecipeBoxError::NotFound`] degrades to a no-op.
//! An empty search query or recipe id is not an error at all.

use thiserror::Error;

/// The main error type for recipebox operations.
///
/// # Examples
///
/// ```
/// use recipebox::RecipeBoxError;
///
/// fn lookup(id: &str) -> Result<(), RecipeBoxError> {
///     Err(RecipeBoxError::NotFound(id.to_string()))
/// }
///
/// assert!(lookup("item-3").is_err());
/// ```
#[derive(Debug, Error)]
pub enum RecipeBoxError {
    /// A search or recipe fetch failed.
    ///
    /// Covers transport errors, non-success HTTP statuses and response bodies
    /// that do not decode into the expected shape.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Reading from or writing to the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data exists but could not be decoded.
    ///
    /// Raised by the likes decoder; `load_likes` treats it as an empty collection.
    #[error("Corrupt storage under key {key}: {reason}")]
    StorageCorrupt {
        /// Storage key holding the malformed value.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// A referenced id is absent from a collection.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for recipebox operations.
pub type Result<T> = std::result::Result<T, RecipeBoxError>;
