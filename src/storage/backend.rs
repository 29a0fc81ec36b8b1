//! Storage backend abstraction.
//!
//! The [`Storage`] trait mirrors the browser's key-value storage: string keys,
//! string values, whole-value reads and writes. Callers that persist structured
//! data (see [`likes`](super::likes)) serialize it themselves.

use crate::domain::error::Result;

/// Persistent string key-value store.
///
/// # Implementations
///
/// - [`JsonFileStorage`](super::JsonFileStorage): one JSON file with atomic writes
/// - [`MemoryStorage`](super::MemoryStorage): in-process map, lost on drop
///
/// # Examples
///
/// ```
/// use recipebox::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set_item("likes", "[]")?;
/// assert_eq!(storage.get_item("likes")?.as_deref(), Some("[]"));
/// # Ok::<(), recipebox::RecipeBoxError>(())
/// ```
pub trait Storage: Send {
    /// Returns the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write is complete when the call returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
