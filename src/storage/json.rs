//! JSON file-based storage backend.
//!
//! This module provides a human-readable key-value store persisted as a single
//! JSON file. It uses atomic file writes (write-to-temp + rename) so a crash in
//! the middle of a save never leaves a truncated file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n) - the file is loaded into memory once
//! - **Write**: O(n) - every change rewrites the whole file
//! - **Best for**: a handful of keys holding whole-collection documents

use crate::domain::error::{RecipeBoxError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values by key. Ordered so saves are deterministic.
    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            items: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// All values are kept in memory and the file is rewritten on every
/// [`set_item`](Storage::set_item) and [`remove_item`](Storage::remove_item).
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "likes": "{\"version\":1,\"likes\":[]}"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonFileStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// Parent directories are created automatically. A file that exists but does
    /// not hold valid storage JSON is logged and treated as empty; it is replaced
    /// on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recipebox::storage::{JsonFileStorage, Storage};
    /// use std::path::PathBuf;
    ///
    /// let mut storage = JsonFileStorage::new(PathBuf::from("/tmp/recipebox/storage.json"))?;
    /// storage.set_item("likes", "[]")?;
    /// # Ok::<(), recipebox::RecipeBoxError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(key_count = data.items.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads storage data from a JSON file, falling back to empty data on parse errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, keys = data.items.len(), "loaded storage data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is not valid JSON, starting empty");
                Ok(StorageData::default())
            }
        }
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| RecipeBoxError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item", key = %key, len = value.len()).entered();

        self.data.items.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_item", key = %key).entered();

        if self.data.items.remove(key).is_some() {
            self.dirty = true;
        }
        self.save_to_file()
    }
}

impl Drop for JsonFileStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
