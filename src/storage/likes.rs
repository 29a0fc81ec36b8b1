//! Loading and saving the likes collection.
//!
//! The whole collection lives under one key and is read and written as a unit.
//! An empty collection is stored as an absent key, so liking and then unliking a
//! recipe leaves the store exactly as it was before.

use super::backend::Storage;
use super::models::{LikesDocument, StoredLikes};
use crate::domain::error::{RecipeBoxError, Result};
use crate::domain::Like;

/// Storage key holding the likes document.
pub const LIKES_KEY: &str = "likes";

/// Decodes a stored likes value.
///
/// # Errors
///
/// Returns [`RecipeBoxError::StorageCorrupt`] if the value is neither a likes
/// document nor a bare array of likes.
pub fn decode_likes(raw: &str) -> Result<Vec<Like>> {
    serde_json::from_str::<StoredLikes>(raw)
        .map(StoredLikes::into_likes)
        .map_err(|e| RecipeBoxError::StorageCorrupt {
            key: LIKES_KEY.to_string(),
            reason: e.to_string(),
        })
}

/// Reads the likes collection.
///
/// Never fails: an absent key, an unreadable backend and malformed data all
/// yield an empty collection, the latter two logged as warnings.
pub fn load_likes(storage: &dyn Storage) -> Vec<Like> {
    let raw = match storage.get_item(LIKES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored likes");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored likes, starting empty");
            return Vec::new();
        }
    };

    match decode_likes(&raw) {
        Ok(likes) => {
            tracing::debug!(count = likes.len(), "stored likes loaded");
            likes
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored likes are malformed, starting empty");
            Vec::new()
        }
    }
}

/// Writes the whole likes collection, removing the key when it is empty.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or the backend write fails.
pub fn save_likes(storage: &mut dyn Storage, likes: &[Like]) -> Result<()> {
    if likes.is_empty() {
        tracing::debug!("no likes left, removing stored likes");
        return storage.remove_item(LIKES_KEY);
    }

    let json = serde_json::to_string(&LikesDocument::new(likes.to_vec()))?;
    storage.set_item(LIKES_KEY, &json)?;

    tracing::debug!(count = likes.len(), "likes saved");
    Ok(())
}
