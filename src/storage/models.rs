//! Persisted document formats.
//!
//! These types describe what is written under a storage key. They are separate
//! from the domain entities so the on-disk shape can carry a version number.

use crate::domain::Like;
use serde::{Deserialize, Serialize};

/// Current version of the likes document.
pub const LIKES_DOCUMENT_VERSION: u32 = 1;

/// The whole likes collection as stored under [`LIKES_KEY`](super::LIKES_KEY).
///
/// ```json
/// {"version":1,"likes":[{"id":"47746","title":"...","author":"...","img":"...","liked_at":1700000000}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesDocument {
    /// Format version.
    pub version: u32,

    /// Likes in the order they were added.
    pub likes: Vec<Like>,
}

impl LikesDocument {
    /// Wraps likes in a document of the current version.
    #[must_use]
    pub fn new(likes: Vec<Like>) -> Self {
        Self {
            version: LIKES_DOCUMENT_VERSION,
            likes,
        }
    }
}

/// Any shape the likes key may hold.
///
/// Early builds stored the bare array of likes; it is still accepted on load.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredLikes {
    Document(LikesDocument),
    Bare(Vec<Like>),
}

impl StoredLikes {
    pub(crate) fn into_likes(self) -> Vec<Like> {
        match self {
            Self::Document(document) => document.likes,
            Self::Bare(likes) => likes,
        }
    }
}
