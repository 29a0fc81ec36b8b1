//! Likes entity: the liked-recipe summaries kept for the whole session.

use super::error::{RecipeBoxError, Result};
use serde::{Deserialize, Serialize};

/// Summary of a liked recipe, as shown in the likes panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// Recipe id; at most one like per id.
    pub id: String,
    /// Recipe title.
    pub title: String,
    /// Publisher.
    pub author: String,
    /// Image URL.
    pub img: String,
    /// Unix timestamp of the like, `0` for likes stored without one.
    #[serde(default)]
    pub liked_at: i64,
}

/// Ordered collection of likes, unique by recipe id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Likes {
    likes: Vec<Like>,
}

impl Likes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from stored likes, keeping the first like of each id.
    #[must_use]
    pub fn from_likes(likes: Vec<Like>) -> Self {
        let mut collection = Self::new();
        for like in likes {
            if !collection.is_liked(&like.id) {
                collection.likes.push(like);
            }
        }
        collection
    }

    /// Appends a like stamped with the current time and returns a copy, or `None`
    /// when the id is already liked.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Option<Like> {
        let id = id.into();
        if self.is_liked(&id) {
            return None;
        }
        let like = Like {
            id,
            title: title.into(),
            author: author.into(),
            img: img.into(),
            liked_at: chrono::Utc::now().timestamp(),
        };
        self.likes.push(like.clone());
        Some(like)
    }

    /// Removes the like for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::NotFound`] if the id is not liked.
    pub fn delete_like(&mut self, id: &str) -> Result<Like> {
        let index = self
            .likes
            .iter()
            .position(|like| like.id == id)
            .ok_or_else(|| RecipeBoxError::NotFound(id.to_string()))?;
        Ok(self.likes.remove(index))
    }

    #[must_use]
    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    #[must_use]
    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    /// Likes in insertion order.
    #[must_use]
    pub fn likes(&self) -> &[Like] {
        &self.likes
    }
}
