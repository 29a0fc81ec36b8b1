//! Fetch request and response protocol.
//!
//! Controllers never wait on the network. They emit a [`FetchRequest`] and return;
//! the worker resolves it and answers with a [`FetchResponse`], which re-enters the
//! controllers as [`Event::Fetched`](crate::app::Event::Fetched). Both directions
//! carry the [`Generation`] of the entity that asked, so an answer arriving after a
//! newer search or navigation can be recognised and dropped.
//!
//! Messages serialize to tagged JSON so the worker can sit behind any message
//! channel.

use crate::api::{RawRecipe, RecipeSummary};
use crate::domain::Generation;
use serde::{Deserialize, Serialize};

/// Request sent from the controllers to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchRequest {
    /// Search the recipe index for `query`.
    SearchResults {
        /// Generation of the search that issued the request.
        generation: Generation,
        /// Query text.
        query: String,
    },

    /// Fetch the full recipe `id`.
    Recipe {
        /// Generation of the recipe that issued the request.
        generation: Generation,
        /// Recipe id.
        id: String,
    },
}

impl FetchRequest {
    /// Creates a search request.
    #[must_use]
    pub fn search(generation: Generation, query: impl Into<String>) -> Self {
        Self::SearchResults {
            generation,
            query: query.into(),
        }
    }

    /// Creates a recipe request.
    #[must_use]
    pub fn recipe(generation: Generation, id: impl Into<String>) -> Self {
        Self::Recipe {
            generation,
            id: id.into(),
        }
    }

    /// Generation of the entity that issued the request.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::SearchResults { generation, .. } | Self::Recipe { generation, .. } => *generation,
        }
    }
}

/// Answer sent from the worker back to the controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchResponse {
    /// Search succeeded.
    SearchResults {
        generation: Generation,
        recipes: Vec<RecipeSummary>,
    },

    /// Search failed.
    SearchFailed {
        generation: Generation,
        /// Error description, for logs only.
        message: String,
    },

    /// Recipe fetch succeeded.
    Recipe {
        generation: Generation,
        recipe: RawRecipe,
    },

    /// Recipe fetch failed.
    RecipeFailed {
        generation: Generation,
        /// Error description, for logs only.
        message: String,
    },
}

impl FetchResponse {
    /// Generation copied from the originating request.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::SearchResults { generation, .. }
            | Self::SearchFailed { generation, .. }
            | Self::Recipe { generation, .. }
            | Self::RecipeFailed { generation, .. } => *generation,
        }
    }
}
