//! Recipe source abstraction.
//!
//! The controllers never talk to the network themselves. They emit fetch requests
//! that the [`RecipeWorker`](crate::worker::RecipeWorker) resolves through a
//! [`RecipeSource`], so tests and alternative backends can swap the HTTP client out.

use super::models::{RawRecipe, RecipeSummary};
use crate::domain::error::Result;

/// Turns a query or a recipe id into recipe data.
///
/// # Implementations
///
/// - [`ForkifyClient`](super::ForkifyClient): HTTP client for the recipe API
pub trait RecipeSource: Send {
    /// Searches the recipe index.
    ///
    /// An empty list is a valid answer for a query without hits.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Fetch`](crate::RecipeBoxError::Fetch) on transport
    /// failures or responses that cannot be decoded.
    fn fetch_results(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Fetches one recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Fetch`](crate::RecipeBoxError::Fetch) on transport
    /// failures, unknown ids or responses that cannot be decoded.
    fn fetch_recipe(&self, id: &str) -> Result<RawRecipe>;
}
