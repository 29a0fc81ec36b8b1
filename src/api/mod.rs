//! Network boundary: where queries and recipe ids become recipe data.
//!
//! # Modules
//!
//! - `backend`: [`RecipeSource`] trait implemented by every source
//! - `forkify`: HTTP client for the Forkify recipe API
//! - `models`: Wire types returned by a source

pub mod backend;
pub mod forkify;
pub mod models;

pub use backend::RecipeSource;
pub use forkify::ForkifyClient;
pub use models::{RawRecipe, RecipeSummary};
