//! Domain layer: the four entities owned by the application state.
//!
//! Entities know nothing about the application state, the view or storage.
//! Controllers in [`crate::app`] mediate every cross-entity effect, such as
//! copying a recipe's ingredients into the shopping list.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`generation`]: Tokens used to drop stale fetch results
//! - [`ingredient`]: Ingredient line parser
//! - [`recipe`]: The active recipe and servings scaling
//! - [`search`]: The active search and its results
//! - [`list`]: The shopping list
//! - [`likes`]: Liked recipes

pub mod error;
pub mod generation;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;

pub use error::{RecipeBoxError, Result};
pub use generation::Generation;
pub use ingredient::Ingredient;
pub use likes::{Like, Likes};
pub use list::{ListItem, ShoppingList};
pub use recipe::{Recipe, ServingsChange};
pub use search::Search;
