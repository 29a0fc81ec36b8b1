//! Controllers reacting to events for each entity.
//!
//! Every controller function takes the state explicitly and returns the actions
//! to execute. Fetch continuations first check the response generation against
//! the active entity and return nothing for stale responses.
//!
//! - [`search`]: query submission, results and pagination
//! - [`recipe`]: navigation, recipe loading and servings
//! - [`list`]: shopping list items
//! - [`likes`]: like toggling, persistence and restore

pub mod likes;
pub mod list;
pub mod recipe;
pub mod search;
