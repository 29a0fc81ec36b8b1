//! Fetch worker sitting on the far side of the asynchronous boundary.
//!
//! - `messages`: request/response protocol tagged with generations
//! - `handler`: [`RecipeWorker`] resolving requests against a recipe source

pub mod handler;
pub mod messages;

pub use handler::RecipeWorker;
pub use messages::{FetchRequest, FetchResponse};
