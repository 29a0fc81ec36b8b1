//! Persistence boundary.
//!
//! The only persisted state is the likes collection. It is kept in a
//! key-value [`Storage`] shaped like the browser's local storage and written
//! whole on every like or unlike.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation
//! - `likes`: Loading and saving the likes collection under one key
//! - `models`: Persisted document types separate from domain models

pub mod backend;
pub mod json;
pub mod likes;
pub mod memory;
pub mod models;

pub use backend::Storage;
pub use json::JsonFileStorage;
pub use likes::{decode_likes, load_likes, save_likes, LIKES_KEY};
pub use memory::MemoryStorage;
pub use models::LikesDocument;
