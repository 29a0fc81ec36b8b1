//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module decides where persistent files live on the host.

pub mod paths;

pub use paths::{get_data_dir, storage_path, LOG_FILE, STORAGE_FILE};
