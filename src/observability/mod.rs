//! Tracing subscriber setup.
//!
//! Controllers, storage and the worker emit `tracing` spans and events; this
//! module installs the subscriber that writes them to a log file.
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early, before the first session is created:
//!
//! ```rust,no_run
//! use recipebox::observability::init_tracing;
//! use recipebox::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("recipebox initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber construction

mod init;

pub use init::init_tracing;
