//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the browser wiring and the domain, storage and
//! worker layers. It implements the event-driven flow that keeps the entities,
//! their fetches and the rendered view in step.
//!
//! # Architecture
//!
//! ```text
//! Browser Event → Events → Event Handler → Controllers → Actions → View
//!                              ↑                            ↓
//!                              └──────── Fetch Responses ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commands emitted by the controllers
//! - [`controllers`]: Per-entity event handling
//! - [`handler`]: Event routing
//! - [`interaction`]: Click classification table
//! - [`state`]: Central application state container

pub mod actions;
pub mod controllers;
pub mod handler;
pub mod interaction;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use interaction::{Interaction, Region};
pub use state::{AppState, Settings};
