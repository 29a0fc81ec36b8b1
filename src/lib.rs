//! Recipebox: application state and controller orchestration for a recipe browser.
//!
//! Recipebox keeps a recipe lookup page consistent while it:
//! - Searches a recipe index and paginates the results locally
//! - Loads a recipe, parses its ingredient lines and rescales them by servings
//! - Collects ingredients into a shopping list
//! - Likes recipes and persists the likes across sessions
//! - Discards fetch responses that arrive after the user has moved on

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Session runtime (session.rs, wiring.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controllers
//! │  - Event handling                                   │
//! │  - Stale response filtering                         │
//! │  - Action emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Boundary   │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View trait  │   │ - Key/value   │   │ - Fetch msgs  │
//! │ - View models │   │ - Likes codec │   │ - HTTP client │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, API & Infrastructure Layers                │
//! │  - Entities and ingredient parsing (domain/)        │
//! │  - Wire models (api/)                               │
//! │  - Data directory (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controllers with the event/action model
//! - [`api`]: Recipe source trait, wire models and HTTP client
//! - [`domain`]: Entities, ingredient parsing, errors
//! - [`infrastructure`]: Data directory resolution
//! - [`storage`]: Key/value persistence and the likes document
//! - [`worker`]: Fetch request/response protocol
//! - [`ui`]: View boundary and view models
//! - [`wiring`]: Browser event translation
//! - [`session`]: Runtime tying the layers together
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! api_base_url = "https://forkify-api.herokuapp.com/api"
//! request_timeout_secs = 10
//! results_per_page = 10
//! default_servings = 4
//! data_dir = "/var/lib/recipebox"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use recipebox::{handle_event, initialize, Action, Config, Event};
//! use recipebox::storage::MemoryStorage;
//!
//! let config = Config {
//!     results_per_page: 5,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//! let mut storage = MemoryStorage::new();
//!
//! let actions = handle_event(&mut state, &mut storage, &Event::RestoreLikes);
//! assert_eq!(actions, vec![Action::ToggleLikeMenu(0)]);
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod storage;
pub mod ui;
pub mod wiring;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Settings};
pub use domain::{RecipeBoxError, Result};
pub use session::Session;
pub use wiring::BrowserEvent;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Every field has a default, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the recipe API, without trailing slash.
    pub api_base_url: String,

    /// Timeout applied to every API request, in seconds.
    pub request_timeout_secs: u64,

    /// Search results per page. Values below 1 are treated as 1.
    pub results_per_page: usize,

    /// Servings assumed when a recipe does not report any. Values below 1 are treated as 1.
    pub default_servings: u32,

    /// Directory holding the storage file and the log.
    ///
    /// Resolved by [`infrastructure::get_data_dir`] when unset.
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://forkify-api.herokuapp.com/api".to_string(),
            request_timeout_secs: 10,
            results_per_page: 10,
            default_servings: 4,
            data_dir: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Config`] if the document is not valid TOML or a
    /// field has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipebox::Config;
    ///
    /// let config = Config::from_toml_str("results_per_page = 5")?;
    /// assert_eq!(config.results_per_page, 5);
    /// assert_eq!(config.default_servings, 4);
    /// # Ok::<(), recipebox::RecipeBoxError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RecipeBoxError::Config(format!("failed to parse configuration: {e}")))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Io`] if the file cannot be read and
    /// [`RecipeBoxError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builds a configuration from a string map, such as settings handed over by
    /// the host page.
    ///
    /// Unknown keys are ignored; unparsable values fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use recipebox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("results_per_page".to_string(), "20".to_string());
    /// map.insert("default_servings".to_string(), "many".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.results_per_page, 20);
    /// assert_eq!(config.default_servings, 4);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_base_url = config
            .get("api_base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_secs = config
            .get("request_timeout_secs")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let results_per_page = config
            .get("results_per_page")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.results_per_page);

        let default_servings = config
            .get("default_servings")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.default_servings);

        Self {
            api_base_url,
            request_timeout_secs,
            results_per_page,
            default_servings,
            data_dir: config.get("data_dir").map(PathBuf::from),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Controller tunables with out-of-range values lifted to 1.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            results_per_page: self.results_per_page.max(1),
            default_servings: self.default_servings.max(1),
        }
    }
}

/// Creates an empty `AppState` configured by `config`.
///
/// # Example
///
/// ```rust
/// use recipebox::{initialize, Config};
///
/// let config = Config {
///     results_per_page: 0,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.settings.results_per_page, 1);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let settings = config.settings();
    tracing::debug!(
        results_per_page = settings.results_per_page,
        default_servings = settings.default_servings,
        "initializing recipebox"
    );

    AppState::new(settings)
}
