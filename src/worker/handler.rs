//! Worker resolving fetch requests against a recipe source.

use crate::api::{ForkifyClient, RecipeSource};
use crate::domain::error::{RecipeBoxError, Result};
use crate::domain::Generation;
use crate::worker::{FetchRequest, FetchResponse};
use crate::Config;

/// Worker state: the source every request is resolved against.
///
/// The source is boxed so the same worker drives the HTTP client in production
/// and scripted sources in tests.
pub struct RecipeWorker {
    source: Option<Box<dyn RecipeSource>>,
}

impl RecipeWorker {
    /// Creates a worker over `source`.
    #[must_use]
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Creates a worker over the HTTP client configured in `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(ForkifyClient::from_config(config)))
    }

    /// Creates a worker without a source; every request fails.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self { source: None }
    }

    fn get_source(&self) -> Result<&dyn RecipeSource> {
        self.source
            .as_deref()
            .ok_or_else(|| RecipeBoxError::Fetch("no recipe source configured".to_string()))
    }

    /// Maps a source result to a response with consistent logging.
    fn handle_fetch_result<T, F, E>(operation: &str, result: Result<T>, on_success: F, on_error: E) -> FetchResponse
    where
        F: FnOnce(T) -> FetchResponse,
        E: FnOnce(String) -> FetchResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "fetch successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "fetch failed");
                on_error(format!("{operation}: {e}"))
            }
        }
    }

    fn handle_search(&self, generation: Generation, query: &str) -> FetchResponse {
        Self::handle_fetch_result(
            "search",
            self.get_source().and_then(|source| source.fetch_results(query)),
            |recipes| FetchResponse::SearchResults { generation, recipes },
            |message| FetchResponse::SearchFailed { generation, message },
        )
    }

    fn handle_recipe(&self, generation: Generation, id: &str) -> FetchResponse {
        Self::handle_fetch_result(
            "get recipe",
            self.get_source().and_then(|source| source.fetch_recipe(id)),
            |recipe| FetchResponse::Recipe { generation, recipe },
            |message| FetchResponse::RecipeFailed { generation, message },
        )
    }

    /// Resolves one request. Failures are returned as failure responses, never as errors.
    pub fn handle_message(&self, message: &FetchRequest) -> FetchResponse {
        let _guard = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            FetchRequest::SearchResults { generation, query } => self.handle_search(*generation, query),
            FetchRequest::Recipe { generation, id } => self.handle_recipe(*generation, id),
        }
    }

    /// Resolves a JSON-encoded request and returns the JSON-encoded response.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Json`] if the payload is not a valid request.
    pub fn handle_payload(&self, payload: &str) -> Result<String> {
        let message: FetchRequest = serde_json::from_str(payload)?;
        let response = self.handle_message(&message);
        Ok(serde_json::to_string(&response)?)
    }
}

impl std::fmt::Debug for RecipeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeWorker")
            .field("connected", &self.source.is_some())
            .finish()
    }
}
