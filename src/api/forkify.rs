//! HTTP client for the Forkify recipe API.
//!
//! Two endpoints are used:
//!
//! - `GET {base}/search?q=<query>` answering `{"count": n, "recipes": [...]}`
//! - `GET {base}/get?rId=<id>` answering `{"recipe": {...}}`
//!
//! Requests are blocking and are expected to run on the worker side of the
//! fetch boundary, never inside a controller.

use super::backend::RecipeSource;
use super::models::{RawRecipe, RecipeEnvelope, RecipeSummary, SearchEnvelope};
use crate::domain::error::{RecipeBoxError, Result};
use crate::Config;
use serde::de::DeserializeOwned;

/// Recipe API client backed by `minreq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkifyClient {
    base_url: String,
    timeout_secs: u64,
}

impl ForkifyClient {
    /// Creates a client for `base_url` (without trailing slash).
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::api::ForkifyClient;
    ///
    /// let client = ForkifyClient::new("https://forkify-api.herokuapp.com/api/", 5);
    /// assert_eq!(client.base_url(), "https://forkify-api.herokuapp.com/api");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Creates a client from the API settings in `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout_secs)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request and decodes a JSON body.
    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, param: (&str, &str)) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        let _span = tracing::debug_span!("api_get", url = %url, param = param.0).entered();

        let response = minreq::get(&url)
            .with_param(param.0, param.1)
            .with_timeout(self.timeout_secs)
            .send()
            .map_err(|e| RecipeBoxError::Fetch(format!("request to {url} failed: {e}")))?;

        if !(200..300).contains(&response.status_code) {
            tracing::debug!(status = response.status_code, "unexpected status");
            return Err(RecipeBoxError::Fetch(format!(
                "{url} returned status {}",
                response.status_code
            )));
        }

        response
            .json::<T>()
            .map_err(|e| RecipeBoxError::Fetch(format!("failed to parse response from {url}: {e}")))
    }
}

impl RecipeSource for ForkifyClient {
    fn fetch_results(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let envelope: SearchEnvelope = self.get_json("search", ("q", query))?;

        if let Some(error) = envelope.error.as_deref() {
            tracing::debug!(query = %query, error = %error, "search answered with error member");
        }
        tracing::debug!(
            query = %query,
            count = envelope.recipes.len(),
            "search results fetched"
        );
        Ok(envelope.recipes)
    }

    fn fetch_recipe(&self, id: &str) -> Result<RawRecipe> {
        let envelope: RecipeEnvelope = self.get_json("get", ("rId", id))?;

        envelope.recipe.ok_or_else(|| {
            let reason = envelope
                .error
                .unwrap_or_else(|| "response contained no recipe".to_string());
            RecipeBoxError::Fetch(format!("recipe {id}: {reason}"))
        })
    }
}
