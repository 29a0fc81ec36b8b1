//! Search entity: a query and the results fetched for it.

use super::generation::Generation;
use crate::api::RecipeSummary;

/// The active search.
///
/// `result` stays `None` until a fetch for this generation succeeds, so a failed
/// search leaves an entity that pagination can inspect without panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// The submitted query, trimmed.
    pub query: String,

    /// Generation of this instance.
    pub generation: Generation,

    /// Fetched summaries in the order the source returned them.
    pub result: Option<Vec<RecipeSummary>>,
}

impl Search {
    /// Creates a search that has not been fetched yet.
    #[must_use]
    pub fn new(query: impl Into<String>, generation: Generation) -> Self {
        Self {
            query: query.into(),
            generation,
            result: None,
        }
    }

    /// Stores fetched results, replacing any earlier ones.
    pub fn set_results(&mut self, recipes: Vec<RecipeSummary>) {
        self.result = Some(recipes);
    }

    /// Returns the fetched results, if any.
    #[must_use]
    pub fn results(&self) -> Option<&[RecipeSummary]> {
        self.result.as_deref()
    }
}
