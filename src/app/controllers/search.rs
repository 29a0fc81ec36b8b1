//! Search controller: query submission, result arrival and pagination.

use crate::api::RecipeSummary;
use crate::app::{Action, AppState};
use crate::domain::{Generation, Search};
use crate::ui::Container;
use crate::worker::FetchRequest;

/// Alert shown when a search fetch fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong with your search!";

/// Starts a new search for `query`, replacing the previous one.
///
/// A blank query is ignored and leaves the current search in place.
pub fn submit(state: &mut AppState, query: &str) -> Vec<Action> {
    let query = query.trim();
    if query.is_empty() {
        tracing::debug!("empty search query ignored");
        return vec![];
    }

    let generation = state.next_generation();
    state.search = Some(Search::new(query, generation));
    tracing::debug!(query = %query, generation = %generation, "search started");

    vec![
        Action::ClearInput,
        Action::ClearResults,
        Action::RenderLoader(Container::SearchResults),
        Action::Fetch(FetchRequest::search(generation, query)),
    ]
}

/// Returns the active search if it was issued as `generation`.
fn active_search(state: &mut AppState, generation: Generation) -> Option<&mut Search> {
    match state.search.as_mut() {
        Some(search) if search.generation == generation => Some(search),
        Some(search) => {
            tracing::debug!(
                response = %generation,
                active = %search.generation,
                "stale search response discarded"
            );
            None
        }
        None => {
            tracing::debug!(response = %generation, "search response without active search discarded");
            None
        }
    }
}

/// Applies fetched results and renders the first page.
pub fn results_arrived(state: &mut AppState, generation: Generation, recipes: &[RecipeSummary]) -> Vec<Action> {
    let Some(search) = active_search(state, generation) else {
        return vec![];
    };
    search.set_results(recipes.to_vec());
    tracing::debug!(count = recipes.len(), "search results stored");

    let mut actions = vec![Action::ClearLoader];
    if let Some(page) = state.results_page(1) {
        actions.push(Action::RenderResults(page));
    }
    actions
}

/// Reports a failed search. The result stays unset.
pub fn search_failed(state: &mut AppState, generation: Generation, message: &str) -> Vec<Action> {
    if active_search(state, generation).is_none() {
        return vec![];
    }
    tracing::warn!(error = %message, "search failed");

    vec![Action::Alert(SEARCH_FAILED_MESSAGE.to_string()), Action::ClearLoader]
}

/// Renders `page` of the results already held. Never fetches.
pub fn go_to_page(state: &AppState, page: usize) -> Vec<Action> {
    let Some(results_page) = state.results_page(page) else {
        tracing::debug!(page = page, "page not available");
        return vec![];
    };

    vec![Action::ClearResults, Action::RenderResults(results_page)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(n: usize) -> Vec<RecipeSummary> {
        (1..=n)
            .map(|i| RecipeSummary {
                id: format!("r{i}"),
                title: format!("Pizza {i}"),
                publisher: "Kitchen".to_string(),
                image_url: String::new(),
            })
            .collect()
    }

    fn fetched_generation(actions: &[Action]) -> Generation {
        actions
            .iter()
            .find_map(|a| match a {
                Action::Fetch(request) => Some(request.generation()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_submit_clears_before_fetching() {
        let mut state = AppState::default();
        let actions = submit(&mut state, "  pizza ");

        assert_eq!(actions[0], Action::ClearInput);
        assert_eq!(actions[1], Action::ClearResults);
        assert_eq!(actions[2], Action::RenderLoader(Container::SearchResults));
        assert!(matches!(&actions[3], Action::Fetch(FetchRequest::SearchResults { query, .. }) if query == "pizza"));
        assert_eq!(state.search.as_ref().map(|s| s.query.as_str()), Some("pizza"));
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut state = AppState::default();
        assert!(submit(&mut state, "   ").is_empty());
        assert!(state.search.is_none());
    }

    #[test]
    fn test_pagination_uses_stored_results() {
        let mut state = AppState::default();
        let generation = fetched_generation(&submit(&mut state, "pizza"));

        let actions = results_arrived(&mut state, generation, &summaries(12));
        assert_eq!(actions[0], Action::ClearLoader);
        match &actions[1] {
            Action::RenderResults(page) => {
                assert_eq!(page.items.len(), 10);
                assert_eq!(page.next, Some(2));
            }
            other => panic!("unexpected action {other:?}"),
        }

        let actions = go_to_page(&state, 2);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], Action::ClearResults);
        match &actions[1] {
            Action::RenderResults(page) => {
                let ids: Vec<_> = page.items.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(ids, ["r11", "r12"]);
                assert_eq!(page.prev, Some(1));
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert!(!actions.iter().any(|a| matches!(a, Action::Fetch(_))));
    }

    #[test]
    fn test_out_of_range_page_is_noop() {
        let mut state = AppState::default();
        assert!(go_to_page(&state, 1).is_empty());

        let generation = fetched_generation(&submit(&mut state, "pizza"));
        results_arrived(&mut state, generation, &summaries(12));
        assert!(go_to_page(&state, 3).is_empty());
        assert!(go_to_page(&state, 0).is_empty());
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut state = AppState::default();
        let old = fetched_generation(&submit(&mut state, "pizza"));
        let new = fetched_generation(&submit(&mut state, "pasta"));

        assert!(results_arrived(&mut state, old, &summaries(3)).is_empty());
        assert!(state.search.as_ref().and_then(Search::results).is_none());

        assert!(!results_arrived(&mut state, new, &summaries(2)).is_empty());
        assert_eq!(state.search.as_ref().and_then(Search::results).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_failure_alerts_and_clears_loader() {
        let mut state = AppState::default();
        let generation = fetched_generation(&submit(&mut state, "pizza"));

        let actions = search_failed(&mut state, generation, "timeout");
        assert_eq!(
            actions,
            vec![Action::Alert(SEARCH_FAILED_MESSAGE.to_string()), Action::ClearLoader]
        );
        assert!(state.search.as_ref().and_then(Search::results).is_none());
        assert!(go_to_page(&state, 1).is_empty());
    }
}
