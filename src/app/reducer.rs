//! The result state reducer.
//!
//! This module implements the core state transition function of the crate: a
//! pure function from `(ResultState, Action)` to the next `ResultState`. It
//! performs no I/O and has no side effects beyond tracing; all effectful work
//! (issuing fetches, persisting the query) lives in the session actor and the
//! fetch orchestrator, which feed this function.
//!
//! # Transition table
//!
//! ```text
//! Idle/Success/Error --FetchInit-----> Loading   (data kept, error cleared)
//! Loading ---------- --FetchSuccess--> Success   (data replaced)
//! Loading ---------- --FetchFailure--> Error     (data kept)
//! Success/Error ---- --RemoveStory---> same      (data filtered, flags kept)
//! ```
//!
//! The machine is long-lived and re-enterable; there is no terminal state.

use crate::app::actions::Action;
use crate::app::state::ResultState;

/// Applies an action to the current state and returns the next state.
///
/// Exhaustive over the closed [`Action`] enum, so an unhandled transition is a
/// compile error rather than a runtime fallback.
///
/// # Examples
///
/// ```
/// use hnscout::app::{reduce, Action, ResultState};
///
/// let state = ResultState::default();
/// let next = reduce(&state, &Action::FetchInit);
/// assert!(next.is_loading);
/// assert!(!next.has_error);
/// assert_eq!(next.data, state.data);
/// ```
#[must_use]
pub fn reduce(state: &ResultState, action: &Action) -> ResultState {
    let _span = tracing::debug_span!("reduce", action = ?action_name(action)).entered();

    match action {
        Action::FetchInit => ResultState {
            data: state.data.clone(),
            is_loading: true,
            has_error: false,
        },
        Action::FetchSuccess(payload) => {
            tracing::debug!(hits = payload.len(), "fetch succeeded, replacing data");
            ResultState {
                data: payload.clone(),
                is_loading: false,
                has_error: false,
            }
        }
        Action::FetchFailure => {
            tracing::debug!(stale_hits = state.data.len(), "fetch failed, keeping stale data");
            ResultState {
                data: state.data.clone(),
                is_loading: false,
                has_error: true,
            }
        }
        Action::RemoveStory(id) => {
            let data: Vec<_> = state
                .data
                .iter()
                .filter(|story| story.object_id != *id)
                .cloned()
                .collect();

            tracing::debug!(
                story_id = %id,
                removed = state.data.len() - data.len(),
                "story removal applied"
            );

            ResultState {
                data,
                is_loading: state.is_loading,
                has_error: state.has_error,
            }
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::FetchInit => "fetch_init",
        Action::FetchSuccess(_) => "fetch_success",
        Action::FetchFailure => "fetch_failure",
        Action::RemoveStory(_) => "remove_story",
    }
}
