//! Actions consumed by the result state reducer.
//!
//! This module defines the [`Action`] type, the closed set of state transitions
//! understood by [`crate::app::reducer::reduce`]. Actions are constructed by the
//! session actor (user commands) and the fetch orchestrator (fetch outcomes),
//! and each action is consumed exactly once by the reducer.
//!
//! Because the set is a closed enum, the reducer is exhaustively matched at
//! compile time: there is no runtime "unknown action" branch to fail on. The
//! only place a malformed input can appear is the wire deserialization boundary,
//! which collapses it into [`Action::FetchFailure`] before it ever reaches the
//! reducer.

use crate::domain::{Story, StoryId};

/// A single state transition request for the result state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch has been issued.
    ///
    /// Marks the state as loading and clears any previous error flag. Existing
    /// data is kept so stale results stay visible while the fetch is in flight.
    /// Safe to dispatch repeatedly.
    FetchInit,

    /// A fetch completed with a well-formed payload.
    ///
    /// Fully replaces the current data with the payload; prior data is
    /// discarded, never merged.
    FetchSuccess(Vec<Story>),

    /// A fetch completed with any failure.
    ///
    /// Network errors, non-success status codes, and malformed payloads all
    /// collapse into this one variant. Existing data is left untouched.
    FetchFailure,

    /// The user dismissed a single story from the result list.
    ///
    /// Every entry whose identifier equals the payload is excluded; a
    /// non-matching identifier is a no-op.
    RemoveStory(StoryId),
}
