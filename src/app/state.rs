//! Result state container and derived phases.
//!
//! This module defines [`ResultState`], the single state container owned by the
//! search session, plus [`Phase`], a read-only classification derived from its
//! flags. The state is never mutated in place: the reducer in
//! [`crate::app::reducer`] consumes a state and an action and produces the next
//! state.
//!
//! # Invariants
//!
//! - `is_loading` and a terminal outcome are mutually exclusive: entering the
//!   loading phase clears `has_error`, and any completed fetch clears
//!   `is_loading`.
//! - `data` is only ever fully replaced (on success) or filtered (on removal),
//!   never partially merged.

use crate::domain::Story;

/// Snapshot of the fetch lifecycle and the last successful result set.
///
/// Holds the stories from the most recent successful fetch alongside the two
/// lifecycle flags. Stale stories deliberately remain visible while a new fetch
/// is loading or after a fetch has failed, so the rendering boundary can show
/// an error or spinner next to the previous results instead of a blank screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultState {
    /// Stories from the last successful fetch, in server response order.
    pub data: Vec<Story>,

    /// Whether a fetch is currently in flight.
    pub is_loading: bool,

    /// Whether the most recent completed fetch failed.
    pub has_error: bool,
}

/// Lifecycle phase derived from the state flags.
///
/// `Idle` is the pristine default state (no data, no flags). A successful fetch
/// that returned zero hits is indistinguishable from `Idle` by flags alone and
/// also derives to `Idle`; callers that need to tell the two apart should track
/// submission history themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch has produced observable state yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last completed fetch succeeded and produced data.
    Success,
    /// The last completed fetch failed.
    Error,
}

impl ResultState {
    /// Classifies the current flags into a [`Phase`].
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.has_error {
            Phase::Error
        } else if self.data.is_empty() {
            Phase::Idle
        } else {
            Phase::Success
        }
    }
}
