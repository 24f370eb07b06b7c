//! Command and snapshot types for the session actor.
//!
//! This module defines the protocol between the outside world and the
//! [`SearchSession`](crate::session::SearchSession) task: commands flow in over
//! an mpsc channel, state snapshots flow out over a watch channel. Keeping the
//! protocol in its own module mirrors the split between message types and
//! handler logic.

use crate::app::ResultState;
use crate::domain::StoryId;

/// Commands accepted by the session actor.
///
/// Each command corresponds to one of the events the rendering boundary emits
/// upward: editing the query, submitting it, and dismissing a story. Commands
/// are processed strictly in arrival order; all state transitions they trigger
/// are serialized through the actor's single reducer call sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replaces the current query text and persists it durably.
    ///
    /// Does not trigger a fetch: typing is decoupled from querying.
    SetQuery(String),

    /// Submits the current query, issuing exactly one fetch.
    ///
    /// A submission with an empty query is skipped entirely; no fetch is
    /// issued and no state transition occurs.
    Submit,

    /// Dismisses the story with the given identifier from the result list.
    Remove(StoryId),
}

/// Read-only view of the session published to the rendering boundary.
///
/// A fresh snapshot is published after every state or query change. Consumers
/// observe it through a `tokio::sync::watch` receiver; intermediate snapshots
/// may be coalesced, the latest one is always available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current result state (data, loading and error flags).
    pub result: ResultState,

    /// Current (persisted) query text.
    pub query: String,

    /// Number of submissions issued so far.
    ///
    /// Increments when a submission actually issues a fetch (skipped empty
    /// submissions do not count). Lets consumers distinguish "idle because
    /// nothing was submitted yet" from "idle because the watch channel
    /// coalesced the loading snapshot away".
    pub submissions: u64,
}
