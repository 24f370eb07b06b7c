//! The search session actor.
//!
//! This module implements the task that exclusively owns [`ResultState`] and
//! the query text. All mutations, user commands and fetch outcomes alike,
//! arrive over channels and are applied sequentially through the reducer, so
//! the state machine is never entered concurrently from two call sites.
//!
//! # Lifecycle
//!
//! [`SearchSession::spawn`] reads the persisted query (falling back to the
//! configured default), spawns the actor task and returns a cloneable
//! [`SessionHandle`]. The actor runs until every handle is dropped; fetches
//! still in flight at that point complete against a closed channel and their
//! outcomes are discarded.

use crate::app::{reduce, Action, ResultState};
use crate::domain::error::{HnScoutError, Result};
use crate::domain::StoryId;
use crate::fetch::{FetchOrchestrator, FetchOutcome, SearchClient};
use crate::session::messages::{SessionCommand, SessionSnapshot};
use crate::store::{QueryStore, SEARCH_QUERY_KEY};
use tokio::sync::{mpsc, watch};

/// Bound of the command and outcome channels.
const CHANNEL_CAPACITY: usize = 32;

/// Messages the actor loop multiplexes over.
enum Incoming {
    Command(SessionCommand),
    Outcome(FetchOutcome),
}

/// Actor task owning the result state, the query and the fetch orchestrator.
///
/// Not constructed directly; use [`SearchSession::spawn`].
pub struct SearchSession<C: SearchClient, S: QueryStore> {
    /// Current result state, mutated only through the reducer.
    state: ResultState,

    /// Current query text, mirrored into the store on every change.
    query: String,

    /// Durable persistence for the query.
    store: S,

    /// Issues fetches and assigns submission sequence numbers.
    orchestrator: FetchOrchestrator<C>,

    /// Incoming user commands.
    command_rx: mpsc::Receiver<SessionCommand>,

    /// Terminal fetch outcomes from spawned fetch tasks.
    outcome_rx: mpsc::Receiver<FetchOutcome>,

    /// Snapshot publication for the rendering boundary.
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

/// Cloneable handle for driving a [`SearchSession`].
///
/// All methods communicate with the actor over channels; none of them touch
/// the state directly.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl<C: SearchClient, S: QueryStore + 'static> SearchSession<C, S> {
    /// Spawns a session actor and returns a handle to it.
    ///
    /// Reads the persisted query under [`SEARCH_QUERY_KEY`]; when none exists
    /// the configured default is used and written back, so the very first run
    /// already leaves a durable value behind.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial store read or the first-run write of
    /// the default query fails.
    pub fn spawn(
        client: C,
        mut store: S,
        api_base: impl Into<String>,
        default_query: &str,
    ) -> Result<SessionHandle> {
        let query = match store.get(SEARCH_QUERY_KEY)? {
            Some(stored) => {
                tracing::debug!(query = %stored, "restored persisted query");
                stored
            }
            None => {
                tracing::debug!(query = %default_query, "no persisted query, using default");
                store.set(SEARCH_QUERY_KEY, default_query)?;
                default_query.to_string()
            }
        };

        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (outcome_tx, outcome_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot {
            result: ResultState::default(),
            query: query.clone(),
            submissions: 0,
        });

        let session = Self {
            state: ResultState::default(),
            query,
            store,
            orchestrator: FetchOrchestrator::new(client, api_base, outcome_tx),
            command_rx,
            outcome_rx,
            snapshot_tx,
        };

        tokio::spawn(session.run());

        Ok(SessionHandle {
            command_tx,
            snapshot_rx,
        })
    }

    /// Actor loop: multiplexes commands and fetch outcomes until every handle
    /// is dropped.
    async fn run(mut self) {
        loop {
            let incoming = tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => Incoming::Command(command),
                    None => break,
                },
                Some(outcome) = self.outcome_rx.recv() => Incoming::Outcome(outcome),
            };

            match incoming {
                Incoming::Command(command) => self.handle_command(command),
                Incoming::Outcome(outcome) => self.handle_outcome(outcome),
            }
        }

        tracing::debug!("all session handles dropped, shutting down");
    }

    fn handle_command(&mut self, command: SessionCommand) {
        let _span = tracing::debug_span!("session_command", command = ?command_name(&command)).entered();

        match command {
            SessionCommand::SetQuery(query) => {
                // Persistence is best-effort: a failed write must not take the
                // session down, the in-memory query stays authoritative.
                if let Err(e) = self.store.set(SEARCH_QUERY_KEY, &query) {
                    tracing::error!(error = %e, "failed to persist query");
                }
                self.query = query;
                self.publish();
            }
            SessionCommand::Submit => {
                if self.query.is_empty() {
                    tracing::debug!("empty query, skipping fetch");
                    return;
                }

                self.state = reduce(&self.state, &Action::FetchInit);
                let seq = self.orchestrator.submit(&self.query);
                tracing::debug!(seq, query = %self.query, "submission issued");
                self.publish();
            }
            SessionCommand::Remove(id) => {
                self.state = reduce(&self.state, &Action::RemoveStory(id));
                self.publish();
            }
        }
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) {
        if !self.orchestrator.is_current(outcome.seq) {
            tracing::debug!(seq = outcome.seq, "dropping stale fetch outcome");
            return;
        }

        self.state = reduce(&self.state, &outcome.action);
        self.publish();
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(SessionSnapshot {
            result: self.state.clone(),
            query: self.query.clone(),
            submissions: self.orchestrator.latest_seq(),
        });
    }
}

fn command_name(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::SetQuery(_) => "set_query",
        SessionCommand::Submit => "submit",
        SessionCommand::Remove(_) => "remove",
    }
}

impl SessionHandle {
    /// Replaces the query text, persisting it durably.
    ///
    /// # Errors
    ///
    /// Returns [`HnScoutError::Session`] if the session task has shut down.
    pub async fn set_query(&self, query: impl Into<String>) -> Result<()> {
        self.send(SessionCommand::SetQuery(query.into())).await
    }

    /// Submits the current query, issuing exactly one fetch.
    ///
    /// # Errors
    ///
    /// Returns [`HnScoutError::Session`] if the session task has shut down.
    pub async fn submit(&self) -> Result<()> {
        self.send(SessionCommand::Submit).await
    }

    /// Dismisses the story with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HnScoutError::Session`] if the session task has shut down.
    pub async fn remove(&self, id: StoryId) -> Result<()> {
        self.send(SessionCommand::Remove(id)).await
    }

    /// Returns the latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Returns a watch receiver for observing snapshot changes.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    async fn send(&self, command: SessionCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| HnScoutError::Session("session task has shut down".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Phase;
    use crate::domain::Story;
    use crate::store::{JsonQueryStore, MemoryQueryStore};
    use std::time::Duration;
    use tokio::time::sleep;

    fn story(id: &str) -> Story {
        Story {
            object_id: StoryId::from(id),
            title: format!("story {id}"),
            url: format!("https://example.com/{id}"),
            author: "tester".to_string(),
            num_comments: 1,
            points: 10,
        }
    }

    /// Transport fake scripted by query text.
    ///
    /// `slow` resolves after `fast` despite being submitted first, `boom`
    /// always fails, anything else succeeds immediately with a single hit
    /// named after the query.
    #[derive(Clone)]
    struct ScriptedClient;

    impl SearchClient for ScriptedClient {
        async fn search(&self, target: &str) -> Result<Vec<Story>> {
            let query = target.rsplit('=').next().unwrap_or("");
            match query {
                "slow" => {
                    sleep(Duration::from_millis(80)).await;
                    Ok(vec![story("slow-1")])
                }
                "fast" => {
                    sleep(Duration::from_millis(5)).await;
                    Ok(vec![story("fast-1")])
                }
                "boom" => Err(HnScoutError::Fetch("scripted failure".to_string())),
                other => Ok(vec![story(other)]),
            }
        }
    }

    fn spawn_with_memory_store() -> SessionHandle {
        SearchSession::spawn(ScriptedClient, MemoryQueryStore::new(), "http://test?q=", "React")
            .unwrap()
    }

    async fn settle() {
        sleep(Duration::from_millis(40)).await;
    }

    #[tokio::test]
    async fn initial_snapshot_uses_default_query_and_idle_state() {
        let handle = spawn_with_memory_store();
        let snapshot = handle.snapshot();

        assert_eq!(snapshot.query, "React");
        assert_eq!(snapshot.result.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn persisted_query_takes_precedence_over_default() {
        let mut store = MemoryQueryStore::new();
        store.set(SEARCH_QUERY_KEY, "rust").unwrap();

        let handle =
            SearchSession::spawn(ScriptedClient, store, "http://test?q=", "React").unwrap();

        assert_eq!(handle.snapshot().query, "rust");
    }

    #[tokio::test]
    async fn default_query_is_written_back_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.json");

        let store = JsonQueryStore::new(path.clone()).unwrap();
        let _handle =
            SearchSession::spawn(ScriptedClient, store, "http://test?q=", "React").unwrap();

        let reopened = JsonQueryStore::new(path).unwrap();
        assert_eq!(
            reopened.get(SEARCH_QUERY_KEY).unwrap(),
            Some("React".to_string())
        );
    }

    #[tokio::test]
    async fn set_query_persists_and_does_not_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.json");
        let store = JsonQueryStore::new(path.clone()).unwrap();

        let handle =
            SearchSession::spawn(ScriptedClient, store, "http://test?q=", "React").unwrap();
        handle.set_query("redux").await.unwrap();
        settle().await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.query, "redux");
        // Typing never triggers a fetch.
        assert_eq!(snapshot.result.phase(), Phase::Idle);

        let reopened = JsonQueryStore::new(path).unwrap();
        assert_eq!(
            reopened.get(SEARCH_QUERY_KEY).unwrap(),
            Some("redux".to_string())
        );
    }

    #[tokio::test]
    async fn submit_fetches_and_replaces_data() {
        let handle = spawn_with_memory_store();

        handle.set_query("ok").await.unwrap();
        handle.submit().await.unwrap();
        settle().await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.result.data, vec![story("ok")]);
        assert!(!snapshot.result.is_loading);
        assert!(!snapshot.result.has_error);
    }

    #[tokio::test]
    async fn failed_fetch_sets_error_and_keeps_stale_data() {
        let handle = spawn_with_memory_store();

        handle.set_query("ok").await.unwrap();
        handle.submit().await.unwrap();
        settle().await;

        handle.set_query("boom").await.unwrap();
        handle.submit().await.unwrap();
        settle().await;

        let snapshot = handle.snapshot();
        assert!(snapshot.result.has_error);
        assert!(!snapshot.result.is_loading);
        assert_eq!(snapshot.result.data, vec![story("ok")]);
    }

    #[tokio::test]
    async fn empty_query_submission_is_skipped() {
        let handle = spawn_with_memory_store();

        handle.set_query("").await.unwrap();
        handle.submit().await.unwrap();
        settle().await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.result.phase(), Phase::Idle);
        assert!(!snapshot.result.is_loading);
    }

    #[tokio::test]
    async fn remove_dismisses_a_single_story() {
        let handle = spawn_with_memory_store();

        handle.set_query("ok").await.unwrap();
        handle.submit().await.unwrap();
        settle().await;

        handle.remove(StoryId::from("ok")).await.unwrap();
        settle().await;

        let snapshot = handle.snapshot();
        assert!(snapshot.result.data.is_empty());
        assert!(!snapshot.result.has_error);
    }

    #[tokio::test]
    async fn query_change_is_observed_through_the_watch_channel() {
        // A snapshot taken right after set_query returns may still carry the
        // previous query: the command is applied asynchronously. Consumers
        // that need the applied value must either use the value they sent or
        // wait on the watch channel.
        let mut store = MemoryQueryStore::new();
        store.set(SEARCH_QUERY_KEY, "").unwrap();

        let handle =
            SearchSession::spawn(ScriptedClient, store, "http://test?q=", "React").unwrap();
        assert_eq!(handle.snapshot().query, "");

        let mut rx = handle.watch();
        handle.set_query("rust").await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().query, "rust");
    }

    #[tokio::test]
    async fn last_submitted_query_wins_over_last_resolved() {
        let handle = spawn_with_memory_store();

        // "slow" is submitted first but resolves last; its outcome must be
        // dropped as stale in favour of the "fast" submission.
        handle.set_query("slow").await.unwrap();
        handle.submit().await.unwrap();
        handle.set_query("fast").await.unwrap();
        handle.submit().await.unwrap();

        sleep(Duration::from_millis(200)).await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.result.data, vec![story("fast-1")]);
        assert!(!snapshot.result.is_loading);
        assert!(!snapshot.result.has_error);
    }
}
