//! Fetch orchestration with submission sequencing.
//!
//! This module bridges the pure reducer to the outside world. Each explicit
//! submission issues exactly one fetch; there is no retry, no debounce and no
//! cancellation. A fetch, once started, always reaches a terminal outcome
//! message.
//!
//! # Stale response handling
//!
//! Overlapping submissions are resolved by sequence number rather than by
//! arrival order. Every submission is tagged with a monotonically increasing
//! sequence; when an outcome arrives, the consumer checks it against the latest
//! issued sequence and drops anything older. The state therefore always
//! reflects the last-submitted query, not the last response to resolve.

use crate::app::Action;
use crate::fetch::client::SearchClient;
use crate::fetch::request::build_request;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Terminal outcome of one fetch, tagged with its submission sequence.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number assigned by [`FetchOrchestrator::submit`].
    pub seq: u64,

    /// `FetchSuccess` with the payload, or `FetchFailure`.
    pub action: Action,
}

/// Issues fetches and reports their outcomes over a channel.
///
/// The orchestrator never touches `ResultState` itself: the session actor owns
/// the state, calls [`submit`](Self::submit) and applies the `FetchInit` action
/// within the same turn, then later consumes [`FetchOutcome`] messages and
/// filters stale ones via [`is_current`](Self::is_current).
pub struct FetchOrchestrator<C> {
    /// Shared transport, cloned into each spawned fetch task.
    client: Arc<C>,

    /// API base the request target is built from.
    api_base: String,

    /// Highest sequence number issued so far. Zero means nothing was submitted.
    latest: Arc<AtomicU64>,

    /// Channel the spawned fetch tasks report outcomes on.
    outcome_tx: mpsc::Sender<FetchOutcome>,
}

impl<C: SearchClient> FetchOrchestrator<C> {
    /// Creates an orchestrator reporting outcomes on the given channel.
    pub fn new(client: C, api_base: impl Into<String>, outcome_tx: mpsc::Sender<FetchOutcome>) -> Self {
        Self {
            client: Arc::new(client),
            api_base: api_base.into(),
            latest: Arc::new(AtomicU64::new(0)),
            outcome_tx,
        }
    }

    /// Issues exactly one fetch for the given query.
    ///
    /// Builds the request target, assigns the next sequence number and spawns
    /// the fetch task. Returns the assigned sequence so the caller can
    /// correlate the eventual [`FetchOutcome`]. Transport failures of any kind
    /// surface as a `FetchFailure` action, never as an error from this method.
    pub fn submit(&self, query: &str) -> u64 {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let target = build_request(&self.api_base, query);

        tracing::debug!(seq, target = %target, "submitting fetch");

        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let action = match client.search(&target).await {
                Ok(hits) => Action::FetchSuccess(hits),
                Err(e) => {
                    tracing::warn!(seq, error = %e, "fetch failed");
                    Action::FetchFailure
                }
            };

            if outcome_tx.send(FetchOutcome { seq, action }).await.is_err() {
                tracing::debug!(seq, "session closed before outcome delivery");
            }
        });

        seq
    }

    /// Returns whether the given sequence is still the latest issued.
    ///
    /// Outcomes failing this check belong to a superseded submission and must
    /// be dropped by the consumer.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest_seq() == seq
    }

    /// Returns the highest sequence number issued so far, zero if none.
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::HnScoutError;
    use crate::domain::{Result, Story, StoryId};

    #[derive(Clone)]
    struct StaticClient {
        hits: Vec<Story>,
        fail: bool,
    }

    impl SearchClient for StaticClient {
        async fn search(&self, _target: &str) -> Result<Vec<Story>> {
            if self.fail {
                Err(HnScoutError::Fetch("scripted failure".to_string()))
            } else {
                Ok(self.hits.clone())
            }
        }
    }

    fn story(id: &str) -> Story {
        Story {
            object_id: StoryId::from(id),
            title: format!("story {id}"),
            url: format!("https://example.com/{id}"),
            author: "tester".to_string(),
            num_comments: 0,
            points: 1,
        }
    }

    #[tokio::test]
    async fn successful_fetch_reports_success_outcome() {
        let (tx, mut rx) = mpsc::channel(4);
        let client = StaticClient {
            hits: vec![story("1")],
            fail: false,
        };
        let orchestrator = FetchOrchestrator::new(client, "http://base?q=", tx);

        let seq = orchestrator.submit("react");
        let outcome = rx.recv().await.unwrap();

        assert_eq!(outcome.seq, seq);
        assert_eq!(outcome.action, Action::FetchSuccess(vec![story("1")]));
        assert!(orchestrator.is_current(seq));
    }

    #[tokio::test]
    async fn failed_fetch_reports_failure_outcome() {
        let (tx, mut rx) = mpsc::channel(4);
        let client = StaticClient {
            hits: vec![],
            fail: true,
        };
        let orchestrator = FetchOrchestrator::new(client, "http://base?q=", tx);

        orchestrator.submit("react");
        let outcome = rx.recv().await.unwrap();

        assert_eq!(outcome.action, Action::FetchFailure);
    }

    #[tokio::test]
    async fn newer_submission_supersedes_older_sequence() {
        let (tx, mut rx) = mpsc::channel(4);
        let client = StaticClient {
            hits: vec![],
            fail: false,
        };
        let orchestrator = FetchOrchestrator::new(client, "http://base?q=", tx);

        let first = orchestrator.submit("react");
        let second = orchestrator.submit("redux");

        assert!(!orchestrator.is_current(first));
        assert!(orchestrator.is_current(second));

        // Both fetches still reach a terminal outcome.
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }
}
