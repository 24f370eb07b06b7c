//! Search transport abstraction and HTTP implementation.
//!
//! This module defines the [`SearchClient`] trait that abstracts over the
//! transport used to execute a search, plus [`HttpSearchClient`], the reqwest
//! backed implementation used in production. The trait exists so the session
//! actor and orchestrator can be exercised in tests with scripted fakes instead
//! of the network.
//!
//! The wire format is a JSON object whose `hits` field holds a sequence of
//! story-shaped records. Anything else (connection error, non-2xx status, a
//! body that does not deserialize) is reported as a single
//! [`HnScoutError::Fetch`]; no distinction is surfaced to the state machine.

use crate::domain::error::{HnScoutError, Result};
use crate::domain::Story;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

/// Top-level shape of the search endpoint response.
///
/// Only the `hits` field is consumed; the endpoint's paging and timing metadata
/// is ignored. This is the runtime guard the deserialization boundary keeps:
/// a payload that does not match this shape fails as a whole, there is no
/// partial-success path.
#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    /// Matching stories in server ranking order.
    pub hits: Vec<Story>,
}

/// Abstraction over the search transport.
///
/// Implementations perform one search round-trip per call and report the
/// outcome as all-or-nothing. The future must be `Send` because the
/// orchestrator awaits it on a spawned task.
pub trait SearchClient: Send + Sync + 'static {
    /// Executes a search against the given request target.
    ///
    /// # Errors
    ///
    /// Returns [`HnScoutError::Fetch`] for any transport or payload failure.
    fn search(&self, target: &str) -> impl Future<Output = Result<Vec<Story>>> + Send;
}

/// HTTP transport backed by a shared `reqwest` client.
///
/// The inner client holds a connection pool, so this type is cheap to clone
/// and a single instance should be reused across submissions.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
}

/// Request timeout applied to every search round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpSearchClient {
    /// Creates an HTTP search client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HnScoutError::Config`] if the underlying client cannot be
    /// constructed (for example when no TLS backend is available).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HnScoutError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl SearchClient for HttpSearchClient {
    async fn search(&self, target: &str) -> Result<Vec<Story>> {
        tracing::debug!(target = %target, "issuing search request");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| HnScoutError::Fetch(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| HnScoutError::Fetch(format!("server returned error status: {e}")))?;

        let payload: SearchPayload = response
            .json()
            .await
            .map_err(|e| HnScoutError::Fetch(format!("malformed payload: {e}")))?;

        tracing::debug!(hits = payload.hits.len(), "search request completed");
        Ok(payload.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoryId;

    #[test]
    fn payload_parses_hits_field() {
        let json = r#"{
            "hits": [
                {
                    "objectID": "1",
                    "title": "React",
                    "url": "https://reactjs.org/",
                    "author": "Jordan Walke",
                    "num_comments": 3,
                    "points": 4
                }
            ],
            "nbHits": 1,
            "processingTimeMS": 2
        }"#;

        let payload: SearchPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.hits.len(), 1);
        assert_eq!(payload.hits[0].object_id, StoryId::from("1"));
    }

    #[test]
    fn payload_without_hits_field_is_rejected() {
        let json = r#"{"results": []}"#;
        assert!(serde_json::from_str::<SearchPayload>(json).is_err());
    }

    #[test]
    fn payload_with_malformed_hit_is_rejected_as_a_whole() {
        let json = r#"{"hits": [{"objectID": "1"}]}"#;
        assert!(serde_json::from_str::<SearchPayload>(json).is_err());
    }
}
