//! hnscout: a search-driven Hacker News story viewer.
//!
//! hnscout fetches stories matching a search query from the Hacker News search
//! API and exposes them as a dismissible list. The core of the crate is the
//! client-side data-fetch state machine: a pure reducer tracking the fetch
//! lifecycle (idle → loading → success/failure), request construction from the
//! persisted search term, single-fetch-per-submission orchestration, and local
//! story removal applied to the last successful result set.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary Shim (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                           │  ← Single-writer actor
//! │  - Command handling                                 │
//! │  - Query persistence                                │
//! │  - Snapshot publication                             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ App Layer     │   │ Store Layer   │   │ Fetch Layer   │
//! │ (app/)        │   │ (store/)      │   │ (fetch/)      │
//! │ - Reducer     │   │ - JSON I/O    │   │ - Request URL │
//! │ - Actions     │   │ - Backend API │   │ - HTTP client │
//! │ - ResultState │   │ - Memory fake │   │ - Sequencing  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Story model (domain/story)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Pure result state machine (state, actions, reducer)
//! - [`domain`]: Core types (Story, errors)
//! - [`fetch`]: Request construction, HTTP transport, submission sequencing
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`session`]: Actor owning the state, serializing all dispatches
//! - [`store`]: Durable query persistence behind a trait
//! - [`observability`]: Tracing subscriber setup
//!
//! # Control Flow
//!
//! Editing the query updates and persists the term without fetching. An
//! explicit submission builds the request URL from the persisted term,
//! dispatches the loading transition, and issues exactly one fetch; its
//! terminal outcome re-enters the reducer on the session task. Dismissing a
//! story filters it out of the last successful result set locally.
//!
//! Overlapping submissions are resolved by sequence number: outcomes of
//! superseded submissions are dropped, so the visible state always reflects
//! the last-submitted query rather than the last response to arrive.
//!
//! # Example
//!
//! ```no_run
//! use hnscout::fetch::HttpSearchClient;
//! use hnscout::session::SearchSession;
//! use hnscout::store::MemoryQueryStore;
//! use hnscout::Config;
//!
//! # async fn run() -> hnscout::domain::Result<()> {
//! let config = Config::default();
//! let client = HttpSearchClient::new()?;
//! let handle = SearchSession::spawn(
//!     client,
//!     MemoryQueryStore::new(),
//!     config.api_base.clone(),
//!     &config.default_query,
//! )?;
//!
//! handle.set_query("rust").await?;
//! handle.submit().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod session;
pub mod store;

pub use app::{reduce, Action, Phase, ResultState};
pub use domain::{HnScoutError, Result, Story, StoryId};
pub use fetch::{HttpSearchClient, SearchClient};
pub use session::{SearchSession, SessionHandle, SessionSnapshot};
pub use store::{JsonQueryStore, MemoryQueryStore, QueryStore};

use std::path::PathBuf;

/// Default query used when no value has ever been persisted.
pub const DEFAULT_QUERY: &str = "React";

/// Application configuration.
///
/// Values are resolved from `HNSCOUT_*` environment variables with typed
/// fallbacks; see [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint base, terminated by the query parameter.
    ///
    /// Default: `https://hn.algolia.com/api/v1/search?query=`
    pub api_base: String,

    /// Query used when the store holds no persisted value. Default: `"React"`
    pub default_query: String,

    /// Override for the query store file location.
    ///
    /// Defaults to `query.json` inside the platform data directory.
    pub store_path: Option<PathBuf>,

    /// Tracing level directive used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: fetch::DEFAULT_API_BASE.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            store_path: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from environment variables.
    ///
    /// # Parsing Rules
    ///
    /// - `HNSCOUT_API_BASE`: endpoint base (empty values are ignored)
    /// - `HNSCOUT_DEFAULT_QUERY`: first-run query (empty values are ignored)
    /// - `HNSCOUT_STORE_PATH`: query store file path
    /// - `HNSCOUT_LOG`: tracing level directive
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            api_base: non_empty("HNSCOUT_API_BASE").unwrap_or(defaults.api_base),
            default_query: non_empty("HNSCOUT_DEFAULT_QUERY").unwrap_or(defaults.default_query),
            store_path: non_empty("HNSCOUT_STORE_PATH").map(PathBuf::from),
            trace_level: non_empty("HNSCOUT_LOG"),
        }
    }

    /// Resolves the query store file path, applying the platform default.
    #[must_use]
    pub fn query_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(infrastructure::query_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_public_endpoint() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://hn.algolia.com/api/v1/search?query=");
        assert_eq!(config.default_query, "React");
        assert!(config.store_path.is_none());
    }

    #[test]
    fn explicit_store_path_overrides_the_platform_default() {
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/custom.json")),
            ..Config::default()
        };
        assert_eq!(config.query_store_path(), PathBuf::from("/tmp/custom.json"));
    }
}
