//! Query store abstraction.
//!
//! This module defines the [`QueryStore`] trait that abstracts over durable
//! key-value persistence of the search term. The trait is deliberately minimal:
//! the application reads one value at startup and writes it back on every edit.
//! Keeping it behind a trait means the session actor can be tested against an
//! in-memory fake instead of the filesystem.

use crate::domain::error::Result;

/// Logical key the search term is persisted under.
pub const SEARCH_QUERY_KEY: &str = "search";

/// Abstraction over durable key-value storage for small text values.
///
/// Implementations must persist a written value durably before `set` returns,
/// so that a subsequent process start observes it via `get`.
///
/// # Implementations
///
/// - [`JsonQueryStore`](crate::store::JsonQueryStore): JSON file with atomic writes (default)
/// - [`MemoryQueryStore`](crate::store::MemoryQueryStore): in-memory fake for tests
pub trait QueryStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when no value has ever been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably persists `value` under `key`.
    ///
    /// Overwrites any previous value. The write must be complete (or safely
    /// journaled) by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
