//! Durable persistence for the search query.
//!
//! This module provides the storage abstraction for the "remember last value"
//! behaviour of the search box: the current query is written through on every
//! edit and read back on the next start.
//!
//! # Modules
//!
//! - [`backend`]: Query store trait abstraction
//! - [`json`]: JSON file-based implementation with atomic writes
//! - [`memory`]: In-memory fake for tests

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{QueryStore, SEARCH_QUERY_KEY};
pub use json::JsonQueryStore;
pub use memory::MemoryQueryStore;
