//! In-memory query store for tests and ephemeral sessions.

use crate::domain::error::Result;
use crate::store::backend::QueryStore;
use std::collections::HashMap;

/// Volatile [`QueryStore`] backed by a `HashMap`.
///
/// Nothing survives the process; this exists so the session actor can be
/// exercised under test without touching the filesystem, and as a fallback
/// when no writable data directory is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryQueryStore {
    entries: HashMap<String, String>,
}

impl MemoryQueryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryStore for MemoryQueryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryQueryStore::new();
        assert_eq!(store.get("search").unwrap(), None);

        store.set("search", "react").unwrap();
        assert_eq!(store.get("search").unwrap(), Some("react".to_string()));
    }
}
