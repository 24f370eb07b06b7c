//! Platform path resolution.
//!
//! This module locates the per-user data directory used for the durable query
//! store, following the platform's conventions (XDG on Linux, Application
//! Support on macOS, AppData on Windows).

use directories::ProjectDirs;
use std::path::PathBuf;

/// Returns the data directory for hnscout storage.
///
/// Falls back to the current directory when no home directory can be
/// determined (for example in a stripped-down container).
#[must_use]
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", "hnscout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default path of the JSON query store file.
#[must_use]
pub fn query_store_path() -> PathBuf {
    data_dir().join("query.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_lives_under_the_data_dir() {
        let path = query_store_path();
        assert!(path.starts_with(data_dir()));
        assert_eq!(path.file_name().unwrap(), "query.json");
    }
}
