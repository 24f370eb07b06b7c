//! Error types for hnscout.
//!
//! This module defines the centralized error type [`HnScoutError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for hnscout operations.
///
/// This enum consolidates all error conditions that can occur while fetching,
/// persisting, or configuring a search session. Fetch-related failures (network,
/// non-success status, malformed payload) are deliberately collapsed into a
/// single variant: the state machine surfaces them as one error flag and never
/// distinguishes between them.
///
/// # Examples
///
/// ```
/// use hnscout::domain::HnScoutError;
///
/// fn validate_config() -> Result<(), HnScoutError> {
///     Err(HnScoutError::Config("missing API base".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum HnScoutError {
    /// Remote search request failed.
    ///
    /// Covers connection errors, non-2xx status codes, and response bodies that
    /// do not match the expected payload shape. At the orchestration boundary
    /// this is converted into a `FetchFailure` action, never propagated upward.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Query store operation failed.
    ///
    /// Occurs when reading from or writing to the durable query store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Communication with the session actor failed.
    ///
    /// Occurs when a command cannot be delivered because the session task has
    /// shut down and its channel is closed.
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for hnscout operations.
///
/// This is a type alias for `std::result::Result<T, HnScoutError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, HnScoutError>;
