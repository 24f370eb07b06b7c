//! Domain layer for hnscout.
//!
//! This module contains the core domain types for the crate, independent of
//! transport or persistence concerns. It keeps the business vocabulary (stories,
//! identifiers, errors) isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story record and identifier types

pub mod error;
pub mod story;

pub use error::{HnScoutError, Result};
pub use story::{Story, StoryId};
