//! Search session: the imperative shell around the reducer.
//!
//! This module wires the pure state machine to its effectful collaborators.
//! A single actor task owns the result state and the query, serializes every
//! reducer invocation, persists query edits through the store, drives the
//! fetch orchestrator on submissions and publishes read-only snapshots for
//! the rendering boundary.
//!
//! # Modules
//!
//! - [`actor`]: Session task, spawn entry point and handle
//! - [`messages`]: Command and snapshot protocol types

pub mod actor;
pub mod messages;

pub use actor::{SearchSession, SessionHandle};
pub use messages::{SessionCommand, SessionSnapshot};
