//! Application layer: the result state machine.
//!
//! This module holds the pure core of the crate. It follows a unidirectional
//! data flow pattern:
//!
//! ```text
//! User Commands ──► Session Actor ──► Actions ──► Reducer ──► ResultState
//!                        ▲                                        │
//!                        └──────── Fetch Outcomes ◄───────────────┘
//! ```
//!
//! Nothing in this module performs I/O. The session actor in [`crate::session`]
//! and the fetch orchestrator in [`crate::fetch`] form the imperative shell that
//! feeds the reducer.
//!
//! # Modules
//!
//! - [`actions`]: The closed set of state transitions
//! - [`reducer`]: The pure transition function
//! - [`state`]: Result state container and derived phases

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{Phase, ResultState};
