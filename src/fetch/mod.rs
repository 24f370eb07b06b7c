//! Remote search: request construction, transport and orchestration.
//!
//! This module forms the effectful half of the fetch lifecycle. The session
//! actor calls into [`orchestrator`] on each submission; the orchestrator
//! builds the target via [`request`], runs the transport from [`client`] on a
//! spawned task, and reports a terminal [`orchestrator::FetchOutcome`] back to
//! the actor.
//!
//! # Modules
//!
//! - [`request`]: Pure request target construction
//! - [`client`]: Transport trait and reqwest implementation
//! - [`orchestrator`]: Submission sequencing and outcome reporting

pub mod client;
pub mod orchestrator;
pub mod request;

pub use client::{HttpSearchClient, SearchClient, SearchPayload};
pub use orchestrator::{FetchOrchestrator, FetchOutcome};
pub use request::{build_request, DEFAULT_API_BASE};
