//! Observability: tracing subscriber setup.
//!
//! The library itself only emits `tracing` spans and events; installing a
//! subscriber is left to the embedding binary. [`init`] provides the setup the
//! bundled binary uses.

pub mod init;

pub use init::init_tracing;
