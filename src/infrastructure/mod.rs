//! Infrastructure layer: platform-specific utilities.
//!
//! # Modules
//!
//! - [`paths`]: Data directory and store file location

pub mod paths;

pub use paths::{data_dir, query_store_path};
