//! swipekit common utilities
//!
//! Shared infrastructure for all swipekit crates:
//! - Error types and result aliases
//! - Recognition thresholds and configuration loading
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
