//! Keen Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Functionality shared across the Keen client workspace members. At the
//! moment that is the tracing setup used by every binary.

pub mod logging;

pub use logging::{init_logging, LogConfig};
