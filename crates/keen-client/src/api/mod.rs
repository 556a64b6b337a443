//! API client module
//!
//! The shared Keen API client: configuration, HTTP transport and translation
//! of failed responses into [`KeenError::Api`](crate::error::KeenError::Api).

pub mod client;
pub mod endpoints;
pub mod headers;
pub mod types;

pub use client::KeenApi;
pub use headers::headers;
pub use types::*;
