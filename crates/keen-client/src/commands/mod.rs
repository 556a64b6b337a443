//! CLI command implementations
//!
//! Each subcommand group has its own module.

pub mod config;
pub mod saved;
