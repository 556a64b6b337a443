//! Keen IO Client Library
//!
//! Client for the saved queries resource of the Keen IO analytics API.
//!
//! # Overview
//!
//! - **Shared API client** ([`KeenApi`]): project configuration, HTTP
//!   transport and translation of failed responses into typed errors
//! - **Saved queries** ([`SavedQueriesInterface`]): list, get, results,
//!   create, update and delete saved queries by name
//! - **CLI** (`keen`): the same operations from the command line

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod saved_queries;

// Re-export commonly used types
pub use api::KeenApi;
pub use config::KeenConfig;
pub use error::{KeenError, Result};
pub use saved_queries::SavedQueriesInterface;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// keen - manage Keen IO saved queries
#[derive(Parser, Debug)]
#[command(name = "keen")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keen project id
    #[arg(long, env = "KEEN_PROJECT_ID", global = true)]
    pub project_id: Option<String>,

    /// Master key
    #[arg(long, env = "KEEN_MASTER_KEY", global = true, hide_env_values = true)]
    pub master_key: Option<String>,

    /// Read key
    #[arg(long, env = "KEEN_READ_KEY", global = true, hide_env_values = true)]
    pub read_key: Option<String>,

    /// API base URL
    #[arg(long, env = "KEEN_API_URL", default_value = config::DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// API version
    #[arg(long, env = "KEEN_API_VERSION", default_value = config::DEFAULT_API_VERSION, global = true)]
    pub api_version: String,

    /// Request timeout in seconds
    #[arg(long, env = "KEEN_API_TIMEOUT_SECS", default_value_t = config::DEFAULT_API_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Client configuration from flags, falling back to `KEEN_*` variables
    pub fn keen_config(&self) -> KeenConfig {
        let mut config = KeenConfig::default()
            .with_api_url(self.api_url.clone())
            .with_api_version(self.api_version.clone())
            .with_timeout_secs(self.timeout_secs);

        if let Some(ref id) = self.project_id {
            config = config.with_project_id(id.clone());
        }
        if let Some(ref key) = self.master_key {
            config = config.with_master_key(key.clone());
        }
        if let Some(ref key) = self.read_key {
            config = config.with_read_key(key.clone());
        }

        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage saved queries
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Saved query subcommands
#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List all saved queries
    List,

    /// Show a saved query definition
    Get {
        /// Saved query name
        name: String,
    },

    /// Show a saved query with its latest result
    Results {
        /// Saved query name
        name: String,
    },

    /// Create a saved query
    Create {
        /// Saved query name
        name: String,

        #[command(flatten)]
        input: QueryInput,
    },

    /// Update a saved query
    Update {
        /// Saved query name
        name: String,

        #[command(flatten)]
        input: QueryInput,
    },

    /// Delete a saved query
    Delete {
        /// Saved query name
        name: String,
    },
}

/// Source of a saved query definition
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct QueryInput {
    /// Path to a JSON file holding the definition
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Inline JSON definition
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "keen",
            "--project-id",
            "p1",
            "--master-key",
            "mk",
            "--api-url",
            "http://localhost:1234",
            "saved",
            "get",
            "foo",
        ])
        .unwrap();

        let config = cli.keen_config();
        assert_eq!(config.project_id.as_deref(), Some("p1"));
        assert_eq!(config.master_key.as_deref(), Some("mk"));
        assert_eq!(config.api_url, "http://localhost:1234");
        assert!(matches!(
            cli.command,
            Commands::Saved {
                command: SavedCommand::Get { ref name }
            } if name == "foo"
        ));
    }

    #[test]
    #[serial]
    fn test_empty_env_values_fall_back_to_defaults() {
        std::env::set_var("KEEN_API_URL", "");
        std::env::set_var("KEEN_API_VERSION", "");
        std::env::set_var("KEEN_MASTER_KEY", "");

        let cli = Cli::try_parse_from(["keen", "--project-id", "p1", "saved", "list"]).unwrap();
        let config = cli.keen_config();

        std::env::remove_var("KEEN_API_URL");
        std::env::remove_var("KEEN_API_VERSION");
        std::env::remove_var("KEEN_MASTER_KEY");

        assert_eq!(config.api_url, config::DEFAULT_API_URL);
        assert_eq!(config.api_version, config::DEFAULT_API_VERSION);
        assert!(config.master_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_create_requires_exactly_one_input() {
        assert!(Cli::try_parse_from(["keen", "saved", "create", "foo"]).is_err());
        assert!(Cli::try_parse_from([
            "keen", "saved", "create", "foo", "--query", "{}", "--file", "q.json"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["keen", "saved", "create", "foo", "--query", "{}"]).is_ok());
    }
}
