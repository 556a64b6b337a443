//! Configuration for the Keen client
//!
//! Values come from `KEEN_*` environment variables and can be overridden by
//! command-line flags.

use crate::error::{KeenError, Result};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default Keen API base URL.
pub const DEFAULT_API_URL: &str = "https://api.keen.io";

/// Default Keen API version segment.
pub const DEFAULT_API_VERSION: &str = "3.0";

/// Default request timeout in seconds.
/// Saved query results can take several minutes to compute on the server.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 305;

/// Keen client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct KeenConfig {
    /// Keen project identifier
    pub project_id: Option<String>,

    /// Master key, grants read/write access to saved queries
    pub master_key: Option<String>,

    /// Read key, grants access to saved query results only
    pub read_key: Option<String>,

    /// API base URL, without trailing slash
    pub api_url: String,

    pub api_version: String,

    pub timeout_secs: u64,
}

impl std::fmt::Debug for KeenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeenConfig")
            .field("project_id", &self.project_id)
            .field("master_key", &mask_key(self.master_key.as_deref()))
            .field("read_key", &mask_key(self.read_key.as_deref()))
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for KeenConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            master_key: None,
            read_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl KeenConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::default().with_project_id(project_id)
    }

    /// Load config from environment variables
    ///
    /// - `KEEN_PROJECT_ID`
    /// - `KEEN_MASTER_KEY`
    /// - `KEEN_READ_KEY`
    /// - `KEEN_API_URL` (default: https://api.keen.io)
    /// - `KEEN_API_VERSION` (default: 3.0)
    /// - `KEEN_API_TIMEOUT_SECS` (default: 305)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.project_id = non_empty(std::env::var("KEEN_PROJECT_ID").ok());
        config.master_key = non_empty(std::env::var("KEEN_MASTER_KEY").ok());
        config.read_key = non_empty(std::env::var("KEEN_READ_KEY").ok());

        if let Some(url) = non_empty(std::env::var("KEEN_API_URL").ok()) {
            config.api_url = url;
        }

        if let Some(version) = non_empty(std::env::var("KEEN_API_VERSION").ok()) {
            config.api_version = version;
        }

        if let Ok(timeout) = std::env::var("KEEN_API_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                KeenError::config(format!(
                    "KEEN_API_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        Ok(config)
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = non_empty(Some(project_id.into()));
        self
    }

    pub fn with_master_key(mut self, key: impl Into<String>) -> Self {
        self.master_key = non_empty(Some(key.into()));
        self
    }

    pub fn with_read_key(mut self, key: impl Into<String>) -> Self {
        self.read_key = non_empty(Some(key.into()));
        self
    }

    /// Set the API base URL; an empty value keeps the current one
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        if let Some(url) = non_empty(Some(url.into())) {
            self.api_url = url;
        }
        self
    }

    /// Set the API version; an empty value keeps the current one
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        if let Some(version) = non_empty(Some(version.into())) {
            self.api_version = version;
        }
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the config is usable and return the normalized base URL
    pub fn validate(&self) -> Result<String> {
        if self.project_id.is_none() {
            return Err(KeenError::config(
                "a project id is required (set KEEN_PROJECT_ID or pass --project-id)",
            ));
        }

        if self.api_version.trim().is_empty() {
            return Err(KeenError::config("API version cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(KeenError::config("request timeout must be greater than 0"));
        }

        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| KeenError::config(format!("invalid API URL '{}': {}", self.api_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(KeenError::config(format!(
                "API URL must use http or https, got '{}'",
                self.api_url
            )));
        }

        Ok(self.api_url.trim_end_matches('/').to_string())
    }
}

/// Mask a key for display, keeping only its last four characters
pub fn mask_key(key: Option<&str>) -> String {
    match key {
        None => "(not set)".to_string(),
        Some(k) if k.chars().count() <= 4 => "****".to_string(),
        Some(k) => {
            let tail: String = k.chars().skip(k.chars().count() - 4).collect();
            format!("****{}", tail)
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
