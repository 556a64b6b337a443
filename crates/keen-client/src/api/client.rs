//! HTTP API client for Keen IO
//!
//! [`KeenApi`] owns the project configuration and the HTTP transport. Resource
//! interfaces such as [`SavedQueriesInterface`](crate::saved_queries::SavedQueriesInterface)
//! borrow it to issue their requests.

use crate::api::types::{ApiErrorBody, RequestOptions};
use crate::config::{mask_key, KeenConfig};
use crate::error::{KeenError, Result};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, warn};

/// Longest slice of a non-JSON error body carried into the error message.
const MAX_ERROR_BODY_CHARS: usize = 1000;

/// Shared client for the Keen IO API
#[derive(Clone)]
pub struct KeenApi {
    client: Client,
    base_url: String,
    api_version: String,
    project_id: String,
    master_key: Option<String>,
    read_key: Option<String>,
}

impl std::fmt::Debug for KeenApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeenApi")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("project_id", &self.project_id)
            .field("master_key", &mask_key(self.master_key.as_deref()))
            .field("read_key", &mask_key(self.read_key.as_deref()))
            .finish_non_exhaustive()
    }
}

impl KeenApi {
    /// Create a new API client
    pub fn new(config: KeenConfig) -> Result<Self> {
        let base_url = config.validate()?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        let KeenConfig {
            project_id,
            master_key,
            read_key,
            api_version,
            ..
        } = config;

        Ok(Self {
            client,
            base_url,
            api_version,
            project_id: project_id.unwrap_or_default(),
            master_key,
            read_key,
        })
    }

    /// Create from `KEEN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(KeenConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn master_key(&self) -> Option<&str> {
        self.master_key.as_deref()
    }

    pub fn read_key(&self) -> Option<&str> {
        self.read_key.as_deref()
    }

    /// Send a single request
    ///
    /// Only transport failures are errors here; the status code is left for
    /// [`error_handling`](Self::error_handling).
    pub async fn fulfill(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        debug!(method = %method, url = %url, "Sending Keen API request");

        let mut request = self.client.request(method, url).headers(options.headers);

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }

        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        debug!(status = %response.status(), url = %url, "Received Keen API response");

        Ok(response)
    }

    /// Pass a successful response through, or turn a failed one into an error
    ///
    /// The error carries the `error_code` and `message` fields of the Keen
    /// error payload. If the body is not JSON, the status code stands in for
    /// the error code and the raw body for the message.
    pub async fn error_handling(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;

        let err = match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                let body = ApiErrorBody::from_json(&value);
                KeenError::api(
                    status.as_u16(),
                    body.error_code
                        .unwrap_or_else(|| status.as_u16().to_string()),
                    body.message.unwrap_or_else(|| {
                        status.canonical_reason().unwrap_or("Unknown error").to_string()
                    }),
                )
            },
            Err(_) => {
                let snippet: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
                KeenError::api(
                    status.as_u16(),
                    status.as_u16().to_string(),
                    format!("The API did not respond with JSON, but: {}", snippet),
                )
            },
        };

        warn!(
            status = status.as_u16(),
            error_code = err.error_code().unwrap_or_default(),
            "Keen API request failed"
        );

        Err(err)
    }
}
