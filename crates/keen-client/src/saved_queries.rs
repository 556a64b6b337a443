//! Saved query operations
//!
//! A saved query is a named query definition stored by Keen. It is addressed
//! only by its name; definitions and results are passed through as raw JSON.
//!
//! ```no_run
//! use keen_client::{KeenApi, SavedQueriesInterface};
//! use serde_json::json;
//!
//! # async fn run() -> keen_client::Result<()> {
//! let api = KeenApi::from_env()?;
//! let saved = SavedQueriesInterface::new(&api);
//!
//! saved
//!     .create(
//!         "daily-signups",
//!         &json!({
//!             "query": {
//!                 "analysis_type": "count",
//!                 "event_collection": "signups",
//!                 "timeframe": "this_1_days"
//!             }
//!         }),
//!     )
//!     .await?;
//!
//! let with_result = saved.results("daily-signups").await?;
//! println!("{}", with_result["result"]);
//! # Ok(())
//! # }
//! ```

use crate::api::{endpoints, headers, KeenApi, RequestOptions};
use crate::error::{KeenError, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

const MISSING_MASTER_KEY: &str = "The Keen IO API requires a master key to perform this operation on saved queries. \
     Please set a 'master_key' when initializing the KeenApi object.";

const MISSING_READ_OR_MASTER_KEY: &str = "The Keen IO API requires a read key or master key to perform this operation on saved queries. \
     Please set a 'read_key' or 'master_key' when initializing the KeenApi object.";

/// Client for the saved queries resource of one project
#[derive(Debug, Clone)]
pub struct SavedQueriesInterface<'a> {
    api: &'a KeenApi,
    saved_query_url: String,
}

impl<'a> SavedQueriesInterface<'a> {
    pub fn new(api: &'a KeenApi) -> Self {
        let saved_query_url =
            endpoints::saved_queries_url(api.base_url(), api.api_version(), api.project_id());

        Self {
            api,
            saved_query_url,
        }
    }

    /// URL of the saved queries collection
    pub fn url(&self) -> &str {
        &self.saved_query_url
    }

    /// Get all saved queries of the project. Requires the master key.
    pub async fn all(&self) -> Result<Value> {
        let key = self.master_key()?;

        self.get_json(Method::GET, &self.saved_query_url, key, None)
            .await
    }

    /// Get a single saved query definition. Requires the master key.
    pub async fn get(&self, query_name: &str) -> Result<Value> {
        let key = self.master_key()?;
        let url = endpoints::saved_query_url(&self.saved_query_url, query_name);

        self.get_json(Method::GET, &url, key, None).await
    }

    /// Get a saved query together with its computed `result`
    ///
    /// Works with either key; the master key is used when both are set.
    pub async fn results(&self, query_name: &str) -> Result<Value> {
        let key = self.master_or_read_key()?;
        let url = endpoints::saved_query_result_url(&self.saved_query_url, query_name);

        self.get_json(Method::GET, &url, key, None).await
    }

    /// Create a saved query. Requires the master key.
    pub async fn create<Q>(&self, query_name: &str, saved_query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.upsert(query_name, saved_query).await
    }

    /// Update a saved query. The API treats PUT as an upsert, so this sends
    /// exactly the same request as [`create`](Self::create).
    pub async fn update<Q>(&self, query_name: &str, saved_query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.upsert(query_name, saved_query).await
    }

    /// Delete a saved query. Requires the master key.
    ///
    /// Returns `true` once the API accepts the request; the response body is
    /// not inspected.
    pub async fn delete(&self, query_name: &str) -> Result<bool> {
        let key = self.master_key()?;
        let url = endpoints::saved_query_url(&self.saved_query_url, query_name);

        let response = self
            .api
            .fulfill(Method::DELETE, &url, RequestOptions::new(headers(key)?))
            .await?;
        self.api.error_handling(response).await?;

        info!(query_name = %query_name, "Deleted saved query");
        Ok(true)
    }

    async fn upsert<Q>(&self, query_name: &str, saved_query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let key = self.master_key()?;
        let url = endpoints::saved_query_url(&self.saved_query_url, query_name);
        let payload = serde_json::to_string(saved_query)?;

        let stored = self.get_json(Method::PUT, &url, key, Some(payload)).await?;

        info!(query_name = %query_name, "Stored saved query");
        Ok(stored)
    }

    async fn get_json(
        &self,
        method: Method,
        url: &str,
        key: &str,
        body: Option<String>,
    ) -> Result<Value> {
        let mut options = RequestOptions::new(headers(key)?);
        options.body = body;

        let response = self.api.fulfill(method, url, options).await?;
        let response = self.api.error_handling(response).await?;

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn master_key(&self) -> Result<&'a str> {
        self.api
            .master_key()
            .ok_or_else(|| KeenError::invalid_environment(MISSING_MASTER_KEY))
    }

    fn master_or_read_key(&self) -> Result<&'a str> {
        let key = self.api.master_key().or_else(|| self.api.read_key());
        debug!(uses_master_key = self.api.master_key().is_some(), "Selected key for results");

        key.ok_or_else(|| KeenError::invalid_environment(MISSING_READ_OR_MASTER_KEY))
    }
}

impl KeenApi {
    /// Saved queries of this client's project
    pub fn saved_queries(&self) -> SavedQueriesInterface<'_> {
        SavedQueriesInterface::new(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::KeenConfig;

    fn api(master: Option<&str>, read: Option<&str>) -> KeenApi {
        let mut config = KeenConfig::new("p1").with_api_url("https://api.example.com");
        if let Some(key) = master {
            config = config.with_master_key(key);
        }
        if let Some(key) = read {
            config = config.with_read_key(key);
        }
        KeenApi::new(config).unwrap()
    }

    #[test]
    fn test_prefix_computed_on_construction() {
        let api = api(Some("mk"), None);
        let saved = SavedQueriesInterface::new(&api);
        assert_eq!(
            saved.url(),
            "https://api.example.com/3.0/projects/p1/queries/saved"
        );
        assert_eq!(api.saved_queries().url(), saved.url());
    }

    #[test]
    fn test_key_selection() {
        let both = api(Some("mk"), Some("rk"));
        assert_eq!(both.saved_queries().master_or_read_key().unwrap(), "mk");

        let read_only = api(None, Some("rk"));
        assert_eq!(read_only.saved_queries().master_or_read_key().unwrap(), "rk");
        assert!(read_only.saved_queries().master_key().unwrap_err().is_invalid_environment());

        let none = api(None, None);
        let err = none.saved_queries().master_or_read_key().unwrap_err();
        assert!(err.to_string().contains("read key or master key"));
    }
}
