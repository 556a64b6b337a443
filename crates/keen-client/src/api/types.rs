//! Request and response types shared by the API client

use reqwest::header::HeaderMap;
use serde_json::Value;

/// Per-request options handed to [`KeenApi::fulfill`](super::KeenApi::fulfill)
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,

    /// Raw request body, already serialized
    pub body: Option<String>,

    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(headers: HeaderMap) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Error payload returned by the Keen API on failed requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error_code: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Pick `error_code` and `message` out of a parsed error body
    ///
    /// Non-string values are kept in their JSON text form; missing or null
    /// fields stay `None`.
    pub fn from_json(value: &Value) -> Self {
        Self {
            error_code: field_text(value, "error_code"),
            message: field_text(value, "message"),
        }
    }
}

fn field_text(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
