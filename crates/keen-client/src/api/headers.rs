//! Request header construction

use crate::error::{KeenError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// SDK identification sent with every request
pub const SDK_HEADER: &str = "keen-sdk";

/// Value of the SDK identification header
pub fn sdk_version() -> String {
    format!("rust-{}", env!("CARGO_PKG_VERSION"))
}

/// Build the headers for a request authenticated with `key`
pub fn headers(key: &str) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    let mut auth = HeaderValue::from_str(key).map_err(|_| {
        KeenError::invalid_environment("The configured Keen API key contains characters that are not valid in an HTTP header.")
    })?;
    auth.set_sensitive(true);

    map.insert(AUTHORIZATION, auth);
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    map.insert(
        HeaderName::from_static(SDK_HEADER),
        HeaderValue::from_str(&sdk_version()).map_err(anyhow::Error::from)?,
    );

    Ok(map)
}
