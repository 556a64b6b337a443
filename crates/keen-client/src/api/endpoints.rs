//! API endpoint URL builders
//!
//! Query names are inserted verbatim; callers are responsible for passing
//! URL-safe names.

/// Build the saved queries collection URL
pub fn saved_queries_url(base_url: &str, api_version: &str, project_id: &str) -> String {
    format!(
        "{}/{}/projects/{}/queries/saved",
        base_url, api_version, project_id
    )
}

/// Build a single saved query URL from the collection URL
pub fn saved_query_url(saved_queries_url: &str, query_name: &str) -> String {
    format!("{}/{}", saved_queries_url, query_name)
}

/// Build the saved query result URL from the collection URL
pub fn saved_query_result_url(saved_queries_url: &str, query_name: &str) -> String {
    format!("{}/{}/result", saved_queries_url, query_name)
}
