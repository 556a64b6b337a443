//! `keen saved` command implementation
//!
//! Thin wrappers over [`SavedQueriesInterface`] that print the API response
//! as pretty JSON on stdout.

use crate::api::KeenApi;
use crate::error::{KeenError, Result};
use crate::QueryInput;
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

/// List all saved queries
pub async fn list(api: &KeenApi) -> Result<()> {
    let queries = api.saved_queries().all().await?;
    print_json(&queries)
}

/// Show one saved query definition
pub async fn get(api: &KeenApi, name: &str) -> Result<()> {
    let query = api.saved_queries().get(name).await?;
    print_json(&query)
}

/// Show a saved query with its computed result
pub async fn results(api: &KeenApi, name: &str) -> Result<()> {
    let query = api.saved_queries().results(name).await?;
    print_json(&query)
}

/// Create a saved query from a JSON definition
pub async fn create(api: &KeenApi, name: &str, input: &QueryInput) -> Result<()> {
    let definition = read_definition(input)?;
    let stored = api.saved_queries().create(name, &definition).await?;
    print_json(&stored)
}

/// Update a saved query from a JSON definition
pub async fn update(api: &KeenApi, name: &str, input: &QueryInput) -> Result<()> {
    let definition = read_definition(input)?;
    let stored = api.saved_queries().update(name, &definition).await?;
    print_json(&stored)
}

/// Delete a saved query
pub async fn delete(api: &KeenApi, name: &str) -> Result<()> {
    api.saved_queries().delete(name).await?;
    println!("{} Deleted saved query '{}'", "✓".green(), name);
    Ok(())
}

/// Load the query definition from `--query` or `--file`
fn read_definition(input: &QueryInput) -> Result<Value> {
    let raw = match (&input.query, &input.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => {
            debug!(path = %path.display(), "Reading saved query definition");
            std::fs::read_to_string(path)?
        },
        (None, None) => {
            return Err(KeenError::config(
                "a query definition is required (pass --query or --file)",
            ))
        },
    };

    Ok(serde_json::from_str(&raw)?)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_read_definition_inline() {
        let input = QueryInput {
            query: Some(r#"{"refresh_rate": 0}"#.to_string()),
            file: None,
        };
        assert_eq!(read_definition(&input).unwrap(), json!({"refresh_rate": 0}));
    }

    #[test]
    fn test_read_definition_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"query": {{"analysis_type": "count"}}}}"#).unwrap();

        let input = QueryInput {
            query: None,
            file: Some(file.path().to_path_buf()),
        };
        assert_eq!(
            read_definition(&input).unwrap(),
            json!({"query": {"analysis_type": "count"}})
        );
    }

    #[test]
    fn test_read_definition_rejects_invalid_json() {
        let input = QueryInput {
            query: Some("{not json".to_string()),
            file: None,
        };
        assert!(matches!(
            read_definition(&input).unwrap_err(),
            KeenError::JsonParse(_)
        ));
    }
}
