//! `keen config` command implementation

use crate::config::{mask_key, KeenConfig};
use crate::error::Result;
use colored::Colorize;

/// Show the effective configuration with keys masked
pub async fn show(config: &KeenConfig) -> Result<()> {
    for line in render(config) {
        println!("{}", line);
    }

    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  KEEN_PROJECT_ID       - Project id");
    println!("  KEEN_MASTER_KEY       - Master key");
    println!("  KEEN_READ_KEY         - Read key");
    println!("  KEEN_API_URL          - API base URL");
    println!("  KEEN_API_VERSION      - API version");
    println!("  KEEN_API_TIMEOUT_SECS - Request timeout");

    Ok(())
}

fn render(config: &KeenConfig) -> Vec<String> {
    vec![
        "Keen Client Configuration:".cyan().bold().to_string(),
        format!(
            "{:<14} {}",
            "project_id:",
            config.project_id.as_deref().unwrap_or("(not set)")
        ),
        format!("{:<14} {}", "master_key:", mask_key(config.master_key.as_deref())),
        format!("{:<14} {}", "read_key:", mask_key(config.read_key.as_deref())),
        format!("{:<14} {}", "api_url:", config.api_url),
        format!("{:<14} {}", "api_version:", config.api_version),
        format!("{:<14} {}s", "timeout:", config.timeout_secs),
    ]
}
