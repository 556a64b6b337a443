//! keen CLI - Main entry point

use clap::Parser;
use keen_client::{commands, Cli, Commands, ConfigCommand, KeenApi, SavedCommand};
use keen_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Verbose mode logs debug events; environment variables take precedence
    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    let log_config = LogConfig::builder()
        .level(level)
        .log_file_prefix("keen-cli")
        .build();
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // CLI should work without logging
    let guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        drop(guard);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> keen_client::Result<()> {
    let config = cli.keen_config();

    match &cli.command {
        Commands::Saved { command } => {
            let api = KeenApi::new(config)?;

            match command {
                SavedCommand::List => commands::saved::list(&api).await,
                SavedCommand::Get { name } => commands::saved::get(&api, name).await,
                SavedCommand::Results { name } => commands::saved::results(&api, name).await,
                SavedCommand::Create { name, input } => {
                    commands::saved::create(&api, name, input).await
                },
                SavedCommand::Update { name, input } => {
                    commands::saved::update(&api, name, input).await
                },
                SavedCommand::Delete { name } => commands::saved::delete(&api, name).await,
            }
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => commands::config::show(&config).await,
        },
    }
}
