//! Likeboard binary.

use clap::Parser;
use likeboard::LikeboardConfig;
use likeboard::cli::{Cli, Commands, execute};
use likeboard_core::{LogTarget, init_tracing};
use likeboard_store::{JsonFilePostRepository, PostRepository};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = LikeboardConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui { platform: None });

    // The dashboard owns the terminal, so its logs go to a file
    let log_target = match command {
        Commands::Tui { .. } => LogTarget::File(config.log_file()),
        _ => LogTarget::Stderr,
    };
    init_tracing(config.log_level(), log_target)?;

    let role = match cli.role {
        Some(role) => role,
        None => config.role()?,
    };
    let data_file = cli.data_file.unwrap_or_else(|| config.data_file().clone());
    tracing::debug!(path = %data_file.display(), %role, "Opening post store");

    let repo: Arc<dyn PostRepository> = Arc::new(JsonFilePostRepository::open(&data_file).await?);
    let output = execute(command, repo, role, &config).await?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
