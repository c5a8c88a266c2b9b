//! Command-line interface module.
//!
//! Handlers return the text to print so they can be driven from tests
//! without a terminal.

mod commands;
mod counters;
mod posts;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use counters::{handle_counter, handle_ratio, handle_reset};
pub use posts::{
    handle_add, handle_delete, handle_edit, handle_list, handle_seed, handle_status,
    is_store_empty,
};
pub use tui_handler::launch_tui;

use crate::LikeboardConfig;
use likeboard_core::{CounterAction, RoleGate, UserRole};
use likeboard_error::LikeboardResult;
use likeboard_store::PostRepository;
use std::sync::Arc;

/// Run one command as `role` and return its output.
pub async fn execute(
    command: Commands,
    repo: Arc<dyn PostRepository>,
    role: UserRole,
    config: &LikeboardConfig,
) -> LikeboardResult<String> {
    let gate = RoleGate::new(role);
    let store = repo.as_ref();

    match command {
        Commands::Tui { platform } => {
            launch_tui(repo, role, platform, config).await?;
            Ok(String::new())
        }
        Commands::List { platform } => handle_list(store, &gate, platform).await,
        Commands::Status { id } => handle_status(store, &gate, &id).await,
        Commands::Ratio { count, json } => handle_ratio(&gate, &count, json),
        Commands::Add {
            platform,
            description,
            date,
            image,
        } => handle_add(store, &gate, platform, description, date, image).await,
        Commands::Edit {
            id,
            description,
            date,
            image,
            clear_image,
        } => handle_edit(store, &gate, &id, description, date, image, clear_image).await,
        Commands::Comment { id, remove } => {
            let action = if remove {
                CounterAction::DecrementComments
            } else {
                CounterAction::IncrementComments
            };
            handle_counter(store, &gate, &id, action).await
        }
        Commands::Like { id, remove } => {
            let action = if remove {
                CounterAction::DecrementLikes
            } else {
                CounterAction::IncrementLikes
            };
            handle_counter(store, &gate, &id, action).await
        }
        Commands::Reset { id, yes } => handle_reset(store, &gate, &id, yes).await,
        Commands::Delete { id, yes } => handle_delete(store, &gate, &id, yes).await,
        Commands::Seed { force } => handle_seed(store, &gate, force).await,
    }
}
