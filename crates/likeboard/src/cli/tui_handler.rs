//! Dashboard launcher.

use super::posts::{handle_seed, is_store_empty};
use crate::LikeboardConfig;
use likeboard_core::{Platform, RoleGate, UserRole};
use likeboard_error::{LikeboardResult, TuiError};
use likeboard_store::PostRepository;
use likeboard_tui::{TuiOptionsBuilder, run_tui};
use std::sync::Arc;
use tracing::info;

/// Open the dashboard, seeding an empty store first if configured.
pub async fn launch_tui(
    repo: Arc<dyn PostRepository>,
    role: UserRole,
    platform: Option<Platform>,
    config: &LikeboardConfig,
) -> LikeboardResult<()> {
    if *config.seed_on_empty() && is_store_empty(repo.as_ref()).await? {
        info!("Store is empty, loading demonstration posts");
        handle_seed(repo.as_ref(), &RoleGate::new(UserRole::Admin), false).await?;
    }

    let platform = match platform {
        Some(p) => p,
        None => config.platform()?,
    };
    let options = TuiOptionsBuilder::default()
        .platform(platform)
        .role(role)
        .tick_rate(config.tick_rate())
        .show_rules_on_first_launch(*config.show_rules_on_first_launch())
        .build()
        .map_err(|e| TuiError::new(e.to_string()))?;

    run_tui(repo, options).await
}
