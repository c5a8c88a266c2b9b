//! Terminal setup and the event loop.

use crate::app::App;
use crate::rules_marker::RulesMarker;
use crate::ui;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use likeboard_core::{Platform, UserRole};
use likeboard_error::{LikeboardResult, TuiError};
use likeboard_store::{PlatformBoard, PostRepository};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Startup options for the dashboard.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(default)]
pub struct TuiOptions {
    /// Tab shown first
    platform: Platform,
    /// Role the session starts in
    role: UserRole,
    /// How long to wait for input before refreshing
    tick_rate: Duration,
    /// Show the rules once if the marker is missing
    show_rules_on_first_launch: bool,
    /// Where the first-launch marker lives
    #[builder(setter(strip_option))]
    rules_marker: Option<RulesMarker>,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            role: UserRole::default(),
            tick_rate: Duration::from_millis(250),
            show_rules_on_first_launch: true,
            rules_marker: RulesMarker::default_location(),
        }
    }
}

/// Run the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn, or the board
/// cannot subscribe to the store.
#[instrument(skip_all, fields(platform = %options.platform, role = %options.role))]
pub async fn run_tui(repo: Arc<dyn PostRepository>, options: TuiOptions) -> LikeboardResult<()> {
    let board = PlatformBoard::open(repo, options.platform).await?;
    let mut app = App::new(board, options.role);

    if options.show_rules_on_first_launch
        && let Some(marker) = &options.rules_marker
        && marker.is_first_launch()
    {
        app = app.with_rules();
        if let Err(e) = marker.record() {
            warn!(error = %e, "Could not record rules marker");
        }
    }

    let mut terminal = setup_terminal()?;
    info!("Dashboard started");
    let result = run_app(&mut terminal, &mut app, options.tick_rate).await;
    restore_terminal(&mut terminal)?;
    info!("Dashboard closed");
    result
}

/// Draw, read one key or time out, refresh; until quit.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> LikeboardResult<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(TuiError::from)?;

        if event::poll(tick_rate).map_err(TuiError::from)?
            && let Event::Key(key) = event::read().map_err(TuiError::from)?
        {
            app.handle_key(key).await;
        }
        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), TuiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
