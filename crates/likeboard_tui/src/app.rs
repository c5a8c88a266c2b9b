//! Dashboard state and key handling.

use crate::form::{FormTarget, PostForm};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use likeboard_core::{CounterAction, ModerationAction, Platform, Post, PostId, RoleGate, UserRole};
use likeboard_error::{LikeboardError, LikeboardResult};
use likeboard_store::PlatformBoard;
use tracing::{debug, info, instrument};

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Post list with the status panel
    List,
    /// Add or edit form
    Form,
    /// Waiting for confirmation before deleting the selected post
    ConfirmDelete,
    /// Waiting for confirmation before zeroing the selected post's counters
    ConfirmReset,
    /// Moderator rules
    Rules,
}

/// Dashboard state.
#[derive(Debug)]
pub struct App {
    board: PlatformBoard,
    gate: RoleGate,
    /// Current mode
    pub mode: AppMode,
    /// Index of the selected post in the active platform's list
    pub selected_index: usize,
    /// Form buffers while in [`AppMode::Form`]
    pub form: Option<PostForm>,
    /// Status bar message
    pub status_message: String,
    should_quit: bool,
}

impl App {
    /// Create the dashboard over an open board.
    pub fn new(board: PlatformBoard, role: UserRole) -> Self {
        let status_message = format!("{} posts loaded", board.posts().len());
        Self {
            board,
            gate: RoleGate::new(role),
            mode: AppMode::List,
            selected_index: 0,
            form: None,
            status_message,
            should_quit: false,
        }
    }

    /// Start on the rules screen.
    pub fn with_rules(mut self) -> Self {
        self.mode = AppMode::Rules;
        self
    }

    /// Board behind the dashboard.
    pub fn board(&self) -> &PlatformBoard {
        &self.board
    }

    /// Platform being viewed.
    pub fn platform(&self) -> Platform {
        self.board.platform()
    }

    /// Active role.
    pub fn role(&self) -> UserRole {
        self.gate.role()
    }

    /// Whether the active role is offered `action`.
    pub fn allows(&self, action: ModerationAction) -> bool {
        self.gate.allows(action)
    }

    /// Selected post, if the list is not empty.
    pub fn selected_post(&self) -> Option<&Post> {
        self.board.posts().get(self.selected_index)
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pick up snapshots pushed by other writers and surface notices.
    pub fn tick(&mut self) {
        if self.board.refresh() {
            debug!("Board refreshed from store");
            self.clamp_selection();
        }
        if let Some(notice) = self.board.take_notices().pop() {
            self.status_message = notice.to_string();
        }
    }

    /// Handle a key press.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode {
            AppMode::List => self.handle_list_key(key).await,
            AppMode::Form => self.handle_form_key(key).await,
            AppMode::ConfirmDelete | AppMode::ConfirmReset => self.handle_confirm_key(key).await,
            AppMode::Rules => self.handle_rules_key(key),
        }
    }

    async fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::BackTab => {
                self.switch_platform(self.platform().previous()).await
            }
            KeyCode::Right | KeyCode::Tab => self.switch_platform(self.platform().next()).await,
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(digit) = c.to_digit(10)
                    && let Some(platform) = Platform::from_index(digit as usize - 1)
                {
                    self.switch_platform(platform).await;
                }
            }
            KeyCode::Char('c') => self.run_counter(CounterAction::IncrementComments).await,
            KeyCode::Char('l') => self.run_counter(CounterAction::IncrementLikes).await,
            KeyCode::Char('C') => self.decrement(CounterAction::DecrementComments).await,
            KeyCode::Char('L') => self.decrement(CounterAction::DecrementLikes).await,
            KeyCode::Char('x') => self.begin_reset(),
            KeyCode::Char('a') => self.open_new_form(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('d') => self.begin_delete(),
            KeyCode::Char('r') => self.toggle_role(),
            KeyCode::Char('?') => self.mode = AppMode::Rules,
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.mode = AppMode::List;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.mode = AppMode::List;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => self.submit_form().await,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.push(c),
            _ => {}
        }
    }

    async fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let mode = self.mode;
                self.mode = AppMode::List;
                match mode {
                    AppMode::ConfirmDelete => self.delete_selected().await,
                    AppMode::ConfirmReset => self.run_counter(CounterAction::Reset).await,
                    _ => {}
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::List;
                self.status_message = "Cancelled".to_string();
            }
            _ => {}
        }
    }

    fn handle_rules_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            self.mode = AppMode::List;
        }
    }

    fn select_next(&mut self) {
        let len = self.board.posts().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    fn select_previous(&mut self) {
        let len = self.board.posts().len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.board.posts().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn selected_id(&self) -> Option<PostId> {
        self.selected_post().map(|post| post.id().clone())
    }

    async fn switch_platform(&mut self, platform: Platform) {
        match self.board.switch_platform(platform).await {
            Ok(()) => {
                self.selected_index = 0;
                self.status_message = format!("Viewing {}", platform);
            }
            Err(e) => self.report(&e),
        }
    }

    fn toggle_role(&mut self) {
        let role = self.role().toggled();
        self.gate = RoleGate::new(role);
        info!(%role, "Role switched");
        self.status_message = format!("Role: {}", role);
    }

    /// Check the gate, explaining a refusal in the status bar.
    fn permit(&mut self, action: ModerationAction) -> bool {
        match self.gate.check(action) {
            Ok(()) => true,
            Err(e) => {
                self.status_message = format!(
                    "Admin only: {} cannot {}",
                    e.role,
                    e.action.replace('_', " ")
                );
                false
            }
        }
    }

    async fn run_counter(&mut self, action: CounterAction) {
        if !self.permit(action.moderation_action()) {
            return;
        }
        let Some(id) = self.selected_id() else {
            self.status_message = "No post selected".to_string();
            return;
        };
        match self.board.apply(&id, action).await {
            Ok(post) => self.status_message = counter_summary(&post),
            Err(e) => self.report(&e),
        }
    }

    async fn decrement(&mut self, action: CounterAction) {
        if !self.permit(action.moderation_action()) {
            return;
        }
        let Some(post) = self.selected_post() else {
            self.status_message = "No post selected".to_string();
            return;
        };
        let (current, what) = match action {
            CounterAction::DecrementLikes => (*post.moderator_likes(), "likes"),
            _ => (*post.total_comments(), "comments"),
        };
        if current == 0 {
            self.status_message = format!("No {} to remove", what);
            return;
        }
        self.run_counter(action).await;
    }

    fn begin_reset(&mut self) {
        if !self.permit(ModerationAction::ResetCounters) {
            return;
        }
        match self.selected_post() {
            None => self.status_message = "No post selected".to_string(),
            Some(post) if !post.has_counts() => {
                self.status_message = "Counters are already zero".to_string()
            }
            Some(_) => self.mode = AppMode::ConfirmReset,
        }
    }

    fn begin_delete(&mut self) {
        if !self.permit(ModerationAction::DeletePost) {
            return;
        }
        if self.selected_post().is_some() {
            self.mode = AppMode::ConfirmDelete;
        } else {
            self.status_message = "No post selected".to_string();
        }
    }

    fn open_new_form(&mut self) {
        if !self.permit(ModerationAction::CreatePost) {
            return;
        }
        self.form = Some(PostForm::for_new(chrono::Local::now().date_naive()));
        self.mode = AppMode::Form;
    }

    fn open_edit_form(&mut self) {
        if !self.permit(ModerationAction::EditPost) {
            return;
        }
        match self.selected_post() {
            Some(post) => {
                self.form = Some(PostForm::for_edit(post));
                self.mode = AppMode::Form;
            }
            None => self.status_message = "No post selected".to_string(),
        }
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        match self.save_form(&form).await {
            Ok(message) => {
                self.form = None;
                self.mode = AppMode::List;
                self.status_message = message.to_string();
            }
            Err(e) => self.report(&e),
        }
    }

    async fn save_form(&mut self, form: &PostForm) -> LikeboardResult<&'static str> {
        match form.target() {
            FormTarget::New => {
                let new_post = form.to_new_post(self.platform())?;
                let id = self.board.create_post(new_post).await?;
                self.selected_index = self
                    .board
                    .posts()
                    .iter()
                    .position(|p| *p.id() == id)
                    .unwrap_or(0);
                Ok("Post added")
            }
            FormTarget::Edit(id) => {
                let edit = form.to_edit()?;
                self.board.edit_post(id, edit).await?;
                Ok("Post updated")
            }
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.board.delete_post(&id).await {
            Ok(()) => {
                self.clamp_selection();
                self.status_message = "Post deleted".to_string();
            }
            Err(e) => self.report(&e),
        }
    }

    /// Show a failure in the status bar, preferring the board's notice.
    fn report(&mut self, err: &LikeboardError) {
        self.status_message = match self.board.take_notices().pop() {
            Some(notice) => notice.to_string(),
            None => err.user_message(),
        };
    }
}

/// One-line outcome of a counter change.
fn counter_summary(post: &Post) -> String {
    let status = post.like_status();
    if status.is_like_due {
        format!("Time to like! {} like(s) owed by rule", status.likes_owed)
    } else {
        format!(
            "{} comment(s) to the next like",
            status.comments_until_next_like
        )
    }
}
