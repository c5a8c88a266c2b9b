//! UI rendering for the dashboard.

use crate::app::{App, AppMode};
use crate::form::FormField;
use likeboard_core::{COMMENTS_PER_LIKE, Platform, Post, UserRole};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Row, Table, TableState, Tabs, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Platform tabs
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_tabs(f, app, chunks[1]);

    match app.mode {
        AppMode::List => draw_list_view(f, app, chunks[2]),
        AppMode::Form => draw_form_view(f, app, chunks[2]),
        AppMode::ConfirmDelete => {
            draw_list_view(f, app, chunks[2]);
            draw_confirm(f, "Delete this post? (y/n)", chunks[2]);
        }
        AppMode::ConfirmReset => {
            draw_list_view(f, app, chunks[2]);
            draw_confirm(f, "Reset comments and likes to zero? (y/n)", chunks[2]);
        }
        AppMode::Rules => draw_rules_view(f, chunks[2]),
    }

    draw_status_bar(f, app, chunks[3]);
}

/// Accent colour of a platform tab.
pub fn platform_color(platform: Platform) -> Color {
    match platform {
        Platform::Facebook => Color::Blue,
        Platform::Instagram => Color::Magenta,
        Platform::TikTok => Color::White,
        Platform::LinkedIn => Color::LightBlue,
        Platform::X => Color::Gray,
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Likeboard - Social Like Dashboard | Role: {}", app.role());
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let active = app.platform();
    let titles: Vec<Line> = Platform::all()
        .into_iter()
        .map(|p| Line::from(format!("{} {}", p.index() + 1, p)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Platforms"))
        .select(active.index())
        .highlight_style(
            Style::default()
                .fg(platform_color(active))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::List => match app.role() {
            UserRole::Admin => {
                "←→/1-5: Platform | ↑↓: Select | c/l: +Comment/+Like | C/L: -Comment/-Like | x: Reset | a/e/d: Add/Edit/Delete | r: Role | ?: Rules | q: Quit"
            }
            UserRole::Moderator => {
                "←→/1-5: Platform | ↑↓: Select | c: +Comment | l: +Like | r: Role | ?: Rules | q: Quit"
            }
        },
        AppMode::Form => "Tab: Next field | Enter: Save | Esc: Cancel",
        AppMode::ConfirmDelete | AppMode::ConfirmReset => "y: Confirm | n/Esc: Cancel",
        AppMode::Rules => "Esc/Enter: Got it",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

fn draw_list_view(f: &mut Frame, app: &App, area: Rect) {
    let posts = app.board().posts();
    if posts.is_empty() {
        let empty = Paragraph::new(format!(
            "No posts found. Add your first post for {}!",
            app.platform()
        ))
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_post_table(f, app, posts, chunks[0]);
    if let Some(post) = app.selected_post() {
        draw_status_panel(f, app, post, chunks[1]);
    }
}

fn draw_post_table(f: &mut Frame, app: &App, posts: &[Post], area: Rect) {
    let accent = platform_color(app.platform());
    let header = Row::new(vec!["Date", "Description", "Comments", "Likes", "Owed"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = posts
        .iter()
        .map(|post| {
            let status = post.like_status();
            let owed = if status.is_like_due {
                format!("{} ♥", status.likes_owed)
            } else {
                status.likes_owed.to_string()
            };

            let style = if status.is_like_due {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            Row::new(vec![
                post.display_date(),
                preview(post.description(), 48),
                post.total_comments().to_string(),
                post.moderator_likes().to_string(),
                owed,
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!("{} posts", app.platform())),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_status_panel(f: &mut Frame, app: &App, post: &Post, area: Rect) {
    let status = post.like_status();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![
        Line::from(post.description().as_str()),
        Line::from(""),
        Line::from(format!("Date: {}", post.display_date())),
        Line::from(format!(
            "Image: {}",
            post.image_url()
                .as_deref()
                .map(|url| preview(url, 40))
                .unwrap_or_else(|| "none".to_string())
        )),
        Line::from(""),
        Line::from(format!("Comments: {}", post.total_comments())),
        Line::from(format!("Likes: {}", post.moderator_likes())),
        Line::from(format!(
            "Likes by rule (1/{}): {}",
            COMMENTS_PER_LIKE, status.likes_owed
        )),
    ];
    let gap = status.like_gap(*post.moderator_likes());
    if gap > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} like(s) behind", gap),
            Style::default().fg(Color::Yellow),
        )));
    }

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[0]);

    if status.is_like_due {
        let banner = Paragraph::new("Time to like!")
            .block(Block::default().borders(Borders::ALL))
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(banner, chunks[1]);
    } else {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(platform_color(app.platform())))
            .ratio((status.progress_percent / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} comment(s) to the next like",
                status.comments_until_next_like
            ));
        f.render_widget(gauge, chunks[1]);
    }
}

fn draw_form_view(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let title = if form.is_edit() {
        "Edit post".to_string()
    } else {
        format!("New post for {}", app.platform())
    };
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    for (field, chunk) in [FormField::Description, FormField::Date, FormField::Image]
        .into_iter()
        .zip(chunks.iter())
    {
        let focused = *form.focus() == field;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let mut text = form.value(field).to_string();
        if focused {
            text.push('_');
        }
        let input = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(field.label()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(input, *chunk);
    }
}

fn draw_confirm(f: &mut Frame, question: &str, area: Rect) {
    let popup = centered_rect(50, 5, area);
    f.render_widget(Clear, popup);
    let dialog = Paragraph::new(question)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(dialog, popup);
}

fn draw_rules_view(f: &mut Frame, area: Rect) {
    let strong = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            "Rules for Moderators",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your job is to track comments and add likes strategically to maximise engagement."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Main rule: add "),
            Span::styled("1 moderator like", strong),
            Span::raw(" for every "),
            Span::styled(format!("{} comments", COMMENTS_PER_LIKE), strong),
            Span::raw(" received on a post."),
        ]),
        Line::from(""),
        Line::from("How it works:"),
        Line::from("  1. Press c to record each new comment received on the social network."),
        Line::from("  2. The dashboard works out when a like is due."),
        Line::from(vec![
            Span::raw("  3. When the post shows "),
            Span::styled("Time to like!", Style::default().fg(Color::Green)),
            Span::raw(", press l to add the like."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Following this rule keeps interaction balanced and helps the community grow.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let rules = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Rules"))
        .wrap(Wrap { trim: false });
    f.render_widget(rules, area);
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// First `max` characters of `text`, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
