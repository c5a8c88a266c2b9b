//! Post listing and content command handlers.

use likeboard_core::{
    COMMENTS_PER_LIKE, ImageSource, ModerationAction, NewPost, Platform, Post, PostEdit, PostId,
    RoleGate, parse_date, seed_posts,
};
use likeboard_error::{LikeboardResult, StoreError, ValidationError, ValidationErrorKind};
use likeboard_store::PostRepository;
use tracing::{info, instrument};

/// Print posts of one platform, or of all platforms in tab order.
#[instrument(skip(repo, gate))]
pub async fn handle_list(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    platform: Option<Platform>,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::ViewStatus)?;

    let platforms = match platform {
        Some(p) => vec![p],
        None => Platform::all(),
    };

    let mut sections = Vec::new();
    for platform in platforms {
        let posts = repo.list(platform).await?;
        let mut lines = vec![format!("== {} ({}) ==", platform, posts.len())];
        if posts.is_empty() {
            lines.push(format!(
                "No posts found. Add your first post for {}!",
                platform
            ));
        }
        lines.extend(posts.iter().map(list_line));
        sections.push(lines.join("\n"));
    }
    Ok(sections.join("\n\n"))
}

/// Print the like status of one post.
#[instrument(skip(repo, gate))]
pub async fn handle_status(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    id: &str,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::ViewStatus)?;
    let post = fetch(repo, id).await?;
    Ok(status_report(&post))
}

/// Create a post.
#[instrument(skip(repo, gate, description, image))]
pub async fn handle_add(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    platform: Platform,
    description: String,
    date: Option<String>,
    image: Option<String>,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::CreatePost)?;

    let date = match date {
        Some(text) => parse_date(&text)?,
        None => chrono::Local::now().date_naive(),
    };
    let image_url = image.as_deref().map(image_reference).transpose()?;
    let id = repo
        .create(NewPost::new(platform, description.trim().to_string(), date, image_url))
        .await?;

    Ok(format!("Created post {} on {}", id, platform))
}

/// Replace description, date, or image of a post.
#[instrument(skip(repo, gate, description, image))]
pub async fn handle_edit(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    id: &str,
    description: Option<String>,
    date: Option<String>,
    image: Option<String>,
    clear_image: bool,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::EditPost)?;
    let post = fetch(repo, id).await?;

    let mut edit = PostEdit::from_post(&post);
    if let Some(text) = description {
        edit = edit.with_description(text.trim().to_string());
    }
    if let Some(text) = date {
        edit = edit.with_date(parse_date(&text)?);
    }
    if clear_image {
        edit = edit.with_image_url(None);
    } else if let Some(input) = image {
        edit = edit.with_image_url(Some(image_reference(&input)?));
    }
    edit.validate()?;

    repo.update(post.id(), post.with_edit(edit)).await?;
    Ok(format!("Updated post {}", post.id()))
}

/// Delete a post once confirmed.
#[instrument(skip(repo, gate))]
pub async fn handle_delete(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    id: &str,
    yes: bool,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::DeletePost)?;
    let post = fetch(repo, id).await?;
    if !yes {
        return Err(ValidationError::new(ValidationErrorKind::ConfirmationRequired(
            format!("pass --yes to delete post {}", post.id()),
        ))
        .into());
    }

    repo.delete(post.id()).await?;
    info!(id = %post.id(), "Post deleted from command line");
    Ok(format!("Deleted post {}", post.id()))
}

/// Load the demonstration posts.
///
/// Refuses when any platform already has posts, unless `force` is set.
#[instrument(skip(repo, gate))]
pub async fn handle_seed(
    repo: &dyn PostRepository,
    gate: &RoleGate,
    force: bool,
) -> LikeboardResult<String> {
    gate.check(ModerationAction::CreatePost)?;

    if !force && !is_store_empty(repo).await? {
        return Err(ValidationError::new(ValidationErrorKind::ConfirmationRequired(
            "posts already exist; pass --force to add the demonstration posts".to_string(),
        ))
        .into());
    }

    let posts = seed_posts();
    let count = posts.len();
    for post in posts {
        repo.insert(post).await?;
    }
    info!(count, "Seeded demonstration posts");
    Ok(format!("Added {} demonstration posts", count))
}

/// Whether no platform has any posts.
pub async fn is_store_empty(repo: &dyn PostRepository) -> LikeboardResult<bool> {
    for platform in Platform::all() {
        if !repo.list(platform).await?.is_empty() {
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) async fn fetch(repo: &dyn PostRepository, id: &str) -> LikeboardResult<Post> {
    let id = PostId::from(id);
    repo.get(&id)
        .await?
        .ok_or_else(|| StoreError::not_found(&id).into())
}

fn image_reference(input: &str) -> LikeboardResult<String> {
    ImageSource::from_input(input)
        .into_reference()
        .map_err(Into::into)
}

fn list_line(post: &Post) -> String {
    let status = post.like_status();
    let flag = if status.is_like_due { "  LIKE DUE" } else { "" };
    format!(
        "{}  {}  comments {:>4}  likes {:>4}  owed {:>4}{}  {}",
        post.id(),
        post.display_date(),
        post.total_comments(),
        post.moderator_likes(),
        status.likes_owed,
        flag,
        post.description()
    )
}

/// Multi-line status of one post.
pub(crate) fn status_report(post: &Post) -> String {
    let status = post.like_status();
    let mut lines = vec![
        format!("Post {} on {} ({})", post.id(), post.platform(), post.display_date()),
        format!("  {}", post.description()),
        format!(
            "  Comments: {}  Likes: {}",
            post.total_comments(),
            post.moderator_likes()
        ),
        format!(
            "  Likes by rule (1/{}): {}",
            COMMENTS_PER_LIKE, status.likes_owed
        ),
    ];
    if status.is_like_due {
        lines.push("  Time to like!".to_string());
    } else {
        lines.push(format!(
            "  {} comment(s) to the next like ({:.0}% of the cycle)",
            status.comments_until_next_like, status.progress_percent
        ));
    }
    let gap = status.like_gap(*post.moderator_likes());
    if gap > 0 {
        lines.push(format!("  {} like(s) behind", gap));
    }
    lines.join("\n")
}
