//! Add/edit post form state.

use chrono::NaiveDate;
use likeboard_core::{ImageSource, NewPost, Platform, Post, PostEdit, PostId, parse_date};
use likeboard_error::LikeboardResult;

/// Input field of the post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Free-text description
    #[default]
    Description,
    /// Publication date, `YYYY-MM-DD`
    Date,
    /// Image URL or local file path
    Image,
}

impl FormField {
    /// Field after this one, wrapping.
    pub fn next(self) -> FormField {
        match self {
            FormField::Description => FormField::Date,
            FormField::Date => FormField::Image,
            FormField::Image => FormField::Description,
        }
    }

    /// Field before this one, wrapping.
    pub fn previous(self) -> FormField {
        match self {
            FormField::Description => FormField::Image,
            FormField::Date => FormField::Description,
            FormField::Image => FormField::Date,
        }
    }

    /// Block title shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Description => "Description",
            FormField::Date => "Date (YYYY-MM-DD)",
            FormField::Image => "Image (URL or file path, optional)",
        }
    }
}

/// What saving the form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// Create a post on the active platform
    New,
    /// Replace content of an existing post
    Edit(PostId),
}

/// Text buffers behind the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PostForm {
    target: FormTarget,
    description: String,
    date: String,
    image: String,
    focus: FormField,
}

impl PostForm {
    /// Empty form for a new post dated `today`.
    pub fn for_new(today: NaiveDate) -> Self {
        Self {
            target: FormTarget::New,
            description: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            image: String::new(),
            focus: FormField::Description,
        }
    }

    /// Form pre-filled from an existing post.
    pub fn for_edit(post: &Post) -> Self {
        Self {
            target: FormTarget::Edit(post.id().clone()),
            description: post.description().clone(),
            date: post.date().format("%Y-%m-%d").to_string(),
            image: post.image_url().clone().unwrap_or_default(),
            focus: FormField::Description,
        }
    }

    /// Whether the form edits an existing post.
    pub fn is_edit(&self) -> bool {
        matches!(self.target, FormTarget::Edit(_))
    }

    /// Current text of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.description,
            FormField::Date => &self.date,
            FormField::Image => &self.image,
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused field.
    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Build a create payload for `platform`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed date or an image error if
    /// the image cannot be referenced. An empty description is rejected by
    /// the store.
    pub fn to_new_post(&self, platform: Platform) -> LikeboardResult<NewPost> {
        let date = parse_date(&self.date)?;
        let image_url = self.image_reference()?;
        Ok(NewPost::new(
            platform,
            self.description.trim().to_string(),
            date,
            image_url,
        ))
    }

    /// Build an edit payload.
    ///
    /// # Errors
    ///
    /// Same as [`to_new_post`](Self::to_new_post).
    pub fn to_edit(&self) -> LikeboardResult<PostEdit> {
        let date = parse_date(&self.date)?;
        let image_url = self.image_reference()?;
        Ok(PostEdit::new(
            self.description.trim().to_string(),
            date,
            image_url,
        ))
    }

    fn image_reference(&self) -> LikeboardResult<Option<String>> {
        let input = self.image.trim();
        if input.is_empty() {
            return Ok(None);
        }
        Ok(Some(ImageSource::from_input(input).into_reference()?))
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Description => &mut self.description,
            FormField::Date => &mut self.date,
            FormField::Image => &mut self.image,
        }
    }
}
