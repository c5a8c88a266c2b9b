//! Terminal dashboard for Likeboard.
//!
//! Shows one platform at a time: the post list, the like status of the
//! selected post, and the controls the active role is offered.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod form;
mod rules_marker;
mod terminal;
mod ui;

pub use app::{App, AppMode};
pub use form::{FormField, FormTarget, PostForm};
pub use rules_marker::RulesMarker;
pub use terminal::{TuiOptions, TuiOptionsBuilder, run_tui};
pub use ui::{draw, platform_color};
