//! Parsing of user-entered values.

use chrono::NaiveDate;
use likeboard_error::{ValidationError, ValidationErrorKind};
use tracing::warn;

/// Parse a comment count typed by a user.
///
/// Non-numeric input is rejected. Negative numbers are clamped to zero,
/// since counters never go below zero.
///
/// # Examples
///
/// ```
/// use likeboard_core::parse_count;
///
/// assert_eq!(parse_count(" 12 ").unwrap(), 12);
/// assert_eq!(parse_count("-4").unwrap(), 0);
/// assert!(parse_count("twelve").is_err());
/// ```
#[track_caller]
pub fn parse_count(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::new(ValidationErrorKind::InvalidCount(input.to_string()));

    if let Some(magnitude) = trimmed.strip_prefix('-') {
        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        warn!(input = trimmed, "Negative count clamped to zero");
        return Ok(0);
    }

    trimmed.parse::<u32>().map_err(|_| invalid())
}

/// Parse a `YYYY-MM-DD` date.
#[track_caller]
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::new(ValidationErrorKind::InvalidDate(input.to_string())))
}
