//! Payload rules for the games resource.
//!
//! Pure functions with no database access, so handlers and tests can share
//! the exact same checks.

use crate::error::CoreError;

/// Message returned whenever a game payload lacks a title or a genre.
pub const MISSING_TITLE_OR_GENRE: &str = "Game must have title and genre.";

/// Message returned when `releaseYear` is present but not a 32-bit integer.
pub const INVALID_RELEASE_YEAR: &str = "releaseYear must be an integer";

/// A required text field counts as present only when it has visible content.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Validate the required fields of a new game.
///
/// Both `title` and `genre` must be present and non-blank. The release year
/// is optional and not checked here.
pub fn validate_new_game(title: Option<&str>, genre: Option<&str>) -> Result<(), CoreError> {
    if is_present(title) && is_present(genre) {
        Ok(())
    } else {
        Err(missing_title_or_genre())
    }
}

/// The validation error for a payload without a usable title and genre.
pub fn missing_title_or_genre() -> CoreError {
    CoreError::Validation(MISSING_TITLE_OR_GENRE.to_string())
}

/// The validation error for a release year that is not a 32-bit integer.
pub fn invalid_release_year() -> CoreError {
    CoreError::Validation(INVALID_RELEASE_YEAR.to_string())
}
