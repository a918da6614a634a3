//! Game entity model and DTOs.

use games_core::error::CoreError;
use games_core::types::{DbId, Year};
use games_core::validation::{missing_title_or_genre, validate_new_game};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game row from the `games` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub release_year: Option<Year>,
}

/// DTO for creating a new game.
///
/// `title` and `genre` are optional at the deserialization level so that a
/// payload missing either one still parses and can be rejected with the
/// domain validation message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    pub title: Option<String>,
    pub genre: Option<String>,
    /// Stored as NULL when omitted.
    pub release_year: Option<Year>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub genre: String,
    pub release_year: Option<Year>,
}

impl CreateGame {
    /// Check the required fields and convert into an insertable [`NewGame`].
    pub fn validate(self) -> Result<NewGame, CoreError> {
        let (Some(title), Some(genre)) = (self.title, self.genre) else {
            return Err(missing_title_or_genre());
        };
        validate_new_game(Some(&title), Some(&genre))?;

        Ok(NewGame {
            title,
            genre,
            release_year: self.release_year,
        })
    }
}
