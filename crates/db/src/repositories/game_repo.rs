//! Repository for the `games` table.

use sqlx::PgPool;

use crate::models::game::{Game, NewGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_year";

/// Provides the select-all and insert operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, genre, release_year)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .fetch_one(pool)
            .await?;
        tracing::debug!(game_id = game.id, title = %game.title, "Inserted game");
        Ok(game)
    }

    /// List all games in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id ASC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Number of rows currently in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
