//! Fixture data for the `games` table.
//!
//! [`reset_games`] puts the table back into a known state: it empties it,
//! restarts the id sequence and inserts [`FIXTURE_GAMES`] in order, so the
//! fixtures always receive ids 1, 2, 3 and the next insert receives id 4.

use sqlx::PgPool;

use crate::models::game::Game;

/// `(title, genre, release_year)` rows inserted by [`reset_games`].
pub const FIXTURE_GAMES: &[(&str, &str, Option<i32>)] = &[
    ("Pacman", "Arcade", Some(1980)),
    ("Tetris", "Arcade", None),
    ("Dragon Quest", "RPG", None),
];

/// Truncate `games`, restart its identity and insert the fixture rows.
///
/// Runs in a single transaction; on error the table is left untouched.
pub async fn reset_games(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE TABLE games RESTART IDENTITY")
        .execute(&mut *tx)
        .await?;

    let mut inserted = Vec::with_capacity(FIXTURE_GAMES.len());
    for &(title, genre, release_year) in FIXTURE_GAMES {
        let game = sqlx::query_as::<_, Game>(
            "INSERT INTO games (title, genre, release_year)
             VALUES ($1, $2, $3)
             RETURNING id, title, genre, release_year",
        )
        .bind(title)
        .bind(genre)
        .bind(release_year)
        .fetch_one(&mut *tx)
        .await?;
        inserted.push(game);
    }

    tx.commit().await?;
    tracing::info!(count = inserted.len(), "Seeded games fixtures");
    Ok(inserted)
}
