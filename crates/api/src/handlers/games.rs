//! Handlers for the `/games` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use games_core::types::Year;
use games_core::validation::invalid_release_year;
use games_db::models::game::{CreateGame, Game};
use games_db::repositories::GameRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /games/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// POST /games/
///
/// Responds with a one-element array holding the created row.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Vec<Game>>)> {
    let input = match payload {
        Ok(Json(body)) => create_game_from_json(&body)?,
        // No JSON content type: the request carries no fields.
        Err(JsonRejection::MissingJsonContentType(_)) => CreateGame::default(),
        Err(JsonRejection::JsonSyntaxError(e)) => {
            return Err(AppError::BadRequest(e.body_text()))
        }
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };
    let new_game = input.validate()?;

    let game = GameRepo::create(&state.pool, &new_game).await?;
    tracing::info!(game_id = game.id, "Game created");

    Ok((StatusCode::CREATED, Json(vec![game])))
}

/// Pull the create fields out of a decoded JSON body.
///
/// A `title` or `genre` that is not a string counts as missing, and so does
/// every field of a body that is not an object. A `releaseYear` that is present
/// and non-null must be an integer in the `i32` range.
pub fn create_game_from_json(body: &Value) -> AppResult<CreateGame> {
    let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);

    let release_year = match body.get("releaseYear") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_i64()
                .and_then(|year| Year::try_from(year).ok())
                .ok_or_else(invalid_release_year)?,
        ),
    };

    Ok(CreateGame {
        title: text("title"),
        genre: text("genre"),
        release_year,
    })
}
