//! Route definitions for the `/games` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{games, health};
use crate::state::AppState;

/// Routes for the games resource, mounted at the root.
///
/// Both `/games` and `/games/` are registered since clients use either form.
///
/// ```text
/// GET    /games/      -> server_status
/// POST   /games/      -> create
/// GET    /games/all   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/games",
            get(health::server_status).post(games::create),
        )
        .route(
            "/games/",
            get(health::server_status).post(games::create),
        )
        .route("/games/all", get(games::list))
}
