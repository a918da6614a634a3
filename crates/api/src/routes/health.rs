use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Root-level status and health routes.
///
/// ```text
/// GET /          -> server_status
/// GET /health    -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::server_status))
        .route("/health", get(health::health_check))
}
