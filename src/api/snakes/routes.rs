// Battlesnake protocol route definitions

use axum::{routing::post, Extension, Router};

use crate::config::state::AppState;
use crate::strategy::SnakeKind;
use super::handler;

/// The four protocol endpoints for a single snake
fn snake_routes(kind: SnakeKind) -> Router<AppState> {
    Router::new()
        .route("/start", post(handler::start_handler))
        .route("/move", post(handler::move_handler))
        .route("/end", post(handler::end_handler))
        .route("/ping", post(handler::ping_handler))
        .layer(Extension(kind))
}

/// Every snake, nested under its own prefix (`/random`, `/smart`, ...)
pub fn all_snake_routes() -> Router<AppState> {
    SnakeKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| router.nest(kind.prefix(), snake_routes(kind)))
}
