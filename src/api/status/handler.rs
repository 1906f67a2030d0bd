// Operational endpoints, answered with the standard envelope

use serde_json::json;
use axum::{http::StatusCode, extract::State};
use tracing::{instrument, info, warn};

use crate::config::state::AppState;
use crate::strategy::SnakeKind;
use crate::utils::response_handler::HandlerResponse;

/// Returns API status, uptime and the snakes this instance serves
#[instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> HandlerResponse {
    info!("Status endpoint called");

    let host: String = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|err| {
            warn!("Unable to resolve hostname: {}", err);
            "unknown".to_string()
        });

    let snakes: Vec<&str> = SnakeKind::ALL.iter().map(|kind| kind.strategy().name()).collect();

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "environment": state.environment.environment.as_ref(),
            "hostname": host,
            "uptime_seconds": state.uptime_seconds(),
            "snakes": snakes,
        }))
        .message("Snake server is running")
}

pub async fn health_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK).data(json!({ "status": "healthy" }))
}

/// Any path nothing else matched
pub async fn not_found_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .message("The requested resource does not exist")
}
