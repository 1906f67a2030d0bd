// Request-level failures for the snake endpoints

use axum::{http::StatusCode, response::IntoResponse};
use serde_json::json;
use tokio::task::JoinError;
use tracing::error;

use crate::utils::response_handler::HandlerResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Snake '{snake_id}' in game '{game_id}' has no body segments")]
    MissingHead { game_id: String, snake_id: String },

    #[error("Board of {width}x{height} exceeds the limit of {max_cells} cells")]
    BoardTooLarge { width: i32, height: i32, max_cells: i64 },

    #[error("Move computation failed: {0}")]
    Engine(#[from] JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingHead { .. } | ApiError::BoardTooLarge { .. } => StatusCode::BAD_REQUEST,
            ApiError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingHead { .. } => "missing_head",
            ApiError::BoardTooLarge { .. } => "board_too_large",
            ApiError::Engine(_) => "engine_failure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Engine(_) = self {
            error!("{}", self);
        }

        HandlerResponse::new(self.status_code())
            .data(json!({ "error": self.kind() }))
            .message(self.to_string())
            .into_response()
    }
}
