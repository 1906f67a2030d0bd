// Battlesnake protocol handlers, shared by every strategy

use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use crate::api::error::ApiError;
use crate::config::state::AppState;
use crate::game::{EndRequest, MoveRequest, MoveResponse, MoveType, StartRequest, StartResponse, MAX_BOARD_CELLS};
use crate::strategy::{SnakeKind, SnakeStrategy};

/// Announces the snake's cosmetics for a new game
#[instrument(name = "start", skip(state, request), fields(game_id = %request.game.id))]
pub async fn start_handler(
    State(state): State<AppState>,
    Extension(kind): Extension<SnakeKind>,
    Json(request): Json<StartRequest>,
) -> Json<StartResponse> {
    let strategy: &'static dyn SnakeStrategy = kind.strategy();
    info!(snake = strategy.name(), "Game started");
    debug!("Start request: {:?}", request);

    Json(strategy.appearance(&state.environment.snake_color))
}

#[instrument(name = "move", skip(request), fields(game_id = %request.game.id, turn = request.turn))]
pub async fn move_handler(
    Extension(kind): Extension<SnakeKind>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    if request.you.head().is_none() {
        return Err(ApiError::MissingHead {
            game_id: request.game.id.clone(),
            snake_id: request.you.id.clone(),
        });
    }

    if request.board.cell_count() > MAX_BOARD_CELLS {
        return Err(ApiError::BoardTooLarge {
            width: request.board.width,
            height: request.board.height,
            max_cells: MAX_BOARD_CELLS,
        });
    }

    let strategy: &'static dyn SnakeStrategy = kind.strategy();
    debug!("Move request: {:?}", request);

    let mv: MoveType = run_blocking(move || strategy.choose_move(&request)).await?;
    info!(snake = strategy.name(), %mv, "Move chosen");

    Ok(Json(MoveResponse { mv }))
}

/// Runs CPU-bound work on the blocking pool so the request timeout can still fire
async fn run_blocking<F, T>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await?)
}

#[instrument(name = "end", skip(request), fields(game_id = %request.game.id, turn = request.turn))]
pub async fn end_handler(
    Extension(kind): Extension<SnakeKind>,
    Json(request): Json<EndRequest>,
) -> Json<Value> {
    info!(snake = kind.strategy().name(), "Game ended");
    debug!("End request: {:?}", request);

    Json(json!({}))
}

/// Liveness check issued by the game engine
pub async fn ping_handler() -> Json<Value> {
    Json(json!({}))
}
