// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use battle_snakes::config::state::AppState;
use battle_snakes::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: &'static AppState = AppState::instance()?;
    let app: Router = create_app(state.clone());

    let listener: TcpListener = setup_listener(&state.environment).await?;
    tracing::info!("Snake server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
