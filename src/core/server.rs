// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::{snakes::all_snake_routes, status::{handler::not_found_handler, status_routes}};
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::response_wrapper
};

/// Every route the server exposes, before middleware
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(all_snake_routes())
        .merge(status_routes())
        .fallback(not_found_handler)
}

/// Applies the shared middleware stack: envelope, error mapping, timeout and body limit
pub fn apply_layers(router: Router<AppState>, timeout: Duration, max_body_size: usize) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(response_wrapper))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(timeout))
            .layer(DefaultBodyLimit::max(max_body_size))
    )
}

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;
    let timeout: Duration = Duration::from_secs(env.default_timeout_seconds);
    let max_body_size: usize = env.max_request_body_size;

    apply_layers(routes(), timeout, max_body_size).with_state(state)
}

/// Sets up the TCP listener from a passed-in socket or binds to the configured address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
