//! tests/mod.rs
//! Shared test helpers that spawn the snake server on an ephemeral port.

#![allow(dead_code)]

use std::time::Duration;

use axum::{serve, Router};
use battle_snakes::config::{environment::EnvironmentVariables, state::AppState};
use battle_snakes::core::server::{apply_layers, create_app, routes};
use serde_json::{json, Value};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the full app (default configuration) and returns its base URL.
pub fn spawn_app() -> String {
    let state: AppState = AppState::new(EnvironmentVariables::default());
    spawn_router(create_app(state))
}

/// Spawns the app with an extra router merged in and a custom timeout.
pub fn spawn_app_with(extra: Router<AppState>, timeout: Duration) -> String {
    let env: EnvironmentVariables = EnvironmentVariables::default();
    let max_body_size: usize = env.max_request_body_size;
    let state: AppState = AppState::new(env);

    let app: Router = apply_layers(routes().merge(extra), timeout, max_body_size).with_state(state);
    spawn_router(app)
}

fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// A 15x15 game where `you` is the given body and food sits at `food`.
pub fn game_body(you: &[(i32, i32)], food: &[(i32, i32)]) -> Value {
    let coords = |cells: &[(i32, i32)]| -> Vec<Value> {
        cells.iter().map(|&(x, y)| json!({ "x": x, "y": y })).collect()
    };
    let snake: Value = json!({
        "id": "you",
        "name": "tester",
        "health": 100,
        "body": coords(you),
    });

    json!({
        "game": { "id": "3e02b354-ae29-4c3e-8c5b-26a04c764f8c" },
        "turn": 1,
        "board": {
            "height": 15,
            "width": 15,
            "food": coords(food),
            "snakes": [snake.clone()],
        },
        "you": snake,
    })
}
