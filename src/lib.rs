// Library root for the Battlesnake game server

pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod game;
pub mod strategy;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
