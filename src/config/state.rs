// Application state management with singleton pattern

use std::sync::Arc;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a state around an explicit configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
            started_at: Utc::now(),
        }
    }

    /// Returns the singleton instance, built from the environment on first use
    pub fn instance() -> anyhow::Result<&'static Self> {
        static INSTANCE: OnceCell<AppState> = OnceCell::new();

        INSTANCE.get_or_try_init(|| {
            let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
            Ok(AppState::new(environment.clone()))
        })
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
