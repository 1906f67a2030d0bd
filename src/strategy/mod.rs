// Snake strategies and the registry that maps them to URL prefixes

pub mod genius;
pub mod random;
pub mod smart;

use serde::Serialize;

use crate::game::{MoveRequest, MoveType, StartResponse};

pub use genius::GeniusSnake;
pub use random::RandomSnake;
pub use smart::SmartSnake;

/// A way of playing the game. Implementations are stateless and shared across requests.
pub trait SnakeStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Cosmetics announced on `/start`
    fn appearance(&self, color: &str) -> StartResponse;

    fn choose_move(&self, request: &MoveRequest) -> MoveType;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakeKind {
    Random,
    Smart,
    Genius,
}

impl SnakeKind {
    pub const ALL: [SnakeKind; 3] = [SnakeKind::Random, SnakeKind::Smart, SnakeKind::Genius];

    pub fn strategy(&self) -> &'static dyn SnakeStrategy {
        match self {
            SnakeKind::Random => &RandomSnake,
            SnakeKind::Smart => &SmartSnake,
            SnakeKind::Genius => &GeniusSnake,
        }
    }

    /// Path segment the snake is served under, e.g. `/random`
    pub fn prefix(&self) -> &'static str {
        match self {
            SnakeKind::Random => "/random",
            SnakeKind::Smart => "/smart",
            SnakeKind::Genius => "/genius",
        }
    }
}
