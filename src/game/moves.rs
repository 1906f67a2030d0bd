use serde::{Deserialize, Serialize};

use crate::game::model::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveType {
    Up,
    Down,
    Left,
    Right,
}

impl MoveType {
    /// Every move, in the order used for "first allowed move" fallbacks.
    pub const ALL: [MoveType; 4] = [MoveType::Up, MoveType::Down, MoveType::Left, MoveType::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveType::Up => "up",
            MoveType::Down => "down",
            MoveType::Left => "left",
            MoveType::Right => "right",
        }
    }

    /// (dx, dy) applied to a coordinate when taking this move
    pub fn delta(&self) -> (i32, i32) {
        match self {
            MoveType::Up => (0, -1),
            MoveType::Down => (0, 1),
            MoveType::Left => (-1, 0),
            MoveType::Right => (1, 0),
        }
    }

    /// Neighbouring cell. Saturates at the `i32` limits, which no board contains.
    pub fn apply(&self, start: Coordinate) -> Coordinate {
        let (dx, dy) = self.delta();
        Coordinate::new(start.x.saturating_add(dx), start.y.saturating_add(dy))
    }
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
