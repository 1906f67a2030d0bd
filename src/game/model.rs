// Board-level entities shared by every Battlesnake request

use serde::{Deserialize, Serialize};

/// A cell on the board. Origin is the top-left corner, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: i32,
    // Head first
    #[serde(default)]
    pub body: Vec<Coordinate>,
}

impl Snake {
    pub fn head(&self) -> Option<Coordinate> {
        self.body.first().copied()
    }

    pub fn tail(&self) -> Option<Coordinate> {
        self.body.last().copied()
    }
}

/// Largest board the server agrees to search; official boards are at most 25x25
pub const MAX_BOARD_CELLS: i64 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    #[serde(default)]
    pub food: Vec<Coordinate>,
    #[serde(default)]
    pub snakes: Vec<Snake>,
}

impl Board {
    /// Number of cells; negative dimensions count as empty
    pub fn cell_count(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }
}
