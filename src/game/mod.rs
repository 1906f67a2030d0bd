// Start of file: /src/game/mod.rs

/*
* Wire model of the Battlesnake protocol: board entities, moves,
* cosmetics and the request/response bodies.
*/

pub mod appearance;
pub mod model;
pub mod moves;
pub mod requests;

pub use appearance::{HeadType, TailType};
pub use model::{Board, Coordinate, Game, Snake, MAX_BOARD_CELLS};
pub use moves::MoveType;
pub use requests::{EndRequest, GameRequest, MoveRequest, MoveResponse, StartRequest, StartResponse};

// End of file: /src/game/mod.rs
