// Start of file: /src/api/mod.rs

/*
* HTTP surface: the Battlesnake protocol per snake plus operational endpoints.
*/

pub mod error;
pub mod snakes;
pub mod status;

// End of file: /src/api/mod.rs
