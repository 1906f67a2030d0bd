// Start of file: /src/engine/mod.rs

/*
* Board reasoning shared by every snake strategy: safe moves, distances,
* straight-line targeting and A* path search.
*/

pub mod grid;
pub mod pathfinding;

pub use grid::{
    allowed_moves, distance, fallback_move, forbidden_coordinates, is_in_bounds, nearest_coordinate_to_target,
    nearest_move_to_target, next_move_coords, random_move, FALLBACK_MOVE,
};
pub use pathfinding::{a_star_distance, best_path_to_target, best_path_to_target_with, TargetPath};

// End of file: /src/engine/mod.rs
