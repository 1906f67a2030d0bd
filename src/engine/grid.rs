// Grid helpers: bounds, neighbours, safe moves and straight-line targeting

use std::collections::HashSet;

use rand::{seq::IndexedRandom, Rng};

use crate::game::{Board, Coordinate, MoveRequest, MoveType};

/// Move used whenever nothing better is available
pub const FALLBACK_MOVE: MoveType = MoveType::Left;

/// Picks one of `moves` at random, or any move at all when `moves` is empty.
pub fn random_move(moves: &[MoveType]) -> MoveType {
    random_move_with(moves, &mut rand::rng())
}

pub fn random_move_with<R: Rng + ?Sized>(moves: &[MoveType], rng: &mut R) -> MoveType {
    moves
        .choose(rng)
        .copied()
        .or_else(|| MoveType::ALL.choose(rng).copied())
        .unwrap_or(FALLBACK_MOVE)
}

pub fn is_in_bounds(board: &Board, coordinate: Coordinate) -> bool {
    (0..board.width).contains(&coordinate.x) && (0..board.height).contains(&coordinate.y)
}

pub fn next_move_coords(move_type: MoveType, start: Coordinate) -> Coordinate {
    move_type.apply(start)
}

/// Every cell occupied by a snake segment.
pub fn forbidden_coordinates(board: &Board) -> HashSet<Coordinate> {
    board
        .snakes
        .iter()
        .flat_map(|snake| snake.body.iter().copied())
        .collect()
}

/// Moves from `start` that stay on the board and avoid `blocked`, in `MoveType::ALL` order.
pub fn open_moves(board: &Board, blocked: &HashSet<Coordinate>, start: Coordinate) -> Vec<MoveType> {
    MoveType::ALL
        .into_iter()
        .filter(|mv| {
            let next: Coordinate = mv.apply(start);
            is_in_bounds(board, next) && !blocked.contains(&next)
        })
        .collect()
}

/// Moves that do not immediately kill `you`: no walls, no snake bodies.
pub fn allowed_moves(request: &MoveRequest) -> Vec<MoveType> {
    let Some(head) = request.you.head() else {
        return Vec::new();
    };

    open_moves(&request.board, &forbidden_coordinates(&request.board), head)
}

/// Euclidean distance between two cells
pub fn distance(first: Coordinate, second: Coordinate) -> f64 {
    if first == second {
        return 0.0;
    }
    let x: f64 = f64::from(first.x) - f64::from(second.x);
    let y: f64 = f64::from(first.y) - f64::from(second.y);
    (x * x + y * y).sqrt()
}

/// Picks the move among `moves` that heads most directly from `current` towards `target`.
///
/// The horizontal axis only wins when it is strictly the longer leg; otherwise the
/// vertical direction is tried. Falls back to the first of `moves` (or `LEFT`).
pub fn nearest_move_to_target(target: Option<Coordinate>, current: Coordinate, moves: &[MoveType]) -> MoveType {
    let Some(target) = target else {
        return fallback_move(moves);
    };

    let delta_x: i64 = i64::from(target.x) - i64::from(current.x);
    let delta_y: i64 = i64::from(target.y) - i64::from(current.y);

    if delta_x.abs() > delta_y.abs() {
        if delta_x > 0 && moves.contains(&MoveType::Right) {
            return MoveType::Right;
        }
        if delta_x < 0 && moves.contains(&MoveType::Left) {
            return MoveType::Left;
        }
    }
    if delta_y > 0 && moves.contains(&MoveType::Down) {
        return MoveType::Down;
    }
    if delta_y < 0 && moves.contains(&MoveType::Up) {
        return MoveType::Up;
    }

    fallback_move(moves)
}

/// The coordinate closest to `target`; the first one wins ties.
pub fn nearest_coordinate_to_target(target: Coordinate, coords: &[Coordinate]) -> Option<Coordinate> {
    coords.iter().copied().fold(None, |nearest: Option<(Coordinate, f64)>, candidate| {
        let candidate_distance: f64 = distance(candidate, target);
        match nearest {
            Some((_, best)) if best <= candidate_distance => nearest,
            _ => Some((candidate, candidate_distance)),
        }
    })
    .map(|(coordinate, _)| coordinate)
}

pub fn fallback_move(moves: &[MoveType]) -> MoveType {
    moves.first().copied().unwrap_or(FALLBACK_MOVE)
}
