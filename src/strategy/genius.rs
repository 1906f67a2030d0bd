use std::collections::HashSet;

use tracing::debug;

use crate::engine::{allowed_moves, best_path_to_target, best_path_to_target_with, fallback_move, TargetPath};
use crate::game::{Coordinate, HeadType, MoveRequest, MoveType, Snake, StartResponse, TailType};
use crate::strategy::SnakeStrategy;

/// Follows the shortest A* route to food, chases its own tail when no food is
/// reachable, and otherwise survives one more turn if it can.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeniusSnake;

impl GeniusSnake {
    /// The tail cell frees up next turn unless the snake has just eaten
    /// (a freshly grown snake repeats its last segment).
    fn chaseable_tail(you: &Snake) -> Option<Coordinate> {
        let [.., before_tail, tail] = you.body.as_slice() else {
            return None;
        };
        (before_tail != tail).then_some(*tail)
    }

    fn chase_tail(request: &MoveRequest) -> Option<TargetPath> {
        let tail: Coordinate = Self::chaseable_tail(&request.you)?;
        let passable: HashSet<Coordinate> = HashSet::from([tail]);

        best_path_to_target_with(request, &[tail], &passable)
    }
}

impl SnakeStrategy for GeniusSnake {
    fn name(&self) -> &'static str {
        "genius"
    }

    fn appearance(&self, color: &str) -> StartResponse {
        StartResponse {
            color: color.to_string(),
            head_type: HeadType::Beluga,
            tail_type: TailType::Bolt,
        }
    }

    fn choose_move(&self, request: &MoveRequest) -> MoveType {
        if let Some(path) = best_path_to_target(request, &request.board.food) {
            debug!(food = ?path.target, distance = path.distance, "Food reachable");
            return path.mv;
        }

        if let Some(path) = Self::chase_tail(request) {
            debug!(distance = path.distance, "No food reachable, chasing tail");
            return path.mv;
        }

        debug!("No food or tail reachable, taking any safe move");
        fallback_move(&allowed_moves(request))
    }
}
