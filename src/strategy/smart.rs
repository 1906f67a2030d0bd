use crate::engine::{allowed_moves, fallback_move, nearest_coordinate_to_target, nearest_move_to_target, FALLBACK_MOVE};
use crate::game::{Coordinate, HeadType, MoveRequest, MoveType, StartResponse, TailType};
use crate::strategy::SnakeStrategy;

/// Heads in a straight line for the closest food, ignoring obstacles beyond the next cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartSnake;

impl SnakeStrategy for SmartSnake {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn appearance(&self, color: &str) -> StartResponse {
        StartResponse {
            color: color.to_string(),
            head_type: HeadType::Safe,
            tail_type: TailType::RoundBum,
        }
    }

    fn choose_move(&self, request: &MoveRequest) -> MoveType {
        let moves: Vec<MoveType> = allowed_moves(request);

        let Some(head) = request.you.head() else {
            return FALLBACK_MOVE;
        };
        if moves.is_empty() {
            return FALLBACK_MOVE;
        }

        let nearest: Option<Coordinate> = nearest_coordinate_to_target(head, &request.board.food);
        if nearest.is_none() {
            return fallback_move(&moves);
        }

        nearest_move_to_target(nearest, head, &moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::{request, snake};

    #[test]
    fn heads_for_nearest_food() {
        let request = request(11, snake(&[(5, 5), (5, 6)]), Vec::new(), &[(9, 5), (0, 0)]);

        assert_eq!(SmartSnake.choose_move(&request), MoveType::Right);
    }

    #[test]
    fn steps_around_blocked_direction() {
        // Food straight below, but the snake's own neck is there
        let request = request(11, snake(&[(5, 5), (5, 6)]), Vec::new(), &[(5, 9)]);

        assert_eq!(SmartSnake.choose_move(&request), MoveType::Up);
    }

    #[test]
    fn without_food_takes_first_safe_move() {
        let request = request(11, snake(&[(0, 0)]), Vec::new(), &[]);

        assert_eq!(SmartSnake.choose_move(&request), MoveType::Down);
    }

    #[test]
    fn trapped_snake_goes_left() {
        let request = request(2, snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]), Vec::new(), &[(1, 1)]);

        assert_eq!(SmartSnake.choose_move(&request), MoveType::Left);
    }

    #[test]
    fn announces_safe_head() {
        let appearance = SmartSnake.appearance("#000000");

        assert_eq!(appearance.head_type, HeadType::Safe);
        assert_eq!(appearance.tail_type, TailType::RoundBum);
        assert_eq!(appearance.color, "#000000");
    }
}
