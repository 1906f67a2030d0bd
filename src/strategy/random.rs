use crate::engine::{allowed_moves, random_move, FALLBACK_MOVE};
use crate::game::{HeadType, MoveRequest, MoveType, StartResponse, TailType};
use crate::strategy::SnakeStrategy;

/// Wanders: any move that does not kill it right away.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSnake;

impl SnakeStrategy for RandomSnake {
    fn name(&self) -> &'static str {
        "random"
    }

    fn appearance(&self, color: &str) -> StartResponse {
        StartResponse {
            color: color.to_string(),
            head_type: HeadType::Beluga,
            tail_type: TailType::Bolt,
        }
    }

    fn choose_move(&self, request: &MoveRequest) -> MoveType {
        let moves: Vec<MoveType> = allowed_moves(request);

        if moves.is_empty() {
            return FALLBACK_MOVE;
        }

        random_move(&moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::{request, snake};

    #[test]
    fn only_picks_safe_moves() {
        // Corner: only Down and Right are safe
        let request = request(7, snake(&[(0, 0)]), Vec::new(), &[]);

        for _ in 0..50 {
            let chosen = RandomSnake.choose_move(&request);
            assert!(chosen == MoveType::Down || chosen == MoveType::Right);
        }
    }

    #[test]
    fn trapped_snake_goes_left() {
        let request = request(2, snake(&[(0, 0), (1, 0), (1, 1), (0, 1)]), Vec::new(), &[]);

        assert_eq!(RandomSnake.choose_move(&request), MoveType::Left);
    }
}
