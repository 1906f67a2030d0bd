// Request and response bodies of the Battlesnake protocol

use serde::{Deserialize, Serialize};

use crate::game::appearance::{HeadType, TailType};
use crate::game::model::{Board, Game, Snake};
use crate::game::moves::MoveType;

/// Body shared by `/start`, `/move` and `/end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequest {
    pub game: Game,
    #[serde(default)]
    pub turn: u32,
    pub board: Board,
    pub you: Snake,
}

pub type StartRequest = GameRequest;
pub type MoveRequest = GameRequest;
pub type EndRequest = GameRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub color: String,
    pub head_type: HeadType,
    pub tail_type: TailType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: MoveType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::model::Coordinate;
    use serde_json::json;

    #[test]
    fn parses_engine_move_request() {
        let body = json!({
            "game": { "id": "3e02b354-ae29-4c3e-8c5b-26a04c764f8c" },
            "turn": 4,
            "board": {
                "height": 15,
                "width": 15,
                "food": [{ "x": 2, "y": 4 }],
                "snakes": [{
                    "id": "snake-1",
                    "name": "one",
                    "health": 90,
                    "body": [{ "x": 8, "y": 10 }, { "x": 8, "y": 11 }]
                }]
            },
            "you": {
                "id": "snake-1",
                "name": "one",
                "health": 90,
                "body": [{ "x": 8, "y": 10 }, { "x": 8, "y": 11 }]
            }
        });

        let request: MoveRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.turn, 4);
        assert_eq!(request.board.food, vec![Coordinate::new(2, 4)]);
        assert_eq!(request.you.head(), Some(Coordinate::new(8, 10)));
    }

    #[test]
    fn start_response_uses_camel_case_keys() {
        let response = StartResponse {
            color: "#188936".to_string(),
            head_type: HeadType::Beluga,
            tail_type: TailType::Bolt,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "color": "#188936", "headType": "beluga", "tailType": "bolt" })
        );
    }

    #[test]
    fn move_response_uses_move_key() {
        let response = MoveResponse { mv: MoveType::Down };

        assert_eq!(serde_json::to_value(response).unwrap(), json!({ "move": "down" }));
    }
}
