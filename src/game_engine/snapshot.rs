use serde::Serialize;

use crate::game_engine::{
    card::Card,
    models::{Cell, GameState, Token},
    round::Round,
};

/// Serializable view of a card.
#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub owner: String,
    pub rows: Vec<Vec<Cell>>,
    pub marked: usize,
    pub completed: bool,
}

impl CardSnapshot {
    pub fn of(card: &Card) -> Self {
        CardSnapshot {
            owner: card.owner().to_string(),
            rows: card.rows().iter().map(|r| r.to_vec()).collect(),
            marked: card.marked_count(),
            completed: card.is_completed(),
        }
    }
}

/// Serializable view of a whole round, used for debug logging.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub state: GameState,
    pub current: Option<Token>,
    pub remaining: usize,
    pub drawn: Vec<Token>,
    pub human: CardSnapshot,
    pub computer: CardSnapshot,
}

impl RoundSnapshot {
    pub fn of(round: &Round) -> Self {
        let bag = round.bag();
        RoundSnapshot {
            state: round.state(),
            current: bag.current(),
            remaining: bag.remaining(),
            drawn: bag.drawn().to_vec(),
            human: CardSnapshot::of(round.human().card()),
            computer: CardSnapshot::of(round.computer().card()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::game_engine::round::Round;

    #[test]
    fn snapshot_serializes_cells_and_state() {
        let round = Round::new(Some(5));
        let json: Value = serde_json::from_str(&round.snapshot().to_json().unwrap()).unwrap();

        assert_eq!(json["state"], "On");
        assert_eq!(json["remaining"], 90);
        assert!(json["current"].is_null());
        assert_eq!(json["human"]["owner"], "Your card");
        assert_eq!(json["human"]["rows"].as_array().unwrap().len(), 3);

        let numbered = json["computer"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|row| row.as_array().unwrap())
            .filter(|cell| cell.get("Number").is_some())
            .count();
        assert_eq!(numbered, 15);
    }
}
