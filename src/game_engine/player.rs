use std::fmt;

use rand::Rng;
use crate::game_engine::{
    card::Card,
    models::{PlayerKind, Token},
};

/// One participant and their single card.
#[derive(Debug, Clone)]
pub struct Player {
    kind: PlayerKind,
    card: Card,
}

impl Player {
    /// Deal a freshly generated card to a player of `kind`.
    pub fn new<R: Rng>(rng: &mut R, kind: PlayerKind) -> Self {
        Player { kind, card: Card::generate(rng, kind.card_label()) }
    }

    pub fn with_card(kind: PlayerKind, card: Card) -> Self {
        Player { kind, card }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    #[cfg(test)]
    pub(crate) fn card_mut(&mut self) -> &mut Card {
        &mut self.card
    }

    /// Cross out `value` if the card has it.
    pub fn decide(&mut self, value: Token) -> bool {
        self.card.mark_if_present(value)
    }

    pub fn has_number(&self, value: Token) -> bool {
        self.card.contains(value)
    }

    pub fn has_won(&self) -> bool {
        self.card.is_completed()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card)
    }
}
