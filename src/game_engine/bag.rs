use std::{error::Error, fmt};

use rand::Rng;
use crate::game_engine::models::{Token, TOKEN_COUNT};

/// Returned by [`Bag::draw`] once every barrel has been pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the bag is empty")
    }
}

impl Error for Exhausted {}

/// The 90 barrels of one round, in draw order.
#[derive(Debug, Clone)]
pub struct Bag {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Bag {
    /// Fill a bag with 1..=90 and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut tokens: Vec<Token> = (1..=TOKEN_COUNT).collect();

        // Fisher-Yates shuffle
        for i in (1..tokens.len()).rev() {
            let j = rng.gen_range(0..=i);
            tokens.swap(i, j);
        }

        Bag { tokens, cursor: 0 }
    }

    /// Bag with a fixed draw order. Does not check that the order is a
    /// permutation of 1..=90.
    #[cfg(test)]
    pub(crate) fn from_order(tokens: Vec<Token>) -> Self {
        Bag { tokens, cursor: 0 }
    }

    /// Pull the next barrel.
    pub fn draw(&mut self) -> Result<Token, Exhausted> {
        let token = *self.tokens.get(self.cursor).ok_or(Exhausted)?;
        self.cursor += 1;
        Ok(token)
    }

    /// Barrels still in the bag.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// The barrel drawn last, if any.
    pub fn current(&self) -> Option<Token> {
        self.cursor.checked_sub(1).map(|i| self.tokens[i])
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// All barrels drawn so far, oldest first.
    pub fn drawn(&self) -> &[Token] {
        &self.tokens[..self.cursor]
    }
}

impl Iterator for Bag {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.draw().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some(token) => write!(f, "New barrel: {} ({} left)", token, self.remaining()),
            None        => write!(f, "Bag is full ({} barrels)", self.remaining()),
        }
    }
}
