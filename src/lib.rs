//! # loto
//!
//! A terminal loto (90-ball bingo) game: you against the computer.
//!
//! ## How it works
//!
//! 1. A [`Round`] shuffles a bag of 90 barrels and deals each player a 3×9
//!    [`Card`] with 15 numbers, 5 per row, ascending left to right.
//! 2. Each turn a barrel is drawn. The computer always crosses it out if
//!    it can; you have to say whether it is on your card.
//! 3. A wrong call loses on the spot. The first to cross out every number
//!    wins, and the human is checked first.
//!
//! ## Key features
//!
//! - **Deterministic**: [`GameConfig::rng_seed`] (or `LOTO_SEED`) makes every
//!   bag and card reproducible.
//! - **Scriptable**: all I/O goes through the [`Console`] trait, so rounds
//!   can be driven by anything that answers yes/no.
//!
//! ## Quick start
//!
//! ```rust
//! use loto::{Decision, GameState, Round};
//!
//! let mut round = Round::new(Some(42));
//! while round.check_completion() == GameState::On {
//!     let Some(token) = round.draw() else { break };
//!     // A perfect player only crosses out numbers on their card.
//!     let decision = Decision::from(round.human().has_number(token));
//!     round.apply_decision(token, decision);
//! }
//! assert_ne!(round.state(), GameState::On);
//! ```

pub mod game_engine;

pub use game_engine::{
    is_affirmative, resolve, Bag, Card, Cell, Console, Decision, Exhausted, GameConfig,
    GameState, Player, PlayerKind, Resolution, Round, SessionEnd, Terminal, Token,
};
