//! The outer game loop: rules, "start?", rounds, "play again?".

use anyhow::Result;
use log::info;

use crate::game_engine::{
    console::Console,
    models::{GameConfig, GameState},
    round::Round,
};

pub const RULES: &str = "
                        -= Loto =-

    Two players: you and the computer.
    Each gets a random card with 15 numbers.

    Every turn a random barrel is drawn from the bag
    and both cards are shown.

    You choose: cross the number out, or skip it.

    Cross out a number that is not on your card - you lose.
    Skip a number that is on your card - you lose.

    The first to cross out every number on their card wins.
";

pub const START_PROMPT: &str = "Start the game?";
pub const REPLAY_PROMPT: &str = "Play again?";

/// How a session came to an end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player said no before the first round.
    DeclinedStart,
    /// The player said no to another round; carries every round's outcome.
    DeclinedReplay(Vec<GameState>),
}

impl SessionEnd {
    pub fn rounds(&self) -> &[GameState] {
        match self {
            SessionEnd::DeclinedStart => &[],
            SessionEnd::DeclinedReplay(rounds) => rounds,
        }
    }
}

/// Seed for the `index`-th round. A fixed base seed still gives each round
/// its own bag and cards.
fn round_seed(config: &GameConfig, index: usize) -> Option<u64> {
    config.rng_seed.map(|seed| seed.wrapping_add(index as u64))
}

/// Run rounds until the player declines.
pub fn run<C: Console>(config: &GameConfig, console: &mut C) -> Result<SessionEnd> {
    console.clear()?;
    console.show(RULES)?;
    if !console.ask(START_PROMPT)? {
        info!("player declined to start");
        return Ok(SessionEnd::DeclinedStart);
    }

    let mut outcomes = Vec::new();
    loop {
        let mut round = Round::new(round_seed(config, outcomes.len()));
        outcomes.push(round.play(console)?);

        if !console.ask(REPLAY_PROMPT)? {
            info!("session over after {} round(s)", outcomes.len());
            return Ok(SessionEnd::DeclinedReplay(outcomes));
        }
    }
}
