//! One round of loto: a fresh bag, two cards and the turn state machine.
//!
//! ## Turn protocol
//!
//! While the round is [`GameState::On`]:
//!
//! 1. Human card complete → `Won`; otherwise computer card complete → `Lost`.
//!    The human is checked first, so a simultaneous finish is a win.
//! 2. Draw a barrel. An empty bag ends the round as `Draw`.
//! 3. The computer always crosses the barrel out if it has it.
//! 4. Show the table and ask the human whether to cross it out.
//! 5. [`resolve`] the answer; a wrong call is `Lost` immediately.
//!
//! A terminal state shows the final banner with the human card only.

use anyhow::Result;
use log::{debug, info, log_enabled, Level};
use rand::{rngs::StdRng, SeedableRng};

use crate::game_engine::{
    bag::{Bag, Exhausted},
    console::Console,
    models::*,
    player::Player,
    snapshot::RoundSnapshot,
};

pub const CROSS_OUT_PROMPT: &str = "Cross out the number?";

/// Outcome of a human decision given whether the barrel is on their card.
///
/// | decision  | present | result   |
/// |-----------|---------|----------|
/// | cross out | yes     | continue |
/// | skip      | no      | continue |
/// | cross out | no      | lose     |
/// | skip      | yes     | lose     |
pub fn resolve(decision: Decision, present: bool) -> Resolution {
    match (decision, present) {
        (Decision::CrossOut, true) | (Decision::Skip, false) => Resolution::Continue,
        (Decision::CrossOut, false) | (Decision::Skip, true) => Resolution::Lose,
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    bag: Bag,
    human: Player,
    computer: Player,
    state: GameState,
}

impl Round {
    /// Deal a new round. `rng_seed` picks between a reproducible and an
    /// entropy-seeded generator.
    pub fn new(rng_seed: Option<u64>) -> Self {
        let mut rng: StdRng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        info!("new round (seed: {rng_seed:?})");

        let bag = Bag::new_shuffled(&mut rng);
        let computer = Player::new(&mut rng, PlayerKind::Computer);
        let human = Player::new(&mut rng, PlayerKind::Human);
        Round::from_parts(bag, human, computer)
    }

    /// Assemble a round from pre-built pieces.
    pub fn from_parts(bag: Bag, human: Player, computer: Player) -> Self {
        Round { bag, human, computer, state: GameState::On }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    #[cfg(test)]
    pub(crate) fn human_mut(&mut self) -> &mut Player {
        &mut self.human
    }

    #[cfg(test)]
    pub(crate) fn computer_mut(&mut self) -> &mut Player {
        &mut self.computer
    }

    /// Settle the round if either card is already complete, human first.
    pub fn check_completion(&mut self) -> GameState {
        if self.state == GameState::On {
            if self.human.has_won() {
                self.state = GameState::Won;
            } else if self.computer.has_won() {
                self.state = GameState::Lost;
            }
        }
        self.state
    }

    /// Draw the next barrel and let the computer cross it out.
    ///
    /// Returns `None` once the round is over. An empty bag ends the round
    /// as [`GameState::Draw`].
    pub fn draw(&mut self) -> Option<Token> {
        if self.state.is_over() {
            return None;
        }
        match self.bag.draw() {
            Ok(token) => {
                let hit = self.computer.decide(token);
                debug!("drew {token} ({} left), computer hit: {hit}", self.bag.remaining());
                Some(token)
            }
            Err(Exhausted) => {
                self.state = GameState::Draw;
                info!("bag exhausted without a winner");
                None
            }
        }
    }

    /// Apply the human's call on `token`. Only a correct cross-out marks
    /// the card; any wrong call loses the round on the spot.
    ///
    /// Once the round is over the call is only judged, never applied.
    pub fn apply_decision(&mut self, token: Token, decision: Decision) -> Resolution {
        let present = self.human.has_number(token);
        let resolution = resolve(decision, present);
        if self.state.is_over() {
            return resolution;
        }
        match resolution {
            Resolution::Continue => {
                if decision == Decision::CrossOut {
                    self.human.decide(token);
                }
            }
            Resolution::Lose => self.state = GameState::Lost,
        }
        debug!("token {token}: {decision:?} with present={present} -> {resolution:?}");
        resolution
    }

    /// Play a single turn. Returns the state after the turn.
    pub fn play_turn<C: Console>(&mut self, console: &mut C) -> Result<GameState> {
        if self.state.is_over() {
            return Ok(self.state);
        }

        if self.check_completion().is_over() {
            self.finish(console)?;
            return Ok(self.state);
        }
        let token = match self.draw() {
            Some(token) => token,
            None => {
                self.finish(console)?;
                return Ok(self.state);
            }
        };

        console.clear()?;
        console.show(&self.table())?;
        let decision = Decision::from(console.ask(CROSS_OUT_PROMPT)?);

        if self.apply_decision(token, decision) == Resolution::Lose {
            self.finish(console)?;
        }
        Ok(self.state)
    }

    /// Run turns until the round reaches a terminal state.
    pub fn play<C: Console>(&mut self, console: &mut C) -> Result<GameState> {
        while !self.play_turn(console)?.is_over() {}
        Ok(self.state)
    }

    /// Bag status and both cards.
    pub fn table(&self) -> String {
        format!("{}\n{}\n{}", self.bag, self.human, self.computer)
    }

    /// Final banner, bag status and the human card.
    pub fn final_screen(&self) -> String {
        format!("{}\n{}\n{}", self.state, self.bag, self.human)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::of(self)
    }

    fn finish<C: Console>(&self, console: &mut C) -> Result<()> {
        info!("round over: {:?} after {} barrels", self.state, self.bag.drawn().len());
        if log_enabled!(Level::Debug) {
            match self.snapshot().to_json() {
                Ok(json) => debug!("final round state: {json}"),
                Err(e)   => debug!("could not serialize round state: {e}"),
            }
        }
        console.clear()?;
        console.show(&self.final_screen())
    }
}
