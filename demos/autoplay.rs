//! Plays seeded rounds with a perfect player and prints how they end.
//!
//! Run with: `cargo run --example autoplay`
//!
//! The player only crosses out numbers that are on their card, so a round
//! is decided purely by which card fills up first.

use loto::{Decision, GameState, Round};

/// Play one round without prompts and return the final state.
fn autoplay(round: &mut Round) -> GameState {
    while round.check_completion() == GameState::On {
        let Some(token) = round.draw() else { break };
        let decision = Decision::from(round.human().has_number(token));
        round.apply_decision(token, decision);
    }
    round.state()
}

fn main() {
    // ── One round in full ──────────────────────────────────────────────────
    let mut round = Round::new(Some(42));
    println!("{}", round.table());
    let state = autoplay(&mut round);
    println!();
    println!("{}", round.final_screen());
    println!("Barrels drawn: {}", round.bag().drawn().len());
    println!("Outcome: {state:?}");

    // ── Many rounds ────────────────────────────────────────────────────────
    let (mut won, mut lost) = (0, 0);
    for seed in 0..1000u64 {
        match autoplay(&mut Round::new(Some(seed))) {
            GameState::Won  => won += 1,
            GameState::Lost => lost += 1,
            other           => println!("seed {seed}: unexpected {other:?}"),
        }
    }
    println!();
    println!("1000 perfect rounds: {won} won, {lost} lost");
}
