//! Core game engine — bag, cards, players and the round state machine.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: cells, player kinds, decisions, game state, config |
//! | `bag`      | 90-barrel bag with Fisher-Yates shuffle and a forward-only cursor |
//! | `card`     | 3×9 card generation, marking, completion and rendering |
//! | `player`   | A player identity bound to one card |
//! | `round`    | Turn protocol and win/lose resolution for one round |
//! | `console`  | Yes/no prompts and output, with a stdin/stdout implementation |
//! | `session`  | Rules banner, start prompt and replay loop |
//! | `snapshot` | Serializable round view for debug logging |

pub mod bag;
pub mod card;
pub mod console;
pub mod models;
pub mod player;
pub mod round;
pub mod session;
pub mod snapshot;

// Re-export the public API surface so callers can use
// `game_engine::Round` without reaching into sub-modules.
pub use bag::{Bag, Exhausted};
pub use card::Card;
pub use console::{is_affirmative, Console, Terminal};
pub use models::{
    Cell, Decision, GameConfig, GameState, PlayerKind, Resolution, Token, TOKEN_COUNT,
};
pub use player::Player;
pub use round::{resolve, Round};
pub use session::SessionEnd;
pub use snapshot::{CardSnapshot, RoundSnapshot};
