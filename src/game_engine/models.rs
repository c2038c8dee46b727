use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Board constants
// ---------------------------------------------------------------------------

/// A single numbered barrel drawn from the bag, 1..=90.
pub type Token = u8;

/// Number of barrels in a full bag.
pub const TOKEN_COUNT: Token = 90;

pub const CARD_ROWS: usize = 3;
pub const CARD_COLS: usize = 9;
pub const NUMBERS_PER_ROW: usize = 5;
pub const NUMBERS_PER_CARD: usize = CARD_ROWS * NUMBERS_PER_ROW;

// ---------------------------------------------------------------------------
// Card cells
// ---------------------------------------------------------------------------

/// One slot of a card grid.
///
/// A marked cell deliberately forgets its value, so a number that was
/// crossed out can never be matched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    Number(Token),
    Marked,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank     => write!(f, "  "),
            Cell::Number(n) => write!(f, "{:>2}", n),
            Cell::Marked    => write!(f, "--"),
        }
    }
}

// ---------------------------------------------------------------------------
// Players and turns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    /// Header shown above the player's card.
    pub fn card_label(self) -> &'static str {
        match self {
            PlayerKind::Human    => "Your card",
            PlayerKind::Computer => "Computer's card",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human    => write!(f, "Human"),
            PlayerKind::Computer => write!(f, "Computer"),
        }
    }
}

/// What the human answers to "cross out the number?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    CrossOut,
    Skip,
}

impl From<bool> for Decision {
    fn from(yes: bool) -> Self {
        if yes { Decision::CrossOut } else { Decision::Skip }
    }
}

/// Result of checking a decision against the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Continue,
    Lose,
}

/// Round state. Everything except `On` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    On,
    Won,
    Lost,
    /// Bag ran out before anyone completed a card.
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::On)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::On   => "Game on",
            GameState::Won  => "Congratulations! You win!",
            GameState::Lost => "Bad luck. You lose :(",
            GameState::Draw => "The bag is empty. Nobody wins this time.",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `Some(seed)` makes every round's bag and cards reproducible.
    pub rng_seed: Option<u64>,
    /// Clear the terminal before each render.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { rng_seed: None, clear_screen: true }
    }
}

impl GameConfig {
    pub const SEED_VAR: &'static str = "LOTO_SEED";
    pub const NO_CLEAR_VAR: &'static str = "LOTO_NO_CLEAR";

    /// Read overrides from the environment on top of the defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GameConfig::default();
        if let Some(raw) = lookup(Self::SEED_VAR) {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("{} must be an unsigned integer, got {raw:?}: {e}", Self::SEED_VAR)
            })?;
            config.rng_seed = Some(seed);
        }
        if lookup(Self::NO_CLEAR_VAR).is_some() {
            config.clear_screen = false;
        }
        Ok(config)
    }

    pub fn with_seed(seed: u64) -> Self {
        GameConfig { rng_seed: Some(seed), ..GameConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_as_two_characters() {
        assert_eq!(Cell::Blank.to_string(), "  ");
        assert_eq!(Cell::Marked.to_string(), "--");
        assert_eq!(Cell::Number(7).to_string(), " 7");
        assert_eq!(Cell::Number(90).to_string(), "90");
    }

    #[test]
    fn config_reads_seed_and_no_clear() {
        let config = GameConfig::from_lookup(|key| match key {
            "LOTO_SEED" => Some(" 42 ".to_string()),
            "LOTO_NO_CLEAR" => Some(String::new()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert!(!config.clear_screen);
    }

    #[test]
    fn config_defaults_without_variables() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn config_rejects_bad_seed() {
        let err = GameConfig::from_lookup(|key| {
            (key == "LOTO_SEED").then(|| "lucky".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("LOTO_SEED"));
    }

    #[test]
    fn only_on_is_not_over() {
        assert!(!GameState::On.is_over());
        for s in [GameState::Won, GameState::Lost, GameState::Draw] {
            assert!(s.is_over(), "{s:?} must be terminal");
        }
    }
}
