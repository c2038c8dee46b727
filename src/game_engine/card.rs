//! A 3×9 loto card holding 15 unique numbers.
//!
//! ## Generation
//!
//! 1. Sample 15 distinct numbers from 1..=90 and sort them.
//! 2. Deal them into rows round-robin: row `r` gets sorted positions
//!    `r, r+3, r+6, r+9, r+12`, so each row is already ascending.
//! 3. For each row shuffle a 9-slot template of 5 numbered and 4 blank
//!    slots, then fill the numbered slots left to right.

use std::fmt;

use rand::{seq::index, seq::SliceRandom, Rng};
use crate::game_engine::models::*;

/// Width of the rendered card, header and footer included.
const CARD_WIDTH: usize = 43;

/// Cell separator inside a rendered row.
const CELL_GAP: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    owner: String,
    rows: [[Cell; CARD_COLS]; CARD_ROWS],
}

impl Card {
    /// Generate a fresh random card labelled `owner`.
    pub fn generate<R: Rng>(rng: &mut R, owner: impl Into<String>) -> Self {
        let mut numbers: Vec<Token> = index::sample(rng, TOKEN_COUNT as usize, NUMBERS_PER_CARD)
            .into_iter()
            .map(|i| (i + 1) as Token)
            .collect();
        numbers.sort_unstable();

        let mut rows = [[Cell::Blank; CARD_COLS]; CARD_ROWS];
        for (r, row) in rows.iter_mut().enumerate() {
            let pattern = row_pattern(rng);
            let slots = row
                .iter_mut()
                .zip(pattern)
                .filter_map(|(slot, numbered)| numbered.then_some(slot));
            let values = numbers.iter().skip(r).step_by(CARD_ROWS);
            debug_assert_eq!(values.len(), NUMBERS_PER_ROW);

            for (slot, v) in slots.zip(values) {
                *slot = Cell::Number(*v);
            }
        }

        Card { owner: owner.into(), rows }
    }

    /// Build a card from explicit rows, skipping the layout checks.
    #[cfg(test)]
    pub(crate) fn from_rows(owner: impl Into<String>, rows: [[Cell; CARD_COLS]; CARD_ROWS]) -> Self {
        Card { owner: owner.into(), rows }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn rows(&self) -> &[[Cell; CARD_COLS]; CARD_ROWS] {
        &self.rows
    }

    fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Cross `value` out if it is on the card and not yet marked.
    pub fn mark_if_present(&mut self, value: Token) -> bool {
        match self.rows.iter_mut().flatten().find(|c| **c == Cell::Number(value)) {
            Some(cell) => {
                *cell = Cell::Marked;
                true
            }
            None => false,
        }
    }

    /// Is `value` on the card and still unmarked?
    pub fn contains(&self, value: Token) -> bool {
        self.cells().any(|c| *c == Cell::Number(value))
    }

    /// True once no unmarked number remains.
    pub fn is_completed(&self) -> bool {
        !self.cells().any(|c| matches!(c, Cell::Number(_)))
    }

    /// Unmarked numbers, row by row.
    pub fn values(&self) -> Vec<Token> {
        self.cells()
            .filter_map(|c| match c {
                Cell::Number(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Cells that hold or held a number.
    pub fn numbered_count(&self) -> usize {
        self.cells().filter(|c| **c != Cell::Blank).count()
    }

    pub fn marked_count(&self) -> usize {
        self.cells().filter(|c| **c == Cell::Marked).count()
    }

    #[cfg(test)]
    pub(crate) fn mark_all(&mut self) {
        for cell in self.rows.iter_mut().flatten() {
            if let Cell::Number(_) = cell {
                *cell = Cell::Marked;
            }
        }
    }
}

/// Random numbered/blank layout for one row: 5 `true`, 4 `false`.
fn row_pattern<R: Rng>(rng: &mut R) -> [bool; CARD_COLS] {
    let mut pattern = [false; CARD_COLS];
    pattern[..NUMBERS_PER_ROW].fill(true);
    pattern.shuffle(rng);
    pattern
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-^width$}", format!(" {} ", self.owner), width = CARD_WIDTH)?;
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(CELL_GAP))?;
        }
        write!(f, "{}", "-".repeat(CARD_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn card(seed: u64) -> Card {
        let mut rng = StdRng::seed_from_u64(seed);
        Card::generate(&mut rng, "Test card")
    }

    #[test]
    fn generated_cards_follow_the_layout_rules() {
        for seed in 0..200 {
            let c = card(seed);
            let mut seen = HashSet::new();
            for row in c.rows() {
                let nums: Vec<Token> = row
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::Number(v) => Some(*v),
                        _ => None,
                    })
                    .collect();
                assert_eq!(nums.len(), NUMBERS_PER_ROW, "seed={seed}: {row:?}");
                assert!(nums.windows(2).all(|w| w[0] < w[1]), "seed={seed}: row not ascending {nums:?}");
                for n in nums {
                    assert!((1..=TOKEN_COUNT).contains(&n), "seed={seed}: {n} out of range");
                    assert!(seen.insert(n), "seed={seed}: duplicate {n}");
                }
            }
            assert_eq!(seen.len(), NUMBERS_PER_CARD);
            assert_eq!(c.numbered_count(), NUMBERS_PER_CARD);
        }
    }

    #[test]
    fn row_patterns_vary() {
        let patterns: HashSet<[bool; CARD_COLS]> = (0..50)
            .map(|seed| {
                let c = card(seed);
                let mut p = [false; CARD_COLS];
                for (slot, cell) in p.iter_mut().zip(c.rows()[0].iter()) {
                    *slot = *cell != Cell::Blank;
                }
                p
            })
            .collect();
        assert!(patterns.len() > 10, "only {} distinct row layouts", patterns.len());
    }

    #[test]
    fn marking_succeeds_once_per_value() {
        let mut c = card(3);
        let values = c.values();
        for v in &values {
            assert!(c.mark_if_present(*v), "{v} should be markable");
            assert!(!c.mark_if_present(*v), "{v} must not match after marking");
            assert!(!c.contains(*v));
        }
        assert_eq!(c.marked_count(), NUMBERS_PER_CARD);
    }

    #[test]
    fn marking_an_absent_value_changes_nothing() {
        let mut c = card(5);
        let absent = (1..=TOKEN_COUNT).find(|v| !c.contains(*v)).unwrap();
        let before = c.clone();
        assert!(!c.mark_if_present(absent));
        assert_eq!(c, before);
    }

    #[test]
    fn completion_needs_all_fifteen() {
        let mut c = card(11);
        let values = c.values();
        let (last, rest) = values.split_last().unwrap();
        for v in rest {
            c.mark_if_present(*v);
        }
        assert_eq!(c.marked_count(), 14);
        assert!(!c.is_completed());
        c.mark_if_present(*last);
        assert!(c.is_completed());
    }

    #[test]
    fn render_has_header_rows_and_footer() {
        let mut row = [Cell::Blank; CARD_COLS];
        row[0] = Cell::Number(9);
        row[1] = Cell::Marked;
        row[8] = Cell::Number(90);
        let c = Card::from_rows("Your card", [row; CARD_ROWS]);
        let text = c.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].chars().count(), CARD_WIDTH);
        assert!(lines[0].contains(" Your card "));
        assert!(lines[1].starts_with(" 9   --"));
        assert!(lines[1].ends_with("90"));
        assert_eq!(lines[4], "-".repeat(CARD_WIDTH));
    }
}
