//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable
//! in any context (core reducer, engine host, terminal rendering).
//!
//! # Deck Dimensions
//!
//! - **Symbols**: 8 (`A` through `H`)
//! - **Cards**: 16 (two per symbol)
//! - **Grid**: 4 columns x 4 rows
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Countdown tick period |
//! | `MISMATCH_DELAY_MS` | 1000 | Time a mismatched pair stays face-up |
//!
//! # Levels
//!
//! | Level | Countdown |
//! |-------|-----------|
//! | easy | 120s |
//! | normal | 90s |
//! | hard | 45s |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Level, DECK_SIZE, SYMBOLS};
//!
//! assert_eq!(SYMBOLS.len(), 8);
//! assert_eq!(DECK_SIZE, 16);
//!
//! let level = Level::from_str("Hard").unwrap();
//! assert_eq!(level.duration_secs(), 45);
//! assert_eq!(level.as_str(), "hard");
//! ```

use serde::{Deserialize, Serialize};

/// A card face. The alphabet is fixed, see [`SYMBOLS`].
pub type Symbol = char;

/// Card identifier, unique within a deck.
pub type CardId = u32;

/// The symbol alphabet used to build pairs.
pub const SYMBOLS: [Symbol; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Number of pairs in a full deck.
pub const PAIR_COUNT: usize = SYMBOLS.len();

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Countdown tick period in milliseconds.
pub const TICK_MS: u32 = 1000;

/// How long a mismatched pair stays face-up before being hidden again.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Glyph shown for a face-down card.
pub const HIDDEN_GLYPH: char = '?';

/// Countdown for [`Level::Easy`] in seconds.
pub const EASY_SECS: u32 = 120;

/// Countdown for [`Level::Normal`] in seconds.
pub const NORMAL_SECS: u32 = 90;

/// Countdown for [`Level::Hard`] in seconds.
pub const HARD_SECS: u32 = 45;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_durations_match_presets() {
        assert_eq!(EASY_SECS, 120);
        assert_eq!(NORMAL_SECS, 90);
        assert_eq!(HARD_SECS, 45);
        assert_eq!(Level::Easy.duration_secs(), EASY_SECS);
        assert_eq!(Level::Normal.duration_secs(), NORMAL_SECS);
        assert_eq!(Level::Hard.duration_secs(), HARD_SECS);
    }

    #[test]
    fn symbols_are_distinct() {
        for (i, a) in SYMBOLS.iter().enumerate() {
            for b in &SYMBOLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(DECK_SIZE % GRID_COLUMNS, 0);
    }

    #[test]
    fn final_report_messages() {
        let won = FinalReport {
            outcome: Outcome::Won,
            elapsed_secs: 45,
            score: 8,
        };
        assert_eq!(won.message(), "Congratulations! You won in 45 seconds.");

        let lost = FinalReport {
            outcome: Outcome::Lost,
            elapsed_secs: 45,
            score: 3,
        };
        assert_eq!(lost.message(), "Oops, you lose. You took too long!");
    }
}

/// A single card in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// A card the player may still flip.
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}

/// Difficulty preset. Only the countdown length differs between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Level {
    /// All presets, in button order.
    pub const ALL: [Level; 3] = [Level::Easy, Level::Normal, Level::Hard];

    /// Countdown length for this level.
    pub fn duration_secs(&self) -> u32 {
        match self {
            Level::Easy => EASY_SECS,
            Level::Normal => NORMAL_SECS,
            Level::Hard => HARD_SECS,
        }
    }

    /// Parse a level name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::Level;
    ///
    /// assert_eq!(Level::from_str("easy"), Some(Level::Easy));
    /// assert_eq!(Level::from_str("NORMAL"), Some(Level::Normal));
    /// assert_eq!(Level::from_str(" hard "), Some(Level::Hard));
    /// assert_eq!(Level::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Level::Easy),
            "normal" => Some(Level::Normal),
            "hard" => Some(Level::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Normal => "normal",
            Level::Hard => "hard",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Normal => "Normal",
            Level::Hard => "Hard",
        }
    }
}

/// Round status as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    NotStarted,
    Running,
    Won,
    Lost,
}

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Won,
    Lost,
}

/// Everything a renderer needs to announce the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    pub outcome: Outcome,
    pub elapsed_secs: u32,
    pub score: u32,
}

impl FinalReport {
    /// End-of-round banner text.
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Won => format!(
                "Congratulations! You won in {} seconds.",
                self.elapsed_secs
            ),
            Outcome::Lost => "Oops, you lose. You took too long!".to_string(),
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Outcome::Won => GameStatus::Won,
            Outcome::Lost => GameStatus::Lost,
        }
    }
}

/// Player intents forwarded by a front-end into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal a card
    Click(CardId),
    /// Switch difficulty preset
    SelectLevel(Level),
    /// Start over with a fresh deck
    Restart,
}

impl GameAction {
    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Click(_) => "click",
            GameAction::SelectLevel(_) => "selectLevel",
            GameAction::Restart => "restart",
        }
    }
}
