//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the pair-matching round: deck
//! construction, shuffling, level durations and the session state machine.
//! It has **no dependencies** on clocks, terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same deck
//! - **Testable**: Every transition is a pure function of the previous session
//! - **Portable**: Any host (terminal, GUI, headless test) can drive it
//!
//! # Module Structure
//!
//! - [`deck`]: Builds the paired deck from the symbol alphabet
//! - [`rng`]: Seeded LCG and Fisher-Yates shuffle over an injectable source
//! - [`level`]: Level-to-countdown mapping
//! - [`session`]: The round reducer and the timer effects it requests
//! - [`snapshot`]: Read-only view for renderers and `M:SS` formatting
//!
//! # Game Rules
//!
//! - The first click starts the countdown
//! - Two face-up cards with the same symbol stay revealed and score a pair
//! - A mismatched pair locks input and is hidden again after 1000ms
//! - The round ends only when the countdown reaches zero: **won** with every
//!   pair found, **lost** otherwise
//!
//! # Example
//!
//! ```
//! use memory_match_core::{build_deck, Session, SessionAction};
//! use memory_match_types::{GameStatus, Level, SYMBOLS};
//!
//! // Unshuffled deck: cards 0 and 1 share a symbol.
//! let session = Session::new(Level::Hard, build_deck(&SYMBOLS));
//!
//! let step = session.reduce(SessionAction::Click(0));
//! let step = step.session.reduce(SessionAction::Click(1));
//! assert_eq!(step.session.score(), 1);
//! assert_eq!(step.session.status(), GameStatus::Running);
//! ```

pub mod deck;
pub mod level;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use deck::{build_deck, is_well_formed, shuffled_deck};
pub use level::duration_for;
pub use rng::{shuffle, RandomSource, SimpleRng, UnitFloatSource};
pub use session::{Effect, Effects, Phase, Session, SessionAction, Step};
pub use snapshot::{format_time, CardView, GameSnapshot};
