//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`UiAction`]s and tracks the card cursor on the grid. Game
//! intents are forwarded to the engine by the host; help visibility and cursor
//! movement stay in the front-end.

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::{Direction, GridCursor};
pub use map::{handle_key_event, should_quit, UiAction};
