//! Engine module - runs a round against time.
//!
//! [`GameEngine`] wraps the pure [`Session`](memory_match_core::Session)
//! reducer with an owned [`Clock`]: the repeating countdown ticker and the
//! one-shot mismatch timer live here as cancelable handles, and every
//! transition's effects are applied to them before control returns to the
//! host.
//!
//! ```
//! use memory_match_engine::GameEngine;
//! use memory_match_types::{GameStatus, Level};
//!
//! let mut engine = GameEngine::seeded(Level::Hard, 1);
//! let first = engine.session().cards()[0].id;
//! engine.click(first);
//!
//! engine.advance(45_000);
//! assert_eq!(engine.session().status(), GameStatus::Lost);
//! ```

pub mod clock;
pub mod engine;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use clock::{Clock, Fired, TimerHandle, TimerKind};
pub use engine::GameEngine;
