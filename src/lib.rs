//! Memory Match (workspace facade crate).
//!
//! Re-exports the member crates under `memory_match::{core,engine,input,term,types}`
//! and holds the pieces the terminal binary is assembled from.

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub mod app;
pub mod config;
pub mod logging;
