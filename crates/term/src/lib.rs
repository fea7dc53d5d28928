//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It does not use a widget
//! toolkit; the view renders into a plain framebuffer which the renderer
//! flushes to the terminal.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Make the view testable without a terminal
//! - Redraw only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{GameView, ViewState, Viewport};
pub use renderer::{changed_spans, encode_full_into, encode_spans_into, DrawStats, Span, TerminalRenderer};
