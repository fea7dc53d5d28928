//! Front-end state around the engine: card cursor and help overlay.
//!
//! Pure with respect to the terminal, so it can be driven from tests.

use tracing::debug;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, SimpleRng};
use crate::engine::GameEngine;
use crate::input::{GridCursor, UiAction};
use crate::term::ViewState;
use crate::types::{DECK_SIZE, GRID_COLUMNS};

pub struct App {
    engine: GameEngine,
    cursor: GridCursor,
    show_help: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_entropy(),
        };
        Self::with_engine(GameEngine::new(config.level, rng))
    }

    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: GridCursor::new(DECK_SIZE, GRID_COLUMNS),
            show_help: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            cursor: self.cursor.index(),
            show_help: self.show_help,
        }
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// Apply a key action. Returns true if anything visible changed.
    pub fn handle(&mut self, action: UiAction) -> bool {
        // The overlay swallows everything except closing it.
        if self.show_help {
            return match action {
                UiAction::ToggleHelp | UiAction::CloseHelp => {
                    self.show_help = false;
                    true
                }
                _ => false,
            };
        }

        match action {
            UiAction::Move(direction) => self.cursor.step(direction),
            UiAction::Flip => {
                let id = self
                    .engine
                    .session()
                    .cards()
                    .get(self.cursor.index())
                    .map(|c| c.id);
                match id {
                    Some(id) => self.engine.click(id),
                    None => false,
                }
            }
            UiAction::SelectLevel(level) => self.engine.select_level(level),
            UiAction::Restart => {
                self.cursor.reset();
                self.engine.restart()
            }
            UiAction::ToggleHelp => {
                debug!("help opened");
                self.show_help = true;
                true
            }
            UiAction::CloseHelp => false,
        }
    }

    /// Advance game time. Returns true if the round changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.engine.advance(elapsed_ms)
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}
