//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{GameStatus, Level, GRID_COLUMNS, HIDDEN_GLYPH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state that is not part of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Deck position under the cursor.
    pub cursor: usize,
    /// "How to Play" overlay is open.
    pub show_help: bool,
}

const CARD_W: u16 = 7;
const CARD_H: u16 = 3;
const GAP: u16 = 1;

const ROW_TITLE: u16 = 0;
const ROW_LEVELS: u16 = 1;
const ROW_SCORE: u16 = 2;
const ROW_GRID: u16 = 4;

const TITLE: &str = "Memory Game";
const KEYS_HINT: &str = "[r] Restart  [?] How to Play  [q] Quit";

const HELP_TITLE: &str = "Memory Game - How to Play";
const HELP_LINES: &[&str] = &[
    "Objective: find all the matching pairs of cards",
    "with the same symbols.",
    "",
    "Getting Started",
    "  Start a Game: press r to restart with a new deck.",
    "  Flipping Cards: flip two cards at a time with",
    "  the arrow keys and Enter.",
    "",
    "Game Rules",
    "  Matching Pairs: cards with the same symbol stay",
    "  face-up.",
    "  Remember Symbols: try to remember where you have",
    "  seen each symbol.",
    "  Mismatch: two cards that don't match flip back",
    "  face-down, and you can try again.",
    "",
    "Levels: [1] Easy 2:00  [2] Normal 1:30  [3] Hard 0:45",
    "",
    "Press ? or Esc to close.",
];

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG);
const MUTED: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), BG);
const ACCENT: CellStyle = CellStyle::new(Rgb::new(255, 215, 90), BG).bold();
const HIDDEN: CellStyle = CellStyle::new(Rgb::new(150, 150, 170), Rgb::new(25, 25, 45));
const REVEALED: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 60, 110)).bold();
const MATCHED: CellStyle = CellStyle::new(Rgb::new(120, 220, 140), Rgb::new(20, 50, 30));
const CURSOR: CellStyle = CellStyle::new(Rgb::new(90, 220, 255), BG).bold();
const WON: CellStyle = CellStyle::new(Rgb::new(120, 230, 120), BG).bold();
const LOST: CellStyle = CellStyle::new(Rgb::new(240, 100, 100), BG).bold();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(20, 20, 30));

/// A lightweight terminal renderer for the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS as u16,
        }
    }
}

impl GameView {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    fn grid_rows(&self, cards: usize) -> u16 {
        (cards as u16).div_ceil(self.columns)
    }

    fn grid_size(&self, cards: usize) -> (u16, u16) {
        let rows = self.grid_rows(cards);
        let w = self.columns * CARD_W + (self.columns - 1) * GAP;
        let h = (rows * CARD_H + rows.saturating_sub(1) * GAP).max(1);
        (w, h)
    }

    /// Rows the whole layout needs.
    pub fn layout_height(&self, cards: usize) -> u16 {
        let (_, grid_h) = self.grid_size(cards);
        ROW_GRID + grid_h + 3
    }

    pub fn render(&self, snap: &GameSnapshot, state: ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, state, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        state: ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.into_cell(' '));

        let top = viewport
            .height
            .saturating_sub(self.layout_height(snap.cards.len()))
            / 2;

        fb.put_str_centered(top + ROW_TITLE, TITLE, ACCENT);
        self.draw_levels(fb, top + ROW_LEVELS, snap.level);
        self.draw_scoreboard(fb, top + ROW_SCORE, snap);

        let (grid_w, grid_h) = self.grid_size(snap.cards.len());
        let grid_x = viewport.width.saturating_sub(grid_w) / 2;
        let grid_y = top + ROW_GRID;
        for (i, card) in snap.cards.iter().enumerate() {
            let (dx, dy) = self.card_offset(i);
            self.draw_card(
                fb,
                grid_x + dx,
                grid_y + dy,
                card,
                i == state.cursor,
                snap.input_locked,
            );
        }

        let status_y = grid_y + grid_h + 1;
        let (line, style) = status_line(snap);
        fb.put_str_centered(status_y, &line, style);
        fb.put_str_centered(status_y + 1, KEYS_HINT, MUTED);

        if state.show_help {
            self.draw_help(fb, viewport);
        }
    }

    fn card_offset(&self, index: usize) -> (u16, u16) {
        let col = index as u16 % self.columns;
        let row = index as u16 / self.columns;
        (col * (CARD_W + GAP), row * (CARD_H + GAP))
    }

    fn draw_levels(&self, fb: &mut FrameBuffer, y: u16, current: Level) {
        let labels: Vec<String> = Level::ALL
            .iter()
            .enumerate()
            .map(|(i, level)| format!("[{}] {}", i + 1, level.label()))
            .collect();
        let total: usize = labels.iter().map(|l| l.chars().count()).sum::<usize>()
            + 2 * (labels.len() - 1);

        let mut x = fb.width().saturating_sub(total as u16) / 2;
        for (label, level) in labels.iter().zip(Level::ALL) {
            let style = if level == current { ACCENT } else { MUTED };
            x = fb.put_str(x, y, label, style) + 2;
        }
    }

    fn draw_scoreboard(&self, fb: &mut FrameBuffer, y: u16, snap: &GameSnapshot) {
        let line = format!(
            "Score: {}    Time: {}",
            snap.score,
            snap.remaining_display()
        );
        fb.put_str_centered(y, &line, TEXT);
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        card: &CardView,
        under_cursor: bool,
        locked: bool,
    ) {
        let mut face = if card.matched {
            MATCHED
        } else if card.face_up {
            REVEALED
        } else {
            HIDDEN
        };
        if locked && !card.face_up {
            face = face.dim();
        }

        let rect = Rect::new(x, y, CARD_W, CARD_H);
        fb.fill(rect, ' ', face);
        fb.outline(rect, if under_cursor { CURSOR } else { face });

        let (cx, cy) = rect.center();
        fb.put_char(cx, cy, card.symbol.unwrap_or(HIDDEN_GLYPH), face);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let inner_w = HELP_LINES
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(HELP_TITLE.len()) as u16;
        let screen = Rect::new(0, 0, viewport.width, viewport.height);
        let panel = Rect::centered_in(screen, inner_w + 4, HELP_LINES.len() as u16 + 4);

        fb.fill(panel, ' ', OVERLAY);
        fb.outline(panel, OVERLAY.bold());

        let title_x = panel.x + panel.w.saturating_sub(HELP_TITLE.len() as u16) / 2;
        fb.put_str(title_x, panel.y + 1, HELP_TITLE, OVERLAY.bold());
        let body = (panel.y + 2..panel.bottom().saturating_sub(1)).zip(HELP_LINES);
        for (row, line) in body {
            fb.put_str(panel.x + 2, row, line, OVERLAY);
        }
    }
}

fn status_line(snap: &GameSnapshot) -> (String, CellStyle) {
    if let Some(report) = snap.final_report {
        let style = if report.status() == GameStatus::Won {
            WON
        } else {
            LOST
        };
        return (report.message(), style);
    }

    match snap.status {
        GameStatus::NotStarted => ("Flip a card to start the clock".to_string(), MUTED),
        _ => (
            format!("Pairs found: {}/{}", snap.score, snap.pair_count),
            TEXT,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, FinalReport, Outcome, SYMBOLS};

    fn snapshot() -> GameSnapshot {
        let mut snap = GameSnapshot {
            pair_count: 8,
            duration_secs: 120,
            remaining_secs: 120,
            ..GameSnapshot::default()
        };
        for (i, symbol) in (0u32..16).zip(SYMBOLS.iter().flat_map(|&s| [s, s])) {
            snap.cards.push(CardView::from(&Card::new(i, symbol)));
        }
        snap
    }

    #[test]
    fn test_grid_size() {
        let view = GameView::default();
        assert_eq!(view.grid_size(16), (31, 15));
        assert_eq!(view.layout_height(16), 22);
    }

    #[test]
    fn test_card_offset() {
        let view = GameView::default();
        assert_eq!(view.card_offset(0), (0, 0));
        assert_eq!(view.card_offset(3), (24, 0));
        assert_eq!(view.card_offset(4), (0, 4));
    }

    #[test]
    fn test_status_line() {
        let mut snap = snapshot();
        assert_eq!(status_line(&snap).0, "Flip a card to start the clock");

        snap.status = GameStatus::Running;
        snap.score = 3;
        assert_eq!(status_line(&snap).0, "Pairs found: 3/8");

        snap.status = GameStatus::Lost;
        snap.final_report = Some(FinalReport {
            outcome: Outcome::Lost,
            elapsed_secs: 120,
            score: 3,
        });
        assert_eq!(status_line(&snap).0, "Oops, you lose. You took too long!");
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let view = GameView::default();
        let state = ViewState {
            cursor: 5,
            show_help: true,
        };
        let _ = view.render(&snapshot(), state, Viewport::new(10, 5));
        let _ = view.render(&snapshot(), state, Viewport::new(0, 0));
    }
}
