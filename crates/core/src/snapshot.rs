use serde::Serialize;

use crate::types::{Card, CardId, FinalReport, GameStatus, Level, Symbol};

/// Format seconds as `M:SS` (minutes unpadded, seconds zero-padded).
///
/// ```
/// use memory_match_core::format_time;
///
/// assert_eq!(format_time(125), "2:05");
/// assert_eq!(format_time(45), "0:45");
/// assert_eq!(format_time(0), "0:00");
/// ```
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// A card as a renderer may show it: the symbol is withheld while face-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let shown = card.face_up || card.matched;
        Self {
            id: card.id,
            symbol: shown.then_some(card.symbol),
            face_up: card.face_up,
            matched: card.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub cards: Vec<CardView>,
    pub score: u32,
    pub pair_count: u32,
    pub level: Level,
    pub duration_secs: u32,
    pub elapsed_secs: u32,
    pub remaining_secs: u32,
    pub status: GameStatus,
    pub input_locked: bool,
    pub final_report: Option<FinalReport>,
    pub generation: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.score = 0;
        self.pair_count = 0;
        self.level = Level::default();
        self.duration_secs = 0;
        self.elapsed_secs = 0;
        self.remaining_secs = 0;
        self.status = GameStatus::NotStarted;
        self.input_locked = false;
        self.final_report = None;
        self.generation = 0;
    }

    /// Remaining time as `M:SS`.
    pub fn remaining_display(&self) -> String {
        format_time(self.remaining_secs)
    }

    /// Cheap fingerprint used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        // FNV-1a over the fields a renderer shows.
        let mut h: u64 = 0xcbf29ce484222325;
        let mut feed = |b: u8| {
            h ^= u64::from(b);
            h = h.wrapping_mul(0x100000001b3);
        };
        for card in &self.cards {
            for b in card.id.to_le_bytes() {
                feed(b);
            }
            feed(u8::from(card.face_up) | (u8::from(card.matched) << 1));
        }
        for b in self.score.to_le_bytes() {
            feed(b);
        }
        for b in self.remaining_secs.to_le_bytes() {
            feed(b);
        }
        feed(self.level as u8);
        feed(self.status as u8);
        feed(u8::from(self.input_locked));
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
            pair_count: 0,
            level: Level::default(),
            duration_secs: 0,
            elapsed_secs: 0,
            remaining_secs: 0,
            status: GameStatus::NotStarted,
            input_locked: false,
            final_report: None,
            generation: 0,
        }
    }
}
