//! Level-to-countdown mapping.

use crate::types::Level;

/// Countdown length in seconds for a level.
///
/// Easy is 120s, normal 90s, hard 45s.
pub fn duration_for(level: Level) -> u32 {
    level.duration_secs()
}

/// Level selected by a numeric shortcut (`1`, `2`, `3`).
pub fn level_for_index(index: usize) -> Option<Level> {
    Level::ALL.get(index).copied()
}
