//! Scoring module - line clear rewards and marathon pacing
//!
//! Line clears pay a fixed, non-linear reward scaled by the current level. There is no
//! drop bonus, combo or back-to-back bonus.

use tetrissy_types::{
    LINE_SCORES, MARATHON_FALL_FLOOR_MS, MARATHON_FALL_MS, MARATHON_FALL_STEP_MS,
    MARATHON_LINES_PER_LEVEL, MARATHON_MAX_LEVEL,
};

/// Points for clearing `lines` rows at once.
///
/// `lines` above 4 pays the 4-line reward; `level` is 1-based.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Marathon level for a total line count: one level per 10 lines, starting at 1, capped
/// at 20
pub fn marathon_level(total_lines: u32) -> u32 {
    (total_lines / MARATHON_LINES_PER_LEVEL + 1).min(MARATHON_MAX_LEVEL)
}

/// Marathon fall interval for a level, in milliseconds
pub fn marathon_fall_interval_ms(level: u32) -> u32 {
    let speedup = MARATHON_FALL_STEP_MS.saturating_mul(level.saturating_sub(1));
    MARATHON_FALL_MS
        .saturating_sub(speedup)
        .max(MARATHON_FALL_FLOOR_MS)
}
