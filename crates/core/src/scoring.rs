//! Scoring module - row-clear points, level gating and fall rate
//!
//! Compatibility note:
//! These rules are intentionally non-standard and are reproduced exactly:
//! - A single row is worth 50; `n` rows are worth `50 * (n - 1) * n`.
//! - A level-up happens whenever `lines / 10 >= level`, one level per check,
//!   so the very first check of a new game moves level 0 to level 1.
//! - The fall interval shrinks linearly and turns non-positive past level 11.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, SCORE_UNIT};

/// Points awarded for clearing `rows` rows at once.
pub fn score_for_rows(rows: u32) -> u32 {
    if rows == 1 {
        SCORE_UNIT
    } else {
        SCORE_UNIT * rows.saturating_sub(1) * rows
    }
}

/// Whether the level check passes for the given totals.
///
/// Equivalent to `lines / 10 >= level` under real division.
pub fn should_level_up(lines: u32, level: u32) -> bool {
    u64::from(lines) >= u64::from(LINES_PER_LEVEL) * u64::from(level)
}

/// Raw fall interval for `level`, in milliseconds.
///
/// Non-positive from level 12 upward; callers decide how to tick at that
/// speed (see [`fall_interval_ms`]).
pub fn fall_rate_ms(level: u32) -> i64 {
    BASE_FALL_MS - i64::from(level) * FALL_STEP_MS
}

/// Fall interval usable as a timer period.
///
/// A non-positive raw rate is treated as "every millisecond".
pub fn fall_interval_ms(level: u32) -> u32 {
    fall_rate_ms(level).max(1) as u32
}
