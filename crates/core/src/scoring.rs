//! Scoring module - points and speed progression
//!
//! - Every spawned piece is worth `points_per_piece`, the very first included.
//! - Every cleared line is worth `points_per_line`; there is no multi-line bonus.
//! - The tick interval shrinks by a tenth of the base every `lines_per_speedup` lines.

/// Points for a number of lines cleared in one lock
pub fn line_clear_points(lines: u32, points_per_line: u32) -> u32 {
    lines.saturating_mul(points_per_line)
}

/// Number of speed-ups earned so far
pub fn speed_level(total_lines: u32, lines_per_speedup: u32) -> u32 {
    if lines_per_speedup == 0 {
        return 0;
    }
    total_lines / lines_per_speedup
}

/// Tick interval for the given line count, in milliseconds.
///
/// `base * (1 - level / 10)` rounded down, computed in integers. From level 10 on
/// the interval stays at 0, meaning "tick as fast as the driver can".
pub fn tick_interval_ms(base_interval_ms: u32, total_lines: u32, lines_per_speedup: u32) -> u32 {
    let level = speed_level(total_lines, lines_per_speedup);
    let remaining_tenths = 10u32.saturating_sub(level) as u64;
    (base_interval_ms as u64 * remaining_tenths / 10) as u32
}
