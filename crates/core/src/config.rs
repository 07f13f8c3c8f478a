//! Game configuration with environment overrides.

use std::str::FromStr;

use crate::types::{
    BASE_INTERVAL_MS, BOARD_COLUMNS, BOARD_ROWS, LINES_PER_SPEEDUP, POINTS_PER_LINE,
    POINTS_PER_PIECE,
};

/// Tunable rules of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: i32,
    pub columns: i32,
    pub points_per_piece: u32,
    pub points_per_line: u32,
    pub base_interval_ms: u32,
    pub lines_per_speedup: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            columns: BOARD_COLUMNS,
            points_per_piece: POINTS_PER_PIECE,
            points_per_line: POINTS_PER_LINE,
            base_interval_ms: BASE_INTERVAL_MS,
            lines_per_speedup: LINES_PER_SPEEDUP,
        }
    }
}

impl GameConfig {
    /// Read overrides from `TETRIS_*` environment variables.
    ///
    /// - `TETRIS_ROWS`, `TETRIS_COLUMNS`: board size (default 20x10)
    /// - `TETRIS_POINTS_PER_PIECE` (default 10), `TETRIS_POINTS_PER_LINE` (default 100)
    /// - `TETRIS_BASE_INTERVAL_MS` (default 1000), `TETRIS_LINES_PER_SPEEDUP` (default 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable lookup.
    ///
    /// Missing or unparsable values keep their default. Dimensions are not
    /// validated here; `GameState::new` rejects unusable boards.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            rows: parse_var(&lookup, "TETRIS_ROWS", defaults.rows),
            columns: parse_var(&lookup, "TETRIS_COLUMNS", defaults.columns),
            points_per_piece: parse_var(&lookup, "TETRIS_POINTS_PER_PIECE", defaults.points_per_piece),
            points_per_line: parse_var(&lookup, "TETRIS_POINTS_PER_LINE", defaults.points_per_line),
            base_interval_ms: parse_var(&lookup, "TETRIS_BASE_INTERVAL_MS", defaults.base_interval_ms),
            lines_per_speedup: parse_var(
                &lookup,
                "TETRIS_LINES_PER_SPEEDUP",
                defaults.lines_per_speedup,
            ),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_ROWS", "24"),
            ("TETRIS_COLUMNS", " 12 "),
            ("TETRIS_POINTS_PER_LINE", "40"),
            ("TETRIS_BASE_INTERVAL_MS", "800"),
        ]));
        assert_eq!(config.rows, 24);
        assert_eq!(config.columns, 12);
        assert_eq!(config.points_per_line, 40);
        assert_eq!(config.base_interval_ms, 800);
        assert_eq!(config.points_per_piece, 10);
        assert_eq!(config.lines_per_speedup, 5);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_ROWS", "tall"),
            ("TETRIS_POINTS_PER_PIECE", "-5"),
        ]));
        assert_eq!(config.rows, 20);
        assert_eq!(config.points_per_piece, 10);
    }

    #[test]
    fn test_non_positive_dimensions_pass_through() {
        let config = GameConfig::from_lookup(lookup_from(&[("TETRIS_COLUMNS", "0")]));
        assert_eq!(config.columns, 0);
    }
}
