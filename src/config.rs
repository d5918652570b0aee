//! Runtime configuration read from `TETRIS_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_ROWS` | 20 | grid rows (4..=1000) |
//! | `TETRIS_COLS` | 10 | grid columns (4..=1000) |
//! | `TETRIS_GRAVITY_MS` | 1000 | gravity period in milliseconds |
//! | `TETRIS_SEED` | clock | RNG seed |
//! | `TETRIS_LOG_PATH` | unset | file that receives log output |
//!
//! Values that do not parse fall back to their defaults.

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::core::EngineConfig;
use crate::types::{
    DEFAULT_COLS, DEFAULT_ROWS, GRAVITY_INTERVAL_MS, LINE_CLEAR_BONUS, MAX_SHAPE_EXTENT,
};

/// Largest accepted grid extent. Keeps cell coordinates inside `i16` and the drawn
/// playfield width inside `u16`.
pub const MAX_GRID_EXTENT: u16 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub gravity_ms: u32,
    /// Fixed seed; None seeds from the clock
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gravity_ms: GRAVITY_INTERVAL_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            rows: parse_var(&lookup, "TETRIS_ROWS").unwrap_or(defaults.rows),
            cols: parse_var(&lookup, "TETRIS_COLS").unwrap_or(defaults.cols),
            gravity_ms: parse_var(&lookup, "TETRIS_GRAVITY_MS").unwrap_or(defaults.gravity_ms),
            seed: parse_var(&lookup, "TETRIS_SEED"),
            log_path,
        }
    }

    /// Reject grids that cannot hold every shape or exceed [`MAX_GRID_EXTENT`], and a
    /// zero gravity period.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows >= MAX_SHAPE_EXTENT && self.cols >= MAX_SHAPE_EXTENT,
            "grid must be at least {0}x{0}, got {1}x{2}",
            MAX_SHAPE_EXTENT,
            self.cols,
            self.rows
        );
        ensure!(
            self.rows <= MAX_GRID_EXTENT && self.cols <= MAX_GRID_EXTENT,
            "grid must be at most {0}x{0}, got {1}x{2}",
            MAX_GRID_EXTENT,
            self.cols,
            self.rows
        );
        ensure!(self.gravity_ms > 0, "gravity period must be positive");
        Ok(())
    }

    /// Configured seed, or one derived from the wall clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            rows: self.rows,
            cols: self.cols,
            gravity_interval: Duration::from_millis(self.gravity_ms as u64),
            line_clear_bonus: LINE_CLEAR_BONUS,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
