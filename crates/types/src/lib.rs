//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Both dimensions are
//! configurable at startup, but never change once a grid exists.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 1000 | One gravity tick per second |
//! | `FRAME_MS` | 16 | Event loop frame (~60 FPS) |
//! | `LINE_CLEAR_BONUS` | 100 | Score per cleared row |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{ShapeKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(ShapeKind::ALL.len(), 5);
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = 20;

/// Gravity period in milliseconds (1 row per second)
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Event loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded for every fully occupied row that is removed
pub const LINE_CLEAR_BONUS: u32 = 100;

/// Largest extent of any shape in either axis, in every rotation
pub const MAX_SHAPE_EXTENT: u16 = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Settled block, painted with the color of the piece that locked there
pub type Cell = Option<Rgb>;

/// The five shape variants
///
/// The set deliberately has five members; there is no T or Z variant.
/// - **I**: four-wide bar
/// - **O**: 2x2 square
/// - **S**: three-wide bar with a nub under its centre
/// - **J**: three-wide bar with a nub under its left end
/// - **L**: three-wide bar with a nub under its right end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    S,
    J,
    L,
}

impl ShapeKind {
    /// Every variant, in spawn-table order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Game actions that can be applied to the engine
///
/// Keyboard input is mapped onto these before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down (same as a gravity tick)
    MoveDown,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Pause or resume gravity and movement
    TogglePause,
}
