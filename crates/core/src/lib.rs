//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole gameplay engine. It has **no dependencies** on a
//! terminal, a clock, or a global random source:
//!
//! - **Deterministic**: randomness is injected through [`RandomSource`]
//! - **Clock-free**: gravity is a repeating timer obtained from a [`Scheduler`]
//! - **Headless**: drawing and game-over notification go through [`Frontend`]
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size playfield with collision checks and row clearing
//! - [`shape`]: the five occupancy patterns and 90° rotation
//! - [`piece`]: the falling piece and its spawn placement
//! - [`rng`]: seedable LCG plus shape/color selection
//! - [`scheduler`]: cancellable repeating timers for gravity
//! - [`frontend`]: render/notification hook and the [`Frame`] it receives
//! - [`engine`]: [`GameEngine`], which owns all of the above
//!
//! # Game Rules
//!
//! - Five shapes (I, O, S, J, L), chosen uniformly, each with a random color
//! - Pieces spawn on row 0, centered horizontally
//! - Moves and rotations that would collide are simply rejected (no wall kicks)
//! - A piece that cannot fall locks; every full row scores a fixed 100 points
//! - A piece that collides on spawn ends the round; the next round starts at once
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{
//!     EngineConfig, GameEngine, IntervalScheduler, RecordingFrontend, SimpleRng,
//! };
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameEngine::new(
//!     EngineConfig::default(),
//!     RecordingFrontend::new(),
//!     SimpleRng::new(12345),
//!     IntervalScheduler::new(),
//! );
//! game.start();
//!
//! game.apply(GameAction::MoveLeft);
//! game.apply(GameAction::RotateCw);
//!
//! // One frame for start, one per action.
//! assert_eq!(game.frontend().draws, 3);
//! assert_eq!(game.score(), 0);
//! ```

pub mod engine;
pub mod frontend;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod shape;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{EngineConfig, GameEngine};
pub use frontend::{Frame, Frontend, RecordingFrontend};
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{random_color, random_shape_kind, RandomSource, SimpleRng};
pub use scheduler::{IntervalScheduler, Scheduler, TimerId};
pub use shape::Shape;
