//! Frontend hook - what the engine tells the outside world.
//!
//! The engine calls [`Frontend::draw`] exactly once after every operation that can
//! change what the player sees, and [`Frontend::game_over`] when a fresh piece has
//! nowhere to go. Implementations only get shared borrows of engine state.

use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Read-only view of everything a renderer needs
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub active: Option<&'a ActivePiece>,
    pub score: u32,
    pub paused: bool,
}

/// Render surface and player notification
pub trait Frontend {
    /// Redraw everything from `frame`.
    fn draw(&mut self, frame: &Frame<'_>);

    /// Tell the player the round ended with `final_score`.
    ///
    /// The engine resets the round as soon as this returns, so implementations
    /// that need acknowledgment must block until they have it.
    fn game_over(&mut self, final_score: u32);
}

/// Headless frontend that records what it was asked to show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFrontend {
    /// Number of `draw` calls
    pub draws: usize,
    /// Score carried by the most recent frame
    pub last_score: u32,
    /// Pause flag carried by the most recent frame
    pub last_paused: bool,
    /// Filled grid cells in the most recent frame
    pub last_filled: usize,
    /// Final scores passed to `game_over`, oldest first
    pub game_overs: Vec<u32>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontend for RecordingFrontend {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.draws += 1;
        self.last_score = frame.score;
        self.last_paused = frame.paused;
        self.last_filled = frame.grid.filled_count();
    }

    fn game_over(&mut self, final_score: u32) {
        self.game_overs.push(final_score);
    }
}
