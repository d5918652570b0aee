//! Game engine - owns the complete game state
//!
//! This module ties together the grid, the falling piece, randomness, the gravity
//! timer and the frontend hook. Every public operation runs to completion and then
//! asks the frontend to redraw once.
//!
//! Nothing here reports errors: a move that would collide is reverted, and a piece
//! that collides the moment it spawns ends the round, which is announced to the
//! player and followed by an automatic reset.

use std::time::Duration;

use log::{debug, error, info};

use crate::frontend::{Frame, Frontend};
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{random_color, random_shape_kind, RandomSource, SimpleRng};
use crate::scheduler::{IntervalScheduler, Scheduler, TimerId};
use crate::shape::Shape;
use crate::types::*;

/// Fixed parameters of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: u16,
    pub cols: u16,
    /// Period of the gravity timer
    pub gravity_interval: Duration,
    /// Points per removed row
    pub line_clear_bonus: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gravity_interval: Duration::from_millis(GRAVITY_INTERVAL_MS as u64),
            line_clear_bonus: LINE_CLEAR_BONUS,
        }
    }
}

/// Complete game state plus its collaborators
#[derive(Debug)]
pub struct GameEngine<F, R = SimpleRng, S = IntervalScheduler> {
    config: EngineConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
    paused: bool,
    /// Rounds ended by a game over
    rounds_finished: u64,
    /// The one live gravity timer, if gravity is running
    gravity: Option<TimerId>,
    frontend: F,
    rng: R,
    scheduler: S,
}

impl<F: Frontend, R: RandomSource, S: Scheduler> GameEngine<F, R, S> {
    /// Create an engine with an empty grid and no piece.
    ///
    /// Call [`GameEngine::start`] to spawn the first piece and start gravity.
    pub fn new(config: EngineConfig, frontend: F, rng: R, scheduler: S) -> Self {
        Self {
            config,
            grid: Grid::new(config.rows, config.cols),
            active: None,
            score: 0,
            paused: false,
            rounds_finished: 0,
            gravity: None,
            frontend,
            rng,
            scheduler,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Replace the falling piece (scripted setups)
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of game overs so far.
    ///
    /// A change tells a driver that a new round (and a fresh gravity timer) began
    /// during its last call into the engine.
    pub fn rounds_finished(&self) -> u64 {
        self.rounds_finished
    }

    /// Handle of the live gravity timer
    pub fn gravity_timer(&self) -> Option<TimerId> {
        self.gravity
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Spawn the first piece, start gravity and draw the opening frame
    pub fn start(&mut self) {
        info!(
            "starting game on a {}x{} grid, gravity every {:?}",
            self.config.cols, self.config.rows, self.config.gravity_interval
        );
        self.spawn_piece();
        self.resume_gravity();
        self.draw();
    }

    /// Dispatch one input action.
    ///
    /// Pause toggling is always honoured; every other action is dropped while paused.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::TogglePause => self.toggle_pause(),
            _ if self.paused => {}
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::RotateCw => self.rotate_piece(true),
            GameAction::RotateCcw => self.rotate_piece(false),
        }
    }

    /// Gravity timer callback
    pub fn gravity_tick(&mut self) {
        self.move_down();
    }

    /// Draw the current state without changing it (e.g. after a terminal resize)
    pub fn redraw(&mut self) {
        self.draw();
    }

    /// Advance the piece one row; lock it if it cannot move.
    ///
    /// Locking merges the piece into the grid, removes full rows (scoring each one)
    /// and spawns the next piece.
    pub fn move_down(&mut self) {
        if !self.paused {
            if let Some(mut piece) = self.active {
                piece.y += 1;
                if self.grid.collides(&piece.shape, piece.x, piece.y) {
                    self.lock_piece();
                    self.spawn_piece();
                } else {
                    self.active = Some(piece);
                }
            }
        }
        self.draw();
    }

    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i16) {
        if !self.paused {
            if let Some(mut piece) = self.active {
                piece.x += dx;
                if !self.grid.collides(&piece.shape, piece.x, piece.y) {
                    self.active = Some(piece);
                }
            }
        }
        self.draw();
    }

    /// Rotate 90° in place. A rotation that would collide is rejected; there are no kicks.
    pub fn rotate_piece(&mut self, clockwise: bool) {
        if !self.paused {
            if let Some(piece) = self.active {
                let rotated = piece.shape.rotate(clockwise);
                if !self.collision(Some(&rotated)) {
                    self.active = Some(ActivePiece {
                        shape: rotated,
                        ..piece
                    });
                }
            }
        }
        self.draw();
    }

    /// Would `candidate` (default: the active shape) collide at the active origin?
    ///
    /// False when there is no active piece.
    pub fn collision(&self, candidate: Option<&Shape>) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        let shape = candidate.unwrap_or(&active.shape);
        self.grid.collides(shape, active.x, active.y)
    }

    /// Spawn a random piece at the top; ends the round if it does not fit
    pub fn spawn_piece(&mut self) {
        let piece = self.roll_piece();
        debug!(
            "spawned {}x{} piece at column {}",
            piece.shape.width(),
            piece.shape.height(),
            piece.x
        );
        self.active = Some(piece);
        if self.collision(None) {
            self.game_over();
        }
    }

    /// Flip the pause flag, stopping or restarting gravity to match
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            info!("paused");
            self.pause_gravity();
        } else {
            info!("resumed");
            self.resume_gravity();
        }
        self.draw();
    }

    fn roll_piece(&mut self) -> ActivePiece {
        let kind = random_shape_kind(&mut self.rng);
        let color = random_color(&mut self.rng);
        ActivePiece::spawn(Shape::for_kind(kind), color, self.grid.cols())
    }

    /// Merge the active piece into the grid and score the rows it completes
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.grid.merge(&piece.shape, piece.x, piece.y, piece.color);

        let cleared = self.grid.clear_full_rows() as u32;
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(cleared.saturating_mul(self.config.line_clear_bonus));
            debug!("cleared {} row(s), score {}", cleared, self.score);
        } else {
            debug!("locked at ({}, {})", piece.x, piece.y);
        }
    }

    fn game_over(&mut self) {
        let final_score = self.score;
        info!("game over, final score {}", final_score);
        self.rounds_finished += 1;
        self.frontend.game_over(final_score);
        self.reset();
    }

    /// Start a new round: empty grid, zero score, fresh piece, gravity running
    fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.paused = false;

        let piece = self.roll_piece();
        if self.grid.collides(&piece.shape, piece.x, piece.y) {
            error!(
                "a {}x{} piece does not fit an empty {}x{} grid",
                piece.shape.width(),
                piece.shape.height(),
                self.config.cols,
                self.config.rows
            );
            self.active = None;
        } else {
            self.active = Some(piece);
        }

        self.resume_gravity();
    }

    fn pause_gravity(&mut self) {
        if let Some(id) = self.gravity.take() {
            self.scheduler.cancel(id);
        }
    }

    /// (Re)start gravity. Any live timer is cancelled first so at most one exists.
    fn resume_gravity(&mut self) {
        self.pause_gravity();
        self.gravity = Some(self.scheduler.schedule_repeating(self.config.gravity_interval));
    }

    fn draw(&mut self) {
        let frame = Frame {
            grid: &self.grid,
            active: self.active.as_ref(),
            score: self.score,
            paused: self.paused,
        };
        self.frontend.draw(&frame);
    }
}
