//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids widget
//! libraries and instead renders into a simple framebuffer that is flushed to the
//! terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::{acknowledgment, Acknowledgment, TermFrontend};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, RenderStats, TerminalRenderer};
