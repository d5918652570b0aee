//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfall::{core,input,term,types}` and
//! provides the environment-driven [`config::GameConfig`] and the event loop's
//! [`clock::FrameClock`] used by the binary.

pub mod clock;
pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
