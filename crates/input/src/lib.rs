//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm`'s event types.
//! It maps key events into [`crate::types::GameAction`] and recognises the quit chord.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_key_down, should_quit};
