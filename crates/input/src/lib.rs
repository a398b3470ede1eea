//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. It
//! holds no state: key repeat comes from the terminal, and every press
//! becomes exactly one command.

pub mod map;

pub use hanami_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
