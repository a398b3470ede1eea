//! Terminal rendering for Hanami.
//!
//! Rendering is split in two: [`GameView`] draws a [`core::GameSnapshot`]
//! into a plain [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`]
//! flushes that buffer to the terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use hanami_core as core;
pub use hanami_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
