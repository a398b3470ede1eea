//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and no I/O. Rendering and input live
//! in their own crates and talk to the engine through [`GameSession`]'s
//! command, tick and snapshot surface.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield with legality checks, lock-in and row clearing
//! - [`catalog`]: the seven piece shapes and their rotation states
//! - [`piece`]: the active piece and its move/rotate rules
//! - [`scoring`]: row points, level gate and fall rate
//! - [`rng`]: seeded uniform piece selection
//! - [`session`]: the level/spawn/lock loop
//! - [`snapshot`]: serializable per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Uniform spawns**: each piece kind is equally likely, draws are independent
//! - **No wall kicks**: a rotation that does not fit is ignored
//! - **Immediate lock**: a piece locks the moment a downward move is blocked
//! - **Scoring**: 50 for one row, `50 * (n - 1) * n` for `n` rows
//! - **Levels**: every 10 lines; a new level starts on an empty field
//! - **Game over**: any block in the top two rows between columns 1 and 5
//!
//! # Example
//!
//! ```
//! use hanami_core::{GameSession, SessionConfig};
//! use hanami_types::{GameAction, Phase};
//!
//! let mut game = GameSession::new(SessionConfig::new(12345).without_intro());
//! game.start();
//! assert_eq!(game.level(), 1);
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.grid().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) with the elapsed
//! milliseconds. The piece falls one row every `900 - 80 * level` ms.

pub mod catalog;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use hanami_types as types;

pub use catalog::{PieceCatalog, PieceDefinition, PieceShape, SPAWN_ANCHOR};
pub use grid::{ClearedRows, Grid};
pub use piece::ActivePiece;
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use scoring::{fall_interval_ms, fall_rate_ms, score_for_rows, should_level_up};
pub use session::{GameSession, SessionConfig};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
