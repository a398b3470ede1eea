//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and conversion,
//! so they can be shared by the engine, the terminal front-end and tests.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end frame cadence (~60 FPS) |
//! | `BASE_FALL_MS` | 900 | Fall interval at level 0 |
//! | `FALL_STEP_MS` | 80 | Interval reduction per level |
//! | `FIRST_LEVEL_INTRO_MS` | 5000 | Intro pause before level 1 |
//! | `LEVEL_INTRO_MS` | 2000 | Intro pause before later levels |
//!
//! # Examples
//!
//! ```
//! use hanami_types::{Direction, GameAction, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval at level 0
pub const BASE_FALL_MS: i64 = 900;

/// Fall interval reduction per level
pub const FALL_STEP_MS: i64 = 80;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for a single cleared row
pub const SCORE_UNIT: u32 = 50;

/// Intro pause shown before the first level
pub const FIRST_LEVEL_INTRO_MS: u32 = 5000;

/// Intro pause shown before every later level
pub const LEVEL_INTRO_MS: u32 = 2000;

/// Leftmost column (inclusive) of the game-over band
pub const GAME_OVER_BAND_LEFT: u8 = 1;

/// Rightmost column (inclusive) of the game-over band
pub const GAME_OVER_BAND_RIGHT: u8 = 5;

/// Number of rows, counted from the top, inspected by the game-over check
pub const GAME_OVER_BAND_ROWS: u8 = 2;

/// The seven piece kinds, in the order the randomizer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    O,
    I,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use hanami_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }

    /// Compact non-zero code used by grid snapshots (0 means empty).
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Direction of a single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// Anchor offset `(dx, dy)` for this direction (y grows downward).
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands accepted from an input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Advance to the next rotation state
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks when blocked)
    MoveDown,
    /// Move down until blocked, then lock
    HardDrop,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// ```
    /// use hanami_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(GameAction::Rotate),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::HardDrop => "hardDrop",
        }
    }

    /// The move direction, if this action is a single-cell move.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Rotate | GameAction::HardDrop => None,
        }
    }
}

/// A locked block.
///
/// Each piece owns four blocks; `slot` ties a block to the offset index it
/// occupied in the piece's rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub piece_id: u32,
    pub kind: PieceKind,
    pub slot: u8,
}

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(Block)`: Cell holds exactly one locked block
pub type Cell = Option<Block>;

/// Observable session phase.
///
/// Spawning and locking happen synchronously inside the command or tick that
/// triggers them, so they are never observed from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "phase")]
pub enum Phase {
    /// Constructed but not started yet.
    Ready,
    /// Pause before a level starts; no piece is active.
    LevelIntro { level: u32, remaining_ms: u32 },
    /// A piece is falling.
    Falling,
    /// Terminal phase; the session must be recreated to play again.
    GameOver,
}

/// Events emitted by the session for a UI layer to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "event")]
pub enum GameEvent {
    PieceSpawned { kind: PieceKind, piece_id: u32 },
    PieceLocked { kind: PieceKind, piece_id: u32 },
    /// Row indices as they were before the collapse, bottom to top.
    RowsCleared { rows: Vec<u8> },
    LevelChanged { level: u32 },
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_round_trip_through_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::from_str("up"), None);
    }

    #[test]
    fn action_directions() {
        assert_eq!(GameAction::MoveDown.direction(), Some(Direction::Down));
        assert_eq!(GameAction::Rotate.direction(), None);
        assert_eq!(GameAction::HardDrop.direction(), None);
        assert_eq!(
            GameAction::from_str(GameAction::MoveRight.as_str()),
            Some(GameAction::MoveRight)
        );
    }

    #[test]
    fn game_over_band_is_asymmetric_to_spawn() {
        assert_eq!(GAME_OVER_BAND_LEFT, 1);
        assert_eq!(GAME_OVER_BAND_RIGHT, 5);
        assert_eq!(GAME_OVER_BAND_ROWS, 2);
    }
}
