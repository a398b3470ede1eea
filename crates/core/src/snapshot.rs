use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{Phase, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub piece_id: u32,
    pub anchor: (i8, i8),
    pub rotation_index: usize,
    pub cells: [(i8, i8); 4],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            piece_id: value.piece_id(),
            anchor: value.anchor(),
            rotation_index: value.rotation_index(),
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `grid` holds [`PieceKind::code`] values, 0 for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub grid: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub landing: Option<[(i8, i8); 4]>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&code| PieceKind::from_code(code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            landing: None,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: 0,
            fall_interval_ms: 0,
        }
    }
}
