//! Active piece - the falling piece and its movement rules
//!
//! Every mutation is checked against the grid first and either commits fully
//! or leaves the piece untouched. There are no wall kicks: an illegal
//! rotation is simply ignored.

use std::sync::Arc;

use crate::catalog::{PieceDefinition, PieceShape};
use crate::grid::{offset_cell, Grid};
use crate::types::{Block, Direction, PieceKind, FIELD_HEIGHT};

/// The piece currently controlled by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    piece_id: u32,
    anchor: (i8, i8),
    rotation_index: usize,
    rotations: Arc<[PieceShape]>,
}

impl ActivePiece {
    /// Create a piece at its definition's initial anchor in rotation state 0.
    ///
    /// Legality is not checked; the session decides what happens when the
    /// spawn area is blocked.
    pub fn spawn(definition: &PieceDefinition, piece_id: u32) -> Self {
        Self::with_placement(definition, piece_id, definition.initial(), 0)
    }

    /// Create a piece at an explicit anchor and rotation state.
    ///
    /// # Panics
    ///
    /// Panics if `rotation_index` is outside the definition's rotation list.
    pub fn with_placement(
        definition: &PieceDefinition,
        piece_id: u32,
        anchor: (i8, i8),
        rotation_index: usize,
    ) -> Self {
        let rotations = Arc::clone(definition.rotations());
        assert!(
            rotation_index < rotations.len(),
            "rotation index {} out of range for piece {} ({} states)",
            rotation_index,
            definition.kind().as_str(),
            rotations.len()
        );
        Self {
            kind: definition.kind(),
            piece_id,
            anchor,
            rotation_index,
            rotations,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn anchor(&self) -> (i8, i8) {
        self.anchor
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation_index
    }

    /// Offsets of the current rotation state
    pub fn shape(&self) -> &PieceShape {
        &self.rotations[self.rotation_index]
    }

    /// Absolute cells, in block slot order
    pub fn cells(&self) -> [(i8, i8); 4] {
        let (x, y) = self.anchor;
        self.shape()
            .map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// The four block identities, slot `i` tied to offset `i`.
    pub fn blocks(&self) -> [Block; 4] {
        [0u8, 1, 2, 3].map(|slot| Block {
            piece_id: self.piece_id,
            kind: self.kind,
            slot,
        })
    }

    pub fn is_legal(&self, grid: &Grid) -> bool {
        grid.is_legal(self.anchor, self.shape())
    }

    /// Advance to the next rotation state if it fits where the piece is.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let next = (self.rotation_index + 1) % self.rotations.len();
        if !grid.is_legal(self.anchor, &self.rotations[next]) {
            return false;
        }
        self.rotation_index = next;
        true
    }

    /// Move one cell in `direction` if the target position is legal.
    ///
    /// A `false` result for [`Direction::Down`] means the piece has landed.
    pub fn shift(&mut self, grid: &Grid, direction: Direction) -> bool {
        match offset_cell(self.anchor, direction.delta()) {
            Some(candidate) if grid.is_legal(candidate, self.shape()) => {
                self.anchor = candidate;
                true
            }
            _ => false,
        }
    }

    /// Move down until blocked. Returns the number of rows travelled.
    pub fn drop_to_floor(&mut self, grid: &Grid) -> u8 {
        let mut rows = 0u8;
        // Bounded by the field height: each step moves one row down.
        while rows < FIELD_HEIGHT && self.shift(grid, Direction::Down) {
            rows += 1;
        }
        rows
    }

    /// Anchor the piece would land on if dropped now.
    pub fn landing_anchor(&self, grid: &Grid) -> (i8, i8) {
        let mut probe = self.clone();
        probe.drop_to_floor(grid);
        probe.anchor
    }

    /// Turn the piece into locked grid blocks.
    ///
    /// Consumes the piece so nothing can move it afterwards.
    pub fn lock_into(self, grid: &mut Grid) {
        grid.lock(self.anchor, self.shape(), &self.blocks());
    }
}
