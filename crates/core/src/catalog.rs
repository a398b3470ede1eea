//! Catalog module - piece shapes, initial anchors and rotation states
//!
//! Offsets are zero-based `(dx, dy)` pairs added to the anchor, with y
//! growing downward. Rotation states cycle in the listed order; pieces may
//! have fewer than four distinct states (O has one, I/S/Z have two).

use std::sync::Arc;

use crate::types::PieceKind;

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// One rotation state - 4 block offsets from the anchor
pub type PieceShape = [BlockOffset; 4];

/// Anchor every standard piece spawns at
pub const SPAWN_ANCHOR: (i8, i8) = (2, 0);

const O_ROTATIONS: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const I_ROTATIONS: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const T_ROTATIONS: [PieceShape; 4] = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 1), (2, 0), (2, 1), (2, 2)],
    [(1, 1), (0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
];

const L_ROTATIONS: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
];

const J_ROTATIONS: [PieceShape; 4] = [
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 0), (0, 2)],
];

const Z_ROTATIONS: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (0, 1), (0, 2)],
];

const S_ROTATIONS: [PieceShape; 2] = [
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

/// Static description of one piece kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDefinition {
    kind: PieceKind,
    initial: (i8, i8),
    rotations: Arc<[PieceShape]>,
}

impl PieceDefinition {
    /// # Panics
    ///
    /// Panics if `rotations` is empty.
    pub fn new(kind: PieceKind, initial: (i8, i8), rotations: Vec<PieceShape>) -> Self {
        assert!(
            !rotations.is_empty(),
            "piece {} needs at least one rotation state",
            kind.as_str()
        );
        Self {
            kind,
            initial,
            rotations: rotations.into(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn initial(&self) -> (i8, i8) {
        self.initial
    }

    pub fn rotations(&self) -> &Arc<[PieceShape]> {
        &self.rotations
    }

    /// Offsets of rotation state `index`, wrapping cyclically.
    pub fn shape(&self, index: usize) -> &PieceShape {
        &self.rotations[index % self.rotations.len()]
    }
}

/// Immutable set of the seven piece definitions, injected into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    definitions: [PieceDefinition; 7],
}

impl PieceCatalog {
    /// Build a catalog from definitions ordered like [`PieceKind::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if a definition is out of order.
    pub fn new(definitions: [PieceDefinition; 7]) -> Self {
        for (def, kind) in definitions.iter().zip(PieceKind::ALL) {
            assert_eq!(def.kind, kind, "catalog entries must follow PieceKind::ALL");
        }
        Self { definitions }
    }

    /// The standard shape set.
    pub fn standard() -> Self {
        let def = |kind, rotations: &[PieceShape]| PieceDefinition {
            kind,
            initial: SPAWN_ANCHOR,
            rotations: Arc::from(rotations),
        };

        Self::new([
            def(PieceKind::O, &O_ROTATIONS),
            def(PieceKind::I, &I_ROTATIONS),
            def(PieceKind::T, &T_ROTATIONS),
            def(PieceKind::L, &L_ROTATIONS),
            def(PieceKind::J, &J_ROTATIONS),
            def(PieceKind::Z, &Z_ROTATIONS),
            def(PieceKind::S, &S_ROTATIONS),
        ])
    }

    pub fn get(&self, kind: PieceKind) -> &PieceDefinition {
        &self.definitions[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PieceDefinition> {
        self.definitions.iter()
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
