//! Catalog and active piece tests

use hanami::core::{ActivePiece, Grid, PieceCatalog, PieceDefinition, SPAWN_ANCHOR};
use hanami::types::{Block, Direction, PieceKind};

fn spawn(kind: PieceKind) -> ActivePiece {
    ActivePiece::spawn(PieceCatalog::standard().get(kind), 1)
}

fn filler() -> Option<Block> {
    Some(Block {
        piece_id: 0,
        kind: PieceKind::I,
        slot: 0,
    })
}

#[test]
fn test_standard_catalog_rotation_counts() {
    let catalog = PieceCatalog::standard();
    let counts: Vec<(PieceKind, usize)> = catalog
        .iter()
        .map(|def| (def.kind(), def.rotations().len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (PieceKind::O, 1),
            (PieceKind::I, 2),
            (PieceKind::T, 4),
            (PieceKind::L, 4),
            (PieceKind::J, 4),
            (PieceKind::Z, 2),
            (PieceKind::S, 2),
        ]
    );
}

#[test]
fn test_every_piece_spawns_legally_on_empty_grid() {
    let grid = Grid::new();
    for def in PieceCatalog::standard().iter() {
        assert_eq!(def.initial(), SPAWN_ANCHOR);
        let piece = ActivePiece::spawn(def, 1);
        assert!(piece.is_legal(&grid), "{} spawn", def.kind().as_str());
        assert_eq!(piece.rotation_index(), 0);
    }
}

#[test]
fn test_rotation_cycles_through_all_states() {
    let grid = Grid::new();
    let mut piece = ActivePiece::with_placement(
        PieceCatalog::standard().get(PieceKind::T),
        1,
        (4, 8),
        0,
    );
    for expected in [1, 2, 3, 0] {
        assert!(piece.rotate(&grid));
        assert_eq!(piece.rotation_index(), expected);
    }
    assert_eq!(piece.anchor(), (4, 8));
}

#[test]
fn test_single_state_piece_rotates_in_place() {
    let grid = Grid::new();
    let mut piece = spawn(PieceKind::O);
    let before = piece.cells();
    assert!(piece.rotate(&grid));
    assert_eq!(piece.rotation_index(), 0);
    assert_eq!(piece.cells(), before);
}

#[test]
fn test_illegal_rotation_is_a_noop() {
    let mut grid = Grid::new();
    // The vertical I would cover (2, 2).
    grid.set(2, 2, filler());
    let mut piece = spawn(PieceKind::I);
    let before = piece.clone();

    assert!(!piece.rotate(&grid));
    assert_eq!(piece, before);
}

#[test]
fn test_rotation_against_wall_has_no_kick() {
    let grid = Grid::new();
    // Vertical I against the right wall; the horizontal state would stick out.
    let mut piece = ActivePiece::with_placement(
        PieceCatalog::standard().get(PieceKind::I),
        1,
        (9, 5),
        1,
    );
    assert!(piece.is_legal(&grid));
    assert!(!piece.rotate(&grid));
    assert_eq!(piece.rotation_index(), 1);
    assert_eq!(piece.anchor(), (9, 5));
}

#[test]
fn test_shift_stops_at_walls() {
    let grid = Grid::new();
    let mut piece = spawn(PieceKind::O);

    let mut lefts = 0;
    while piece.shift(&grid, Direction::Left) {
        lefts += 1;
    }
    assert_eq!(lefts, 2);
    assert_eq!(piece.anchor(), (0, 0));

    let mut rights = 0;
    while piece.shift(&grid, Direction::Right) {
        rights += 1;
    }
    assert_eq!(rights, 8);
    assert_eq!(piece.anchor(), (8, 0));
}

#[test]
fn test_drop_to_floor_and_landing_anchor_agree() {
    let mut grid = Grid::new();
    grid.set(3, 12, filler());
    let piece = spawn(PieceKind::O);

    let landing = piece.landing_anchor(&grid);
    let mut dropped = piece.clone();
    let rows = dropped.drop_to_floor(&grid);

    assert_eq!(landing, (2, 10));
    assert_eq!(dropped.anchor(), landing);
    assert_eq!(rows, 10);
    // Probing leaves the piece where it was.
    assert_eq!(piece.anchor(), SPAWN_ANCHOR);
}

#[test]
fn test_lock_into_writes_piece_blocks() {
    let mut grid = Grid::new();
    let mut piece = ActivePiece::spawn(PieceCatalog::standard().get(PieceKind::S), 42);
    piece.drop_to_floor(&grid);
    let cells = piece.cells();
    piece.lock_into(&mut grid);

    for (slot, (x, y)) in cells.into_iter().enumerate() {
        let block = grid.get(x, y).flatten().expect("locked cell");
        assert_eq!(block.piece_id, 42);
        assert_eq!(block.kind, PieceKind::S);
        assert_eq!(block.slot as usize, slot);
    }
}

#[test]
fn test_custom_definition_shape_wraps_index() {
    let def = PieceDefinition::new(
        PieceKind::I,
        (0, 0),
        vec![[(0, 0), (1, 0), (2, 0), (3, 0)]],
    );
    assert_eq!(def.shape(0), def.shape(5));
}
