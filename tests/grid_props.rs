//! Property tests for row clearing.
//!
//! Random grids are cleared and compared against a plain "drop the full
//! rows, pad with empty rows on top" model.

use hanami::core::Grid;
use hanami::types::{Block, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
use proptest::prelude::*;

type Rows = Vec<[bool; FIELD_WIDTH as usize]>;

fn rows_strategy() -> impl Strategy<Value = Rows> {
    let row = prop_oneof![
        1 => Just([true; FIELD_WIDTH as usize]),
        3 => proptest::array::uniform10(any::<bool>()),
    ];
    proptest::collection::vec(row, FIELD_HEIGHT as usize)
}

fn build(rows: &Rows) -> Grid {
    let mut grid = Grid::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            if filled {
                let block = Block {
                    piece_id: (y * 16 + x) as u32,
                    kind: PieceKind::ALL[(x + y) % 7],
                    slot: 0,
                };
                grid.set(x as i8, y as i8, Some(block));
            }
        }
    }
    grid
}

fn collapse_model(rows: &Rows) -> Rows {
    let kept: Rows = rows
        .iter()
        .copied()
        .filter(|row| !row.iter().all(|&c| c))
        .collect();
    let mut out = vec![[false; FIELD_WIDTH as usize]; rows.len() - kept.len()];
    out.extend(kept);
    out
}

fn occupancy(grid: &Grid) -> Rows {
    (0..FIELD_HEIGHT as i8)
        .map(|y| {
            let mut row = [false; FIELD_WIDTH as usize];
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = grid.is_occupied(x as i8, y);
            }
            row
        })
        .collect()
}

proptest! {
    #[test]
    fn clearing_matches_collapse_model(rows in rows_strategy()) {
        let mut grid = build(&rows);
        let cleared = grid.clear_completed_rows();

        let expected_cleared: Vec<u8> = (0..FIELD_HEIGHT)
            .rev()
            .filter(|&y| rows[y as usize].iter().all(|&c| c))
            .collect();
        prop_assert_eq!(cleared.to_vec(), expected_cleared);
        prop_assert_eq!(occupancy(&grid), collapse_model(&rows));
    }

    #[test]
    fn reported_rows_were_full(rows in rows_strategy()) {
        let mut grid = build(&rows);
        for y in grid.clear_completed_rows() {
            prop_assert!(rows[y as usize].iter().all(|&c| c));
        }
    }

    #[test]
    fn surviving_blocks_keep_their_identity(rows in rows_strategy()) {
        let before = build(&rows);
        let mut after = before.clone();
        after.clear_completed_rows();

        let survivors = |grid: &Grid| {
            let mut ids: Vec<u32> = grid.cells().iter().flatten().map(|b| b.piece_id).collect();
            ids.sort_unstable();
            ids
        };
        let full_ids: Vec<u32> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|&c| c))
            .flat_map(|(y, _)| (0..FIELD_WIDTH as usize).map(move |x| (y * 16 + x) as u32))
            .collect();
        let mut expected: Vec<u32> = survivors(&before)
            .into_iter()
            .filter(|id| !full_ids.contains(id))
            .collect();
        expected.sort_unstable();

        prop_assert_eq!(survivors(&after), expected);
    }
}
