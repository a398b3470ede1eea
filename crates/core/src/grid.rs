//! Grid module - the playfield occupancy matrix
//!
//! The grid is a 10x20 field where each cell is empty or holds one locked block.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::catalog::PieceShape;
use crate::types::{
    Block, Cell, FIELD_HEIGHT, FIELD_WIDTH, GAME_OVER_BAND_LEFT, GAME_OVER_BAND_RIGHT,
    GAME_OVER_BAND_ROWS,
};

/// Total number of cells on the grid
const GRID_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Row indices removed by one clear, bottom to top.
pub type ClearedRows = ArrayVec<u8, { FIELD_HEIGHT as usize }>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is inside the field and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a piece with `shape` may rest at `anchor`.
    ///
    /// Rejects any cell left of column 0, right of column 9, below row 19,
    /// above row 0, or already occupied. A cell whose coordinates overflow
    /// `i8` counts as off the field.
    pub fn is_legal(&self, anchor: (i8, i8), shape: &PieceShape) -> bool {
        shape.iter().all(|&offset| {
            offset_cell(anchor, offset).is_some_and(|(x, y)| self.is_free(x, y))
        })
    }

    /// Write a piece's blocks into their cells.
    ///
    /// `blocks[i]` lands on `anchor + shape[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the position is not legal. Callers check legality first;
    /// locking onto an occupied or out-of-bounds cell would break the
    /// one-block-per-cell invariant.
    pub fn lock(&mut self, anchor: (i8, i8), shape: &PieceShape, blocks: &[Block; 4]) {
        assert!(
            self.is_legal(anchor, shape),
            "lock at {:?} overlaps the field boundary or a locked block",
            anchor
        );

        for (&offset, &block) in shape.iter().zip(blocks.iter()) {
            if let Some((x, y)) = offset_cell(anchor, offset) {
                self.set(x, y, Some(block));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = y * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every complete row and let the rows above fall.
    ///
    /// Complete rows are detected before anything moves. Each surviving row
    /// drops by the number of removed rows below it. Returns the removed
    /// row indices (pre-collapse), bottom to top.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in (0..FIELD_HEIGHT as usize).rev() {
            if self.is_row_complete(y) {
                cleared.push(y as u8);
            }
        }
        if cleared.is_empty() {
            return cleared;
        }

        // Two-pointer compaction from the bottom.
        let width = FIELD_WIDTH as usize;
        let mut write_y = FIELD_HEIGHT as usize;
        for read_y in (0..FIELD_HEIGHT as usize).rev() {
            if cleared.contains(&(read_y as u8)) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Heuristic "spawn area blocked" check.
    ///
    /// True when any cell in the top two rows between columns 1 and 5
    /// (inclusive) is occupied. This band is deliberately offset from the
    /// spawn columns.
    pub fn is_game_over(&self) -> bool {
        (0..GAME_OVER_BAND_ROWS as i8).any(|y| {
            (GAME_OVER_BAND_LEFT as i8..=GAME_OVER_BAND_RIGHT as i8)
                .any(|x| self.is_occupied(x, y))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Encode occupancy as piece codes (0 = empty) for renderers.
    pub fn write_u8_grid(
        &self,
        out: &mut [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    ) {
        let width = FIELD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * width + x]
                    .map(|block| block.kind.code())
                    .unwrap_or(0);
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// `anchor + offset`, or `None` when either coordinate overflows.
pub(crate) fn offset_cell(anchor: (i8, i8), offset: (i8, i8)) -> Option<(i8, i8)> {
    Some((anchor.0.checked_add(offset.0)?, anchor.1.checked_add(offset.1)?))
}
