//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or occupied.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
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

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Check whether `piece`, with its frame at `(x, y)`, fits.
    ///
    /// Only occupied shape cells are tested; padding may hang over the edge
    /// or overlap settled cells.
    pub fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece.cells_at(x, y).all(|(bx, by)| self.is_free(bx, by))
    }

    /// Write every occupied cell of `piece` at `(x, y)` into the grid.
    ///
    /// Performs no validation: call [`Board::can_place`] first. Cells that
    /// would land outside the grid are skipped rather than addressed.
    pub fn place(&mut self, piece: &Piece, x: i8, y: i8) {
        for (bx, by) in piece.cells_at(x, y) {
            self.set(bx, by, true);
        }
    }

    /// Move `piece` to `(x, y)` only if it fits there.
    pub fn try_move(&self, piece: &mut Piece, x: i8, y: i8) -> bool {
        if self.can_place(piece, x, y) {
            piece.set_position(x, y);
            return true;
        }
        false
    }

    /// Check if a row is completely filled
    pub fn is_line_complete(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&cell| cell)
    }

    /// Remove `row` and shift every row above it down by one.
    /// Row 0 becomes empty.
    pub fn clear_line(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * WIDTH;
            self.cells.copy_within(src_start..src_start + WIDTH, r * WIDTH);
        }

        self.cells[..WIDTH].fill(false);
    }

    /// Clear every complete row and return how many were removed.
    ///
    /// Single pass, top to bottom. A clear only moves rows above the scan
    /// index, so rows below it are never disturbed and no row needs a second
    /// look.
    pub fn clear_complete_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..HEIGHT {
            if self.is_line_complete(row) {
                self.clear_line(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Write occupancy as 0/1 into a fixed grid (snapshot helper)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = u8::from(s);
            }
        }
    }

    /// Fill an entire row (test and setup helper)
    pub fn fill_row(&mut self, row: usize) {
        if row < HEIGHT {
            self.cells[row * WIDTH..(row + 1) * WIDTH].fill(true);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows ('#' occupied, anything else empty).
    ///
    /// Rows are aligned to the bottom of the grid, so a short picture
    /// describes the stack; missing columns are empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                if ch == '#' {
                    board.cells[(offset + i) * WIDTH + x] = true;
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_padding_may_hang_off_the_left_edge() {
        // Vertical I occupies only frame column 2; columns 0..=1 are padding.
        let board = Board::new();
        let mut vertical = Piece::spawn(PieceKind::I);
        vertical.rotate();
        assert!(board.can_place(&vertical, -2, 0));
        assert!(!board.can_place(&vertical, -3, 0));
    }

    #[test]
    fn test_padding_may_overlap_settled_cells() {
        let mut board = Board::new();
        // O occupies frame columns 1..=2, rows 1..=2; frame (0,0) is padding.
        board.set(3, 0, true);
        let piece = Piece::spawn(PieceKind::O);
        assert!(board.can_place(&piece, 3, 0));
        board.set(4, 1, true);
        assert!(!board.can_place(&piece, 3, 0));
    }

    #[test]
    fn test_place_marks_only_occupied_cells() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::S);
        board.place(&piece, 3, 0);
        assert_eq!(board.occupied_count(), 4);
        assert!(board.is_occupied(4, 1));
        assert!(board.is_occupied(5, 1));
        assert!(board.is_occupied(3, 2));
        assert!(board.is_occupied(4, 2));
    }

    #[test]
    fn test_try_move_rejects_without_touching_piece() {
        let board = Board::from_rows(&["##########"]);
        let mut piece = Piece::new(PieceKind::O, 3, 15);
        assert!(board.try_move(&mut piece, 3, 16));
        assert!(!board.try_move(&mut piece, 3, 17));
        assert_eq!(piece.position(), (3, 16));
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(2, 19, true);
        let mut grid = [[9u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][2], 1);
        assert_eq!(grid[19][3], 0);
        assert_eq!(grid[0][0], 0);
    }

    #[test]
    fn test_from_rows_bottom_aligned() {
        let board = Board::from_rows(&["#.........", "##########"]);
        assert!(board.is_occupied(0, 18));
        assert!(!board.is_occupied(1, 18));
        assert!(board.is_line_complete(19));
        assert_eq!(board.occupied_count(), 11);
    }
}
