//! Shape module - fixed 4x4 occupancy matrix
//!
//! Every piece orientation is stored in the same 4x4 frame. Rotation never
//! resizes or re-centers the frame, so asymmetric pieces may drift inside it
//! after a turn.

use arrayvec::ArrayVec;

use crate::types::{Matrix, SHAPE_SIZE};

const N: usize = SHAPE_SIZE as usize;

/// Occupied cells of a shape as `(row, col)` offsets inside the frame
pub type ShapeCells = ArrayVec<(i8, i8), { N * N }>;

/// One orientation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    matrix: Matrix,
}

impl Shape {
    pub const fn new(matrix: Matrix) -> Self {
        Self { matrix }
    }

    /// Read-only access to the current occupancy
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Rotate 90° clockwise in place: transpose, then reverse every row.
    pub fn rotate(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let upper = self.matrix[i][j];
                self.matrix[i][j] = self.matrix[j][i];
                self.matrix[j][i] = upper;
            }
        }

        for row in &mut self.matrix {
            row.reverse();
        }
    }

    /// Copy of this shape rotated once clockwise
    pub fn rotated(&self) -> Self {
        let mut next = *self;
        next.rotate();
        next
    }

    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < N && col < N && self.matrix[row][col]
    }

    /// Occupied `(row, col)` offsets in row-major order.
    ///
    /// Stack-only; padding cells are skipped.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &filled) in row.iter().enumerate() {
                if filled {
                    out.push((i as i8, j as i8));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: [&str; N]) -> Shape {
        let mut matrix = [[false; N]; N];
        for (i, row) in rows.iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                matrix[i][j] = ch == '#';
            }
        }
        Shape::new(matrix)
    }

    #[test]
    fn test_rotate_horizontal_bar_becomes_vertical() {
        let mut bar = from_rows(["....", "####", "....", "...."]);
        bar.rotate();
        assert_eq!(bar, from_rows(["..#.", "..#.", "..#.", "..#."]));
    }

    #[test]
    fn test_rotate_is_transpose_then_row_reverse() {
        // Single marker cell tracks the exact permutation: (r, c) -> (c, N-1-r)
        for r in 0..N {
            for c in 0..N {
                let mut matrix = [[false; N]; N];
                matrix[r][c] = true;
                let rotated = Shape::new(matrix).rotated();
                assert!(rotated.is_occupied(c, N - 1 - r), "({}, {})", r, c);
                assert_eq!(rotated.cells().len(), 1);
            }
        }
    }

    #[test]
    fn test_rotated_does_not_mutate_receiver() {
        let shape = from_rows(["....", "#...", "###.", "...."]);
        let before = shape;
        let _ = shape.rotated();
        assert_eq!(shape, before);
    }

    #[test]
    fn test_cells_row_major() {
        let shape = from_rows(["....", ".#..", "###.", "...."]);
        let cells = shape.cells();
        assert_eq!(cells.as_slice(), &[(1, 1), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_is_occupied_out_of_frame() {
        let shape = from_rows(["####", "####", "####", "####"]);
        assert!(shape.is_occupied(3, 3));
        assert!(!shape.is_occupied(4, 0));
        assert!(!shape.is_occupied(0, 4));
    }
}
