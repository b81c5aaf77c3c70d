//! Pieces module - the seven canonical templates
//!
//! Each template is a hand-laid 4x4 frame. Catalog order is I, J, L, O, S,
//! T, Z; [`random_shape`] returns an index into that order.

use crate::rng::RandomSource;
use crate::shape::Shape;
use crate::types::{Matrix, PieceKind, SHAPE_SIZE};

const N: usize = SHAPE_SIZE as usize;

/// Build a template from 0/1 rows (row 0 first)
const fn frame(rows: [[u8; N]; N]) -> Matrix {
    let mut out = [[false; N]; N];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < N {
            out[i][j] = rows[i][j] != 0;
            j += 1;
        }
        i += 1;
    }
    out
}

const I_FRAME: Matrix = frame([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_FRAME: Matrix = frame([[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]]);
const L_FRAME: Matrix = frame([[0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]]);
const O_FRAME: Matrix = frame([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]);
const S_FRAME: Matrix = frame([[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]]);
const T_FRAME: Matrix = frame([[0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]]);
const Z_FRAME: Matrix = frame([[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]);

/// All kinds in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

/// Spawn orientation of a piece kind
pub fn template(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => I_FRAME,
        PieceKind::J => J_FRAME,
        PieceKind::L => L_FRAME,
        PieceKind::O => O_FRAME,
        PieceKind::S => S_FRAME,
        PieceKind::T => T_FRAME,
        PieceKind::Z => Z_FRAME,
    }
}

/// Spawn orientation as a [`Shape`]
pub fn spawn_shape(kind: PieceKind) -> Shape {
    Shape::new(template(kind))
}

/// Uniformly pick a template index in `0..7`
pub fn random_shape<R: RandomSource + ?Sized>(rng: &mut R) -> usize {
    rng.next_below(ALL_KINDS.len() as u32) as usize
}

/// Uniformly pick a piece kind
pub fn random_kind<R: RandomSource + ?Sized>(rng: &mut R) -> PieceKind {
    ALL_KINDS[random_shape(rng)]
}
