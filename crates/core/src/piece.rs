//! Active piece: a shape plus the board position of its frame's top-left cell.

use crate::pieces::spawn_shape;
use crate::shape::Shape;
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i8,
    y: i8,
}

impl Piece {
    /// Piece of `kind` in spawn orientation at `(x, y)`
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            x,
            y,
        }
    }

    /// Piece of `kind` at the spawn point
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Commit a position that has already been validated
    pub fn set_position(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }

    pub fn rotate(&mut self) {
        self.shape.rotate();
    }

    /// Same kind and position with a different orientation
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Board coordinates `(x, y)` of every occupied cell if the frame sat at `(x, y)`.
    ///
    /// Coordinates saturate at the `i8` limits, which are always off the board.
    pub fn cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> {
        self.shape
            .cells()
            .into_iter()
            .map(move |(row, col)| (x.saturating_add(col), y.saturating_add(row)))
    }
}
