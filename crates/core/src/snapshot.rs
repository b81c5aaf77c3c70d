use serde::Serialize;

use crate::piece::Piece;
use crate::types::{
    EnginePhase, LockEvent, Matrix, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SHAPE_SIZE, SPAWN_X,
    SPAWN_Y,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub matrix: Matrix,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x(),
            y: value.y(),
            matrix: *value.shape().matrix(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            matrix: *value.shape().matrix(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub phase: EnginePhase,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub tick_count: u64,
    pub last_event: Option<LockEvent>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.phase.is_terminal()
    }

    /// Occupancy of board cell `(x, y)` with the active piece overlaid.
    ///
    /// Returns false outside the grid.
    pub fn cell_with_active(&self, x: i8, y: i8) -> bool {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if self.board[y as usize][x as usize] != 0 {
            return true;
        }
        let col = i16::from(x) - i16::from(self.active.x);
        let row = i16::from(y) - i16::from(self.active.y);
        (0..SHAPE_SIZE as i16).contains(&row)
            && (0..SHAPE_SIZE as i16).contains(&col)
            && self.active.matrix[row as usize][col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let empty = [[false; SHAPE_SIZE as usize]; SHAPE_SIZE as usize];
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                x: SPAWN_X,
                y: SPAWN_Y,
                matrix: empty,
            },
            next: NextSnapshot {
                kind: PieceKind::I,
                matrix: empty,
            },
            phase: EnginePhase::Falling,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            tick_count: 0,
            last_event: None,
        }
    }
}
