//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data: no game rules live in this crate, so the
//! same definitions can be used by the engine, the headless runner and any
//! host that renders or drives a game.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Shape frame**: every piece lives in a fixed 4x4 occupancy matrix
//! - **Spawn position**: `(SPAWN_X, 0)`, i.e. `(3, 0)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Default interval between engine ticks |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{EnginePhase, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert!(EnginePhase::GameOver.is_terminal());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square occupancy frame every shape lives in
pub const SHAPE_SIZE: u8 = 4;

/// Column of the shape frame's top-left cell when a piece spawns.
///
/// `BOARD_WIDTH / 2 - SHAPE_SIZE / 2`, so the frame sits centered.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 - SHAPE_SIZE / 2) as i8;

/// Row of the shape frame's top-left cell when a piece spawns
pub const SPAWN_Y: i8 = 0;

/// Default interval between engine ticks (1 second per row)
pub const TICK_MS: u32 = 1000;

/// Points awarded for clearing N lines with a single lock.
///
/// Index is the number of lines; anything past 4 scores nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A settled board cell: `true` when occupied.
///
/// The board only tracks occupancy, not which piece filled a cell.
pub type Cell = bool;

/// A 4x4 occupancy matrix, row-major (`matrix[row][col]`)
pub type Matrix = [[bool; SHAPE_SIZE as usize]; SHAPE_SIZE as usize];

/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position of this kind in catalog order (I=0 .. Z=6)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PieceKind::I),
            1 => Some(PieceKind::J),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::O),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::T),
            6 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Commands a host can issue between ticks.
///
/// Each one is validated against the board before it changes anything; a
/// blocked command is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without locking it
    SoftDrop,
    /// Rotate piece 90° clockwise in place
    Rotate,
}

impl GameAction {
    /// Every action, in a fixed order (handy for scripted input)
    pub const ALL: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Engine state machine phases.
///
/// The cycle is `Falling -> Locking -> Clearing -> Spawning -> Falling`,
/// leaving it only for `GameOver` when the next piece cannot spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePhase {
    /// Current piece is active and not yet blocked below
    Falling,
    /// Current piece is blocked below and about to be written to the board
    Locking,
    /// Piece is on the board; complete lines are cleared and scored
    Clearing,
    /// Current/next pieces are being replaced
    Spawning,
    /// Terminal: the next piece could not be placed at the spawn point
    GameOver,
}

impl EnginePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::Falling => "falling",
            EnginePhase::Locking => "locking",
            EnginePhase::Clearing => "clearing",
            EnginePhase::Spawning => "spawning",
            EnginePhase::GameOver => "game_over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EnginePhase::GameOver)
    }
}

/// Summary of one lock: emitted after the clearing phase has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LockEvent {
    /// Lines removed by this lock
    pub lines_cleared: u32,
    /// Points added to the score by this lock
    pub points: u32,
}
