//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule of the falling-block engine. It has
//! **no dependencies** on rendering, windowing or input devices, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is reachable without a terminal or a clock
//! - **Portable**: a host only needs to call [`Engine::tick`] on a timer and
//!   forward player commands
//!
//! # Module Structure
//!
//! - [`shape`]: fixed 4x4 occupancy matrix with transpose-then-reverse rotation
//! - [`pieces`]: the seven canonical templates and random selection
//! - [`rng`]: injectable random source (seeded once, drawn many times)
//! - [`piece`]: a shape plus its board position
//! - [`board`]: 10x20 occupancy grid, collision checks and line clearing
//! - [`scoring`]: points per lock
//! - [`engine`]: the falling -> locking -> clearing -> spawning state machine
//! - [`snapshot`]: serializable read-only view for hosts
//! - [`config`]: tick interval and seed, with environment overrides
//!
//! # Game Rules
//!
//! - Pieces spawn with their 4x4 frame at column 3, row 0.
//! - Rotation is always clockwise, in place, with no wall kicks: a rotation
//!   that would collide is rejected.
//! - A piece that cannot fall locks on the same tick; complete lines are
//!   cleared top to bottom and scored 0/100/300/500/800.
//! - The game ends when the next piece does not fit at the spawn point.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, TickOutcome};
//! use blockfall_types::{EnginePhase, GameAction};
//!
//! let mut engine = Engine::new(12345);
//! assert_eq!(engine.phase(), EnginePhase::Falling);
//!
//! engine.apply_action(GameAction::MoveLeft);
//! engine.apply_action(GameAction::Rotate);
//!
//! // The first tick on an empty board only moves the piece down one row.
//! assert_eq!(engine.tick(), TickOutcome::Moved);
//! assert_eq!(engine.score(), 0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, TickOutcome};
pub use piece::Piece;
pub use pieces::{random_kind, random_shape, template, ALL_KINDS};
pub use rng::{seed_from_clock, RandomSource, SimpleRng};
pub use scoring::score_for;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
