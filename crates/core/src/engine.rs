//! Engine module - owns the board, both pieces and the score
//!
//! The engine is a small state machine advanced by the host on a fixed
//! interval:
//!
//! ```text
//! Falling --blocked--> Locking --> Clearing --> Spawning --> Falling
//!                                                   \--next blocked--> GameOver
//! ```
//!
//! [`Engine::step`] performs exactly one transition. [`Engine::tick`] is what a
//! host calls once per interval: it steps until the engine rests in `Falling`
//! or `GameOver`, so a blocked piece is locked, cleared, scored and replaced
//! on the same tick.
//!
//! Player commands (move, rotate, soft drop) are only honoured while
//! `Falling`, and each is validated against the board before anything moves.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::piece::Piece;
use crate::pieces::random_kind;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::lock_event;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{EnginePhase, GameAction, LockEvent, SPAWN_X, SPAWN_Y};

/// What a single [`Engine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The current piece fell one row
    Moved,
    /// The piece locked and the next one spawned
    Locked(LockEvent),
    /// The piece locked and the next one did not fit; the game just ended
    GameOver,
    /// The game was already over; nothing changed
    Idle,
}

#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = SimpleRng> {
    board: Board,
    current: Piece,
    next: Piece,
    phase: EnginePhase,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    tick_count: u64,
    /// Most recent lock/clear result (consumed by observers).
    last_event: Option<LockEvent>,
    rng: R,
}

impl Engine<SimpleRng> {
    /// New game using the default RNG seeded with `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// New game seeded from the config (or the clock when it has no seed)
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.resolve_seed())
    }
}

impl<R: RandomSource> Engine<R> {
    /// New game drawing pieces from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let current = Piece::spawn(random_kind(&mut rng));
        let next = Piece::spawn(random_kind(&mut rng));
        Self::from_parts(Board::new(), current, next, rng)
    }

    /// Resume from an arbitrary position.
    ///
    /// The caller is responsible for `current` fitting on `board`.
    pub fn from_parts(board: Board, current: Piece, next: Piece, rng: R) -> Self {
        Self {
            board,
            current,
            next,
            phase: EnginePhase::Falling,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            tick_count: 0,
            last_event: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the state machine by exactly one transition.
    ///
    /// Returns the phase the engine is in afterwards.
    pub fn step(&mut self) -> EnginePhase {
        self.phase = match self.phase {
            EnginePhase::Falling => {
                let (x, y) = self.current.position();
                if self.board.try_move(&mut self.current, x, y + 1) {
                    EnginePhase::Falling
                } else {
                    EnginePhase::Locking
                }
            }
            EnginePhase::Locking => {
                let (x, y) = self.current.position();
                self.board.place(&self.current, x, y);
                self.pieces_locked = self.pieces_locked.wrapping_add(1);
                EnginePhase::Clearing
            }
            EnginePhase::Clearing => {
                let event = lock_event(self.board.clear_complete_lines());
                self.score = self.score.saturating_add(event.points);
                self.lines = self.lines.saturating_add(event.lines_cleared);
                self.last_event = Some(event);
                if event.lines_cleared > 0 {
                    debug!(
                        lines = event.lines_cleared,
                        points = event.points,
                        score = self.score,
                        "lines cleared"
                    );
                }
                EnginePhase::Spawning
            }
            EnginePhase::Spawning => self.spawn(),
            EnginePhase::GameOver => EnginePhase::GameOver,
        };
        self.phase
    }

    /// Promote `next` to `current` and draw a fresh `next`
    fn spawn(&mut self) -> EnginePhase {
        if !self.board.can_place(&self.next, SPAWN_X, SPAWN_Y) {
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over: {} piece does not fit at spawn",
                self.next.kind().as_str()
            );
            return EnginePhase::GameOver;
        }

        let fresh = Piece::spawn(random_kind(&mut self.rng));
        self.current = std::mem::replace(&mut self.next, fresh);
        trace!(
            current = self.current.kind().as_str(),
            next = self.next.kind().as_str(),
            "spawned"
        );
        EnginePhase::Falling
    }

    /// Main game tick - one fixed-interval step as seen by the host
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase.is_terminal() {
            return TickOutcome::Idle;
        }

        self.tick_count = self.tick_count.wrapping_add(1);
        let locked_before = self.pieces_locked;

        loop {
            match self.step() {
                EnginePhase::Falling | EnginePhase::GameOver => break,
                _ => {}
            }
        }

        if self.phase.is_terminal() {
            TickOutcome::GameOver
        } else if self.pieces_locked != locked_before {
            TickOutcome::Locked(self.last_event.unwrap_or_default())
        } else {
            TickOutcome::Moved
        }
    }

    /// Shift the current piece by `dx` if it fits
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != EnginePhase::Falling {
            return false;
        }
        let (x, y) = self.current.position();
        self.board.try_move(&mut self.current, x + dx, y + dy)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// One extra row down. Never locks; a blocked piece waits for the next tick.
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Rotate clockwise in place, or not at all.
    ///
    /// No kicks: the rotated shape must fit at the same `(x, y)`.
    pub fn rotate(&mut self) -> bool {
        if self.phase != EnginePhase::Falling {
            return false;
        }
        let (x, y) = self.current.position();
        let rotated = self.current.with_shape(self.current.shape().rotated());
        if self.board.can_place(&rotated, x, y) {
            self.current = rotated;
            return true;
        }
        false
    }

    /// Apply a host command; returns whether it took effect
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.current);
        out.next = NextSnapshot::from(self.next);
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.tick_count = self.tick_count;
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
