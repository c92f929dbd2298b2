//! The game state holder: the single owner of the current position and the
//! move log.
//!
//! Every transition goes through here. A move attempt either replaces the
//! current [`Position`] with the one the rules engine hands back and appends a
//! [`MoveRecord`], or changes nothing at all.

use crate::chess::engine::Position;
use crate::types::chess::MoveAttempt;
use crate::types::game::{GamePhase, GameSnapshot, GameStatus, MoveLog, MoveRecord};

#[derive(Debug, Clone)]
pub struct GameHolder {
    position: Position,
    move_log: MoveLog,
    revision: u64,
}

impl GameHolder {
    /// A fresh game at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(Position::start())
    }

    /// A game that starts from an arbitrary position. `reset` still returns to
    /// the standard start.
    #[must_use]
    pub fn with_position(position: Position) -> Self {
        Self {
            position,
            move_log: MoveLog::new(),
            revision: 0,
        }
    }

    /// Try to move the piece on `source` to `target`.
    ///
    /// Returns `false`, with no state change, for anything the rules engine
    /// will not accept: unknown squares, an empty source, an illegal move, or
    /// any move once the game is over.
    pub fn attempt_move(&mut self, source: &str, target: &str) -> bool {
        match MoveAttempt::parse(source, target) {
            Ok(attempt) => self.apply(&attempt),
            Err(_) => false,
        }
    }

    /// Same as [`attempt_move`](Self::attempt_move) for an already parsed attempt.
    pub fn apply(&mut self, attempt: &MoveAttempt) -> bool {
        // The engine flips the turn as part of producing the next position.
        let mover = self.position.turn();

        let Ok(played) = self.position.play(attempt) else {
            return false;
        };

        self.position = played.position;
        let record = MoveRecord::new(mover, played.san);
        tracing::debug!(
            mover = %record.color,
            san = %record.san,
            fen = %self.position.to_fen(),
            "move accepted"
        );
        self.move_log.push(record);
        self.revision += 1;
        true
    }

    /// Back to the standard starting position with an empty move log.
    pub fn reset(&mut self) {
        self.position = Position::start();
        self.move_log.clear();
        self.revision += 1;
        tracing::info!(revision = self.revision, "game reset");
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.status()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.position.phase()
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    /// Current position, status and move log as one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_fen: self.fen(),
            moves: self.move_log.clone(),
            status: self.status(),
            phase: self.phase(),
        }
    }

    /// Bumped on every state change; lets a view tell whether it is stale.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for GameHolder {
    fn default() -> Self {
        Self::new()
    }
}
