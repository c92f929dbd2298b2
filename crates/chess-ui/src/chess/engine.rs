//! Rules engine integration with shakmaty.
//!
//! [`Position`] is an immutable snapshot of a game: playing a move never
//! touches the receiver, it hands back a fresh `Position`. Legality, SAN
//! and terminal-state detection all come from shakmaty.

use shakmaty::{
    fen::Fen, san::SanPlus, uci::UciMove, CastlingMode, Chess, EnPassantMode, Move,
    Position as _, Role,
};
use thiserror::Error;

use crate::types::chess::{Color, MoveAttempt, Piece, Square};
use crate::types::game::{GamePhase, GameStatus};

/// Errors that can occur during chess operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Square name could not be parsed.
    #[error("invalid square {square:?}: {reason}")]
    InvalidSquare {
        square: String,
        reason: &'static str,
    },

    /// Invalid FEN string.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The source square is empty.
    #[error("no piece on {0}")]
    NoPiece(Square),

    /// Move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(MoveAttempt),

    /// Game is already over.
    #[error("game is already over")]
    GameOver,
}

/// Half-move clock value at which the fifty-move rule applies.
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Result of playing a move: the new position and the move in SAN.
#[derive(Debug, Clone)]
pub struct PlayedMove {
    pub position: Position,
    pub san: String,
}

/// A chess position plus the repetition keys of every position that led to it.
#[derive(Debug, Clone)]
pub struct Position {
    chess: Chess,
    history: Vec<String>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn start() -> Self {
        Self::from_chess(Chess::default(), Vec::new())
    }

    /// Create a position from a FEN string. Repetition history starts fresh.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| ChessError::InvalidFen(format!("{e}")))?;
        let chess: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| ChessError::InvalidFen(format!("{e}")))?;
        Ok(Self::from_chess(chess, Vec::new()))
    }

    fn from_chess(chess: Chess, mut history: Vec<String>) -> Self {
        history.push(repetition_key(&chess));
        Self { chess, history }
    }

    /// Get the FEN string for the current position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        fen_of(&self.chess)
    }

    /// Get whose turn it is to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.chess.turn().into()
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.chess.board().piece_at(square.into()).map(Piece::from)
    }

    #[must_use]
    pub fn legal_move_count(&self) -> usize {
        self.chess.legal_moves().len()
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.chess.fullmoves().get()
    }

    /// Check if the current player is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.chess.is_check()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.chess.is_checkmate()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.chess.is_stalemate()
    }

    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.chess.is_insufficient_material()
    }

    /// Fifty moves by each side without a capture or pawn move.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.chess.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    /// The current position has occurred at least three times in this game.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.history.last() else {
            return false;
        };
        self.history.iter().filter(|key| *key == current).count() >= 3
    }

    /// Stalemate, fifty-move rule, insufficient material or threefold repetition.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    /// No legal moves, or drawn by rule.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.chess.legal_moves().is_empty() || self.is_draw()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.status().phase()
    }

    /// Classify the position: checkmate > draw > stalemate > other game over
    /// > check > side to move. Stalemate counts as a draw, so it shows as
    /// `Draw`.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            if self.is_checkmate() {
                GameStatus::Checkmate
            } else if self.is_draw() {
                GameStatus::Draw
            } else if self.is_stalemate() {
                GameStatus::Stalemate
            } else {
                GameStatus::GameOver
            }
        } else if self.is_check() {
            GameStatus::Check
        } else {
            GameStatus::ToMove(self.turn())
        }
    }

    /// Validate a move attempt and produce the position it leads to.
    ///
    /// `self` is left untouched whether or not the move is legal.
    pub fn play(&self, attempt: &MoveAttempt) -> Result<PlayedMove, ChessError> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        if self.piece_at(attempt.source()).is_none() {
            return Err(ChessError::NoPiece(attempt.source()));
        }

        let m = self
            .find_legal_move(attempt)
            .ok_or(ChessError::IllegalMove(*attempt))?;

        // SAN depends on the position before the move.
        let san = SanPlus::from_move(self.chess.clone(), &m).to_string();

        let chess = self
            .chess
            .clone()
            .play(&m)
            .map_err(|_| ChessError::IllegalMove(*attempt))?;

        Ok(PlayedMove {
            position: Self::from_chess(chess, self.history.clone()),
            san,
        })
    }

    /// Match an attempt against the legal moves. Castling is entered as the
    /// king's two-square step; the promotion piece only matters for promotions.
    fn find_legal_move(&self, attempt: &MoveAttempt) -> Option<Move> {
        let source: shakmaty::Square = attempt.source().into();
        let target: shakmaty::Square = attempt.target().into();
        let promotion: Role = attempt.promotion().into();

        self.chess.legal_moves().into_iter().find(|m| {
            match UciMove::from_move(m, CastlingMode::Standard) {
                UciMove::Normal {
                    from,
                    to,
                    promotion: promoted,
                } => from == source && to == target && promoted.map_or(true, |r| r == promotion),
                _ => false,
            }
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

fn fen_of(chess: &Chess) -> String {
    Fen::from_position(chess.clone(), EnPassantMode::Legal).to_string()
}

/// Placement, side to move, castling rights and en-passant square.
fn repetition_key(chess: &Chess) -> String {
    fen_of(chess)
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}
