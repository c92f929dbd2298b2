//! Type definitions for the chess UI.
//!
//! ## Modules
//!
//! - `chess` - Chess types wrapping shakmaty (Color, Square, MoveAttempt, etc.)
//! - `game` - Game-related types (GameStatus, MoveRecord, MoveLog, GameSnapshot)

pub mod chess;
pub mod game;

// Re-export commonly used types
pub use chess::{Color, MoveAttempt, Piece, PieceType, Square};
pub use game::{move_number, GamePhase, GameSnapshot, GameStatus, MoveLog, MoveRecord, MoveRow};
