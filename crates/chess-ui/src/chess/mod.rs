//! Chess logic integration with shakmaty.
//!
//! This module provides a clean interface to shakmaty for:
//! - Move validation
//! - Terminal-state detection
//! - FEN string handling

pub mod engine;

pub use engine::{ChessError, PlayedMove, Position};
