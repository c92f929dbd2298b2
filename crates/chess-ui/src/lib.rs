//! # Chess UI
//!
//! A single-page chess board with a move history and a responsive layout.
//!
//! ## Pieces
//!
//! - **Rules glue**: [`chess::Position`] - immutable position snapshots backed by shakmaty
//! - **Game state holder**: [`game::GameHolder`] - owns the current position and the move log
//! - **Presentation**: [`ui::ChessView`] - renders status, board and history; forwards gestures
//!
//! Legality, SAN and terminal-state detection come from shakmaty. Board
//! drawing goes through the [`ui::BoardWidget`] trait.

pub mod chess;
pub mod game;
pub mod types;
pub mod ui;
