//! Game-related types: status, phase and the move log.

use serde::{Deserialize, Serialize};

use super::chess::Color;

/// Classification of the current position, derived on demand.
///
/// Variants are listed in precedence order: when several predicates hold at
/// once, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "side", rename_all = "snake_case")]
pub enum GameStatus {
    /// The side to move is checkmated.
    Checkmate,
    /// Drawn by stalemate, the fifty-move rule, insufficient material or
    /// threefold repetition.
    Draw,
    /// The side to move has no legal move and is not in check. Outranked by
    /// `Draw`, which already covers stalemate.
    Stalemate,
    /// Any other terminal condition reported by the rules engine.
    GameOver,
    /// The side to move is in check but has a way out.
    Check,
    /// Ordinary position.
    ToMove(Color),
}

impl GameStatus {
    /// Returns true if no further moves will be accepted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Checkmate | Self::Draw | Self::Stalemate | Self::GameOver
        )
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.is_terminal() {
            GamePhase::Terminal
        } else {
            GamePhase::InProgress
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkmate => write!(f, "Checkmate!"),
            Self::Draw => write!(f, "Draw!"),
            Self::Stalemate => write!(f, "Stalemate!"),
            Self::GameOver => write!(f, "Game Over!"),
            Self::Check => write!(f, "Check!"),
            Self::ToMove(side) => write!(f, "{side} to move"),
        }
    }
}

/// The two states of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    InProgress,
    Terminal,
}

/// Record of a single accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Color that made the move.
    pub color: Color,
    /// Standard Algebraic Notation (e.g., "Nf3", "O-O", "Qh4#").
    pub san: String,
}

impl MoveRecord {
    #[must_use]
    pub fn new(color: Color, san: impl Into<String>) -> Self {
        Self {
            color,
            san: san.into(),
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.color, self.san)
    }
}

/// Move number shown next to the entry at `index` (0-based) of a move log.
#[must_use]
pub const fn move_number(index: usize) -> usize {
    index / 2 + 1
}

/// Append-only list of accepted moves, in the order they were played.
///
/// Only the game holder appends to or clears the log; everyone else reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// Each entry paired with its display move number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &MoveRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (move_number(index), record))
    }

    /// Entries grouped two per line under their shared move number.
    ///
    /// Grouping is by position in the log, not by color: the first entry
    /// always opens row 1. A log that starts with a Black move (a game set up
    /// from a Black-to-move position) reads `1. Black: ..  White: ..`.
    pub fn rows(&self) -> impl Iterator<Item = MoveRow<'_>> + '_ {
        self.records
            .chunks(2)
            .enumerate()
            .map(|(i, entries)| MoveRow {
                number: i + 1,
                entries,
            })
    }
}

/// One line of the move history panel: a move number and up to two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'a> {
    pub number: usize,
    pub entries: &'a [MoveRecord],
}

impl std::fmt::Display for MoveRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.", self.number)?;
        for (i, record) in self.entries.iter().enumerate() {
            let sep = if i == 0 { " " } else { "  " };
            write!(f, "{sep}{record}")?;
        }
        Ok(())
    }
}

/// Everything the page shows about a game, exported by the `export` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current board position in FEN notation.
    pub board_fen: String,
    /// Moves played, oldest first.
    pub moves: MoveLog,
    pub status: GameStatus,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(sans: &[&str]) -> MoveLog {
        let mut log = MoveLog::new();
        let mut color = Color::White;
        for san in sans {
            log.push(MoveRecord::new(color, *san));
            color = color.opposite();
        }
        log
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Checkmate.to_string(), "Checkmate!");
        assert_eq!(GameStatus::Draw.to_string(), "Draw!");
        assert_eq!(GameStatus::Stalemate.to_string(), "Stalemate!");
        assert_eq!(GameStatus::GameOver.to_string(), "Game Over!");
        assert_eq!(GameStatus::Check.to_string(), "Check!");
        assert_eq!(
            GameStatus::ToMove(Color::Black).to_string(),
            "Black to move"
        );
    }

    #[test]
    fn test_status_phase() {
        assert_eq!(GameStatus::Checkmate.phase(), GamePhase::Terminal);
        assert_eq!(GameStatus::Stalemate.phase(), GamePhase::Terminal);
        assert_eq!(GameStatus::Check.phase(), GamePhase::InProgress);
        assert_eq!(
            GameStatus::ToMove(Color::White).phase(),
            GamePhase::InProgress
        );
    }

    #[test]
    fn test_move_number_pairs_indices() {
        assert_eq!(move_number(0), 1);
        assert_eq!(move_number(1), 1);
        assert_eq!(move_number(2), 2);
        assert_eq!(move_number(3), 2);
        assert_eq!(move_number(10), 6);
    }

    #[test]
    fn test_record_display() {
        let record = MoveRecord::new(Color::White, "e4");
        assert_eq!(record.to_string(), "White: e4");
    }

    #[test]
    fn test_numbered_entries() {
        let log = log_of(&["e4", "e5", "Nf3"]);
        let lines: Vec<String> = log
            .numbered()
            .map(|(n, record)| format!("{n}. {record}"))
            .collect();
        assert_eq!(
            lines,
            vec!["1. White: e4", "1. Black: e5", "2. White: Nf3"]
        );
    }

    #[test]
    fn test_rows_group_two_per_line() {
        let log = log_of(&["e4", "e5", "Nf3"]);
        let rows: Vec<String> = log.rows().map(|row| row.to_string()).collect();
        assert_eq!(rows, vec!["1. White: e4  Black: e5", "2. White: Nf3"]);
    }

    #[test]
    fn test_rows_follow_log_order_not_color() {
        let mut log = MoveLog::new();
        log.push(MoveRecord::new(Color::Black, "e5"));
        log.push(MoveRecord::new(Color::White, "Nf3"));
        let rows: Vec<String> = log.rows().map(|row| row.to_string()).collect();
        assert_eq!(rows, vec!["1. Black: e5  White: Nf3"]);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = log_of(&["e4", "e5"]);
        assert_eq!(log.len(), 2);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.rows().count(), 0);
    }

    #[test]
    fn test_serialized_shapes() {
        let record = MoveRecord::new(Color::Black, "Qh4#");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "color": "black", "san": "Qh4#" }));

        let status = serde_json::to_value(GameStatus::ToMove(Color::White)).unwrap();
        assert_eq!(
            status,
            serde_json::json!({ "kind": "to_move", "side": "white" })
        );

        let log = serde_json::to_value(log_of(&["e4"])).unwrap();
        assert_eq!(log, serde_json::json!([{ "color": "white", "san": "e4" }]));
    }
}
