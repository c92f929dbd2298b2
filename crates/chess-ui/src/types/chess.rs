//! Chess value types wrapping shakmaty.
//!
//! These are the types the presentation layer reads: colors, pieces, squares
//! and the ephemeral [`MoveAttempt`] produced by a drop gesture.

use serde::{Deserialize, Serialize};

use crate::chess::engine::ChessError;

/// Chess piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// White pieces.
    White,
    /// Black pieces.
    Black,
}

impl Color {
    /// Get the opposite color.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns true if this is white.
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Self::White)
    }
}

impl From<shakmaty::Color> for Color {
    fn from(c: shakmaty::Color) -> Self {
        match c {
            shakmaty::Color::White => Self::White,
            shakmaty::Color::Black => Self::Black,
        }
    }
}

impl From<Color> for shakmaty::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl From<shakmaty::Role> for PieceType {
    fn from(r: shakmaty::Role) -> Self {
        match r {
            shakmaty::Role::Pawn => Self::Pawn,
            shakmaty::Role::Knight => Self::Knight,
            shakmaty::Role::Bishop => Self::Bishop,
            shakmaty::Role::Rook => Self::Rook,
            shakmaty::Role::Queen => Self::Queen,
            shakmaty::Role::King => Self::King,
        }
    }
}

impl From<PieceType> for shakmaty::Role {
    fn from(p: PieceType) -> Self {
        match p {
            PieceType::Pawn => Self::Pawn,
            PieceType::Knight => Self::Knight,
            PieceType::Bishop => Self::Bishop,
            PieceType::Rook => Self::Rook,
            PieceType::Queen => Self::Queen,
            PieceType::King => Self::King,
        }
    }
}

/// A chess piece with color and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

impl Piece {
    /// FEN letter for this piece: uppercase for white, lowercase for black.
    #[must_use]
    pub fn fen_char(self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        if self.color.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(p: shakmaty::Piece) -> Self {
        Self {
            color: p.color.into(),
            piece_type: p.role.into(),
        }
    }
}

/// A square on the chess board (a1-h8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Create a square from file (0-7) and rank (0-7).
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Get the file (0-7, a-h).
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Get the rank (0-7, 1-8).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Dark squares are the ones a1 shares a color with.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl From<shakmaty::Square> for Square {
    fn from(s: shakmaty::Square) -> Self {
        Self(s as u8)
    }
}

impl From<Square> for shakmaty::Square {
    fn from(s: Square) -> Self {
        // Square is always in 0..64.
        Self::new(u32::from(s.0))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl std::str::FromStr for Square {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or("missing file")?;
        let rank = chars.next().ok_or("missing rank")?;
        if chars.next().is_some() {
            return Err("square must be 2 characters");
        }

        if !('a'..='h').contains(&file) {
            return Err("file must be a-h");
        }
        if !('1'..='8').contains(&rank) {
            return Err("rank must be 1-8");
        }

        let file_idx = (file as u8) - b'a';
        let rank_idx = (rank as u8) - b'1';

        Self::new(file_idx, rank_idx).ok_or("invalid square")
    }
}

/// A proposed move, as reported by a drop gesture on the board.
///
/// The promotion piece is only consulted when the move actually promotes a
/// pawn; it defaults to a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveAttempt {
    source: Square,
    target: Square,
    promotion: PieceType,
}

impl MoveAttempt {
    #[must_use]
    pub const fn new(source: Square, target: Square) -> Self {
        Self {
            source,
            target,
            promotion: PieceType::Queen,
        }
    }

    /// Parse a pair of square names such as `("e2", "e4")`.
    pub fn parse(source: &str, target: &str) -> Result<Self, ChessError> {
        let square = |name: &str| {
            name.parse::<Square>()
                .map_err(|reason| ChessError::InvalidSquare {
                    square: name.to_string(),
                    reason,
                })
        };
        Ok(Self::new(square(source)?, square(target)?))
    }

    #[must_use]
    pub const fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = promotion;
        self
    }

    #[must_use]
    pub const fn source(&self) -> Square {
        self.source
    }

    #[must_use]
    pub const fn target(&self) -> Square {
        self.target
    }

    #[must_use]
    pub const fn promotion(&self) -> PieceType {
        self.promotion
    }
}

impl std::fmt::Display for MoveAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}
