//! Board widget seam.
//!
//! The view hands a widget the position notation, the two square colors and
//! the orientation; the widget hands back lines of text. [`TextBoard`] is the
//! widget the terminal front-end uses.

use shakmaty::{fen::Fen, CastlingMode, Chess, Position as _};
use thiserror::Error;

use super::config::{ConfigError, Rgb};
use crate::types::chess::{Piece, Square};

/// Which side sits at the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    White,
    Black,
}

/// Everything a board widget is given to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardProps<'a> {
    /// Position in FEN.
    pub position: &'a str,
    pub light_square: &'a str,
    pub dark_square: &'a str,
    pub orientation: Orientation,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unreadable position {fen:?}: {reason}")]
    Position { fen: String, reason: String },

    #[error(transparent)]
    Color(#[from] ConfigError),
}

pub trait BoardWidget {
    /// Draw the board described by `props`, top row first.
    fn render(&self, props: &BoardProps<'_>) -> Result<Vec<String>, RenderError>;
}

/// Plain-text board with rank and file labels.
///
/// With `ansi` set, each square is painted with a 24-bit background color
/// taken from the props; otherwise squares are separated by spaces and empty
/// squares are drawn as `.`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBoard {
    ansi: bool,
}

impl TextBoard {
    #[must_use]
    pub const fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn cell(&self, piece: Option<Piece>, square: Square, light: Rgb, dark: Rgb) -> String {
        let glyph = piece.map_or('.', Piece::fen_char);
        if !self.ansi {
            return glyph.to_string();
        }
        let Rgb(r, g, b) = if square.is_dark() { dark } else { light };
        let glyph = if piece.is_some() { glyph } else { ' ' };
        format!("\x1b[48;2;{r};{g};{b}m\x1b[38;2;0;0;0m {glyph} \x1b[0m")
    }
}

impl BoardWidget for TextBoard {
    fn render(&self, props: &BoardProps<'_>) -> Result<Vec<String>, RenderError> {
        let unreadable = |reason: String| RenderError::Position {
            fen: props.position.to_string(),
            reason,
        };
        let fen: Fen = props
            .position
            .parse()
            .map_err(|e| unreadable(format!("{e}")))?;
        let chess: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| unreadable(format!("{e}")))?;
        let light = Rgb::parse_hex(props.light_square)?;
        let dark = Rgb::parse_hex(props.dark_square)?;

        let (ranks, files): (Vec<u8>, Vec<u8>) = match props.orientation {
            Orientation::White => ((0..8).rev().collect(), (0..8).collect()),
            Orientation::Black => ((0..8).collect(), (0..8).rev().collect()),
        };
        let sep = if self.ansi { "" } else { " " };

        let mut lines = Vec::with_capacity(9);
        for &rank in &ranks {
            let cells: Vec<String> = files
                .iter()
                .filter_map(|&file| Square::new(file, rank))
                .map(|square| {
                    let piece = chess.board().piece_at(square.into()).map(Piece::from);
                    self.cell(piece, square, light, dark)
                })
                .collect();
            lines.push(format!("{} {}", rank + 1, cells.join(sep)));
        }

        let labels: Vec<String> = files
            .iter()
            .map(|&file| {
                let letter = (b'a' + file) as char;
                if self.ansi {
                    format!(" {letter} ")
                } else {
                    letter.to_string()
                }
            })
            .collect();
        lines.push(format!("  {}", labels.join(sep)));

        Ok(lines)
    }
}
