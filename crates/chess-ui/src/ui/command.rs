//! Line commands for the terminal front-end.
//!
//! A typed move stands in for a drop gesture, `new` for the New Game button
//! and `resize` for a viewport resize notification.

use thiserror::Error;

use crate::types::chess::Square;

pub const HELP: &str = "\
Commands:
  e2 e4 | e2e4    drop the piece on e2 onto e4
  new             start a new game
  resize <px>     change the viewport width
  export          print the game as JSON
  help            show this help
  quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Both squares name real board squares; legality is left to the game holder.
    Drop { source: String, target: String },
    NewGame,
    Resize(u32),
    Export,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?}, type 'help'")]
    Unknown(String),

    #[error("resize needs a width in pixels")]
    MissingWidth,

    #[error("invalid width {0:?}")]
    InvalidWidth(String),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(CommandError::Empty),
            ["new"] | ["reset"] => Ok(Self::NewGame),
            ["export"] => Ok(Self::Export),
            ["help"] | ["?"] => Ok(Self::Help),
            ["quit"] | ["exit"] | ["q"] => Ok(Self::Quit),
            ["resize"] => Err(CommandError::MissingWidth),
            ["resize", width] => width
                .parse()
                .map(Self::Resize)
                .map_err(|_| CommandError::InvalidWidth((*width).to_string())),
            [source, target] if is_square(source) && is_square(target) => Ok(Self::Drop {
                source: (*source).to_string(),
                target: (*target).to_string(),
            }),
            [compact]
                if compact.len() == 4
                    && compact.is_ascii()
                    && is_square(&compact[..2])
                    && is_square(&compact[2..]) =>
            {
                Ok(Self::Drop {
                    source: compact[..2].to_string(),
                    target: compact[2..].to_string(),
                })
            }
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}

fn is_square(name: &str) -> bool {
    name.parse::<Square>().is_ok()
}
