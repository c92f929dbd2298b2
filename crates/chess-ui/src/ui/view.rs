//! The chess page: status line, board, New Game control and move history.
//!
//! `ChessView` owns the game holder outright. Board drops and the New Game
//! control are forwarded to it, and every render reads the holder afresh.

use std::cell::Cell;
use std::rc::Rc;

use super::board::{BoardProps, BoardWidget, RenderError};
use super::config::{ConfigError, UiConfig};
use super::layout::Layout;
use super::viewport::{ResizeSubscription, ViewportProvider};
use crate::game::GameHolder;
use crate::types::game::GameStatus;

pub const TITLE: &str = "CHESS GAME";
pub const SUBTITLE: &str = "Play and learn from each move";
pub const NEW_GAME_LABEL: &str = "New Game";
pub const HISTORY_TITLE: &str = "Move History";
pub const EMPTY_HISTORY: &str = "No moves yet";

/// Columns between the board panel and the history panel in a row layout.
const PANEL_GAP: usize = 4;

pub struct ChessView<W> {
    holder: GameHolder,
    widget: W,
    config: UiConfig,
    layout: Rc<Cell<Layout>>,
    stale: Rc<Cell<bool>>,
    _resize: ResizeSubscription,
}

impl<W: BoardWidget> ChessView<W> {
    /// Mount a view on a fresh game.
    pub fn mount(
        viewport: &impl ViewportProvider,
        widget: W,
        config: UiConfig,
    ) -> Result<Self, ConfigError> {
        Self::mount_with_holder(viewport, widget, config, GameHolder::new())
    }

    /// Mount a view on an existing game.
    ///
    /// Reads the viewport width once and stays subscribed to resizes until the
    /// view is dropped.
    pub fn mount_with_holder(
        viewport: &impl ViewportProvider,
        widget: W,
        config: UiConfig,
        holder: GameHolder,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let breakpoint = config.mobile_breakpoint;
        let layout = Rc::new(Cell::new(Layout::for_width(viewport.width(), breakpoint)));
        let stale = Rc::new(Cell::new(true));

        let subscription = {
            let layout = Rc::clone(&layout);
            let stale = Rc::clone(&stale);
            viewport.subscribe(Box::new(move |width| {
                let next = Layout::for_width(width, breakpoint);
                if layout.replace(next) != next {
                    tracing::info!(width, layout = ?next, "layout changed");
                    stale.set(true);
                }
            }))
        };

        Ok(Self {
            holder,
            widget,
            config,
            layout,
            stale,
            _resize: subscription,
        })
    }

    /// Forward a drop gesture. The widget keeps the piece on the target
    /// square when this returns `true` and snaps it back otherwise.
    pub fn drop_piece(&mut self, source: &str, target: &str) -> bool {
        let accepted = self.holder.attempt_move(source, target);
        if accepted {
            self.stale.set(true);
        }
        accepted
    }

    /// The New Game control.
    pub fn new_game(&mut self) {
        self.holder.reset();
        self.stale.set(true);
    }

    #[must_use]
    pub fn holder(&self) -> &GameHolder {
        &self.holder
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout.get()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.holder.status()
    }

    /// True once after anything visible changed; clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.stale.replace(false)
    }

    /// Move history lines: two moves per numbered line, or a placeholder.
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        let log = self.holder.move_log();
        if log.is_empty() {
            return vec![EMPTY_HISTORY.to_string()];
        }
        log.rows().map(|row| row.to_string()).collect()
    }

    /// Draw the whole page for the current layout.
    pub fn render(&self) -> Result<String, RenderError> {
        let fen = self.holder.fen();
        let board = self.widget.render(&BoardProps {
            position: &fen,
            light_square: &self.config.light_square,
            dark_square: &self.config.dark_square,
            orientation: self.config.orientation,
        })?;

        let mut board_panel = vec![self.status().to_string(), String::new()];
        board_panel.extend(board);
        board_panel.push(String::new());
        board_panel.push(format!("[ {NEW_GAME_LABEL} ]"));

        let mut history_panel = vec![HISTORY_TITLE.to_string(), String::new()];
        history_panel.extend(self.history_lines());

        let mut lines = vec![TITLE.to_string(), SUBTITLE.to_string(), String::new()];
        match self.layout() {
            Layout::Column => {
                lines.extend(board_panel);
                lines.push(String::new());
                lines.extend(history_panel);
            }
            Layout::Row => {
                let width = board_panel
                    .iter()
                    .map(|line| visible_width(line))
                    .max()
                    .unwrap_or(0)
                    + PANEL_GAP;
                let height = board_panel.len().max(history_panel.len());
                for i in 0..height {
                    let left = board_panel.get(i).map_or("", String::as_str);
                    let right = history_panel.get(i).map_or("", String::as_str);
                    let pad = " ".repeat(width - visible_width(left));
                    lines.push(format!("{left}{pad}{right}").trim_end().to_string());
                }
            }
        }

        Ok(lines.join("\n"))
    }
}

impl<W> std::fmt::Debug for ChessView<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChessView")
            .field("holder", &self.holder)
            .field("config", &self.config)
            .field("layout", &self.layout.get())
            .finish_non_exhaustive()
    }
}

/// Printable width of a line, skipping ANSI escape sequences.
fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in line.chars() {
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}
