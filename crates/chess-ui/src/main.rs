//! Chess UI - terminal front-end
//!
//! Run with: `cargo run --package chess-ui`

use std::io::{self, BufRead, Write};

use chess_ui::ui::command::HELP;
use chess_ui::ui::{ChessView, Command, CommandError, SimulatedViewport, TextBoard, UiConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Width the simulated viewport starts at, in logical pixels.
const INITIAL_WIDTH: u32 = 1024;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("chess_ui=info".parse()?))
        .init();

    tracing::info!("Chess UI starting...");

    let viewport = SimulatedViewport::new(INITIAL_WIDTH);
    let mut view = ChessView::mount(&viewport, TextBoard::new(true), UiConfig::default())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}\n")?;

    loop {
        if view.take_redraw() {
            writeln!(out, "{}\n", view.render()?)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<Command>() {
            // A rejected drop looks exactly like nothing happened.
            Ok(Command::Drop { source, target }) => {
                view.drop_piece(&source, &target);
            }
            Ok(Command::NewGame) => view.new_game(),
            Ok(Command::Resize(width)) => viewport.resize(width),
            Ok(Command::Export) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&view.holder().snapshot())?)?;
            }
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {}
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    tracing::info!(moves = view.holder().move_log().len(), "Chess UI shutdown");
    Ok(())
}
