//! Integration tests for the chess page.
//!
//! Covers the responsive layout, the resize subscription lifetime and the
//! rendered page content.

use chess_ui::game::GameHolder;
use chess_ui::types::{Color, GameStatus};
use chess_ui::ui::{ChessView, Layout, Orientation, SimulatedViewport, TextBoard, UiConfig};

fn mount(viewport: &SimulatedViewport) -> ChessView<TextBoard> {
    ChessView::mount(viewport, TextBoard::new(false), UiConfig::default()).unwrap()
}

fn line_index(page: &str, needle: &str) -> usize {
    page.lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{page}"))
}

// =============================================================================
// Layout and resize subscription
// =============================================================================

#[test]
fn test_initial_layout_follows_width() {
    let wide = SimulatedViewport::new(1024);
    assert_eq!(mount(&wide).layout(), Layout::Row);

    let narrow = SimulatedViewport::new(500);
    assert_eq!(mount(&narrow).layout(), Layout::Column);

    let edge = SimulatedViewport::new(768);
    assert_eq!(mount(&edge).layout(), Layout::Row);
}

#[test]
fn test_layout_changes_on_resize() {
    let viewport = SimulatedViewport::new(1024);
    let view = mount(&viewport);

    viewport.resize(767);
    assert_eq!(view.layout(), Layout::Column);

    viewport.resize(768);
    assert_eq!(view.layout(), Layout::Row);

    viewport.resize(320);
    assert_eq!(view.layout(), Layout::Column);
}

#[test]
fn test_custom_breakpoint() {
    let viewport = SimulatedViewport::new(1024);
    let config = UiConfig::default().with_mobile_breakpoint(1200);
    let view = ChessView::mount(&viewport, TextBoard::new(false), config).unwrap();
    assert_eq!(view.layout(), Layout::Column);

    viewport.resize(1200);
    assert_eq!(view.layout(), Layout::Row);
}

#[test]
fn test_unmount_releases_subscription() {
    let viewport = SimulatedViewport::new(1024);
    let view = mount(&viewport);
    assert_eq!(viewport.listener_count(), 1);

    drop(view);
    assert_eq!(viewport.listener_count(), 0);

    // Resizes after unmount reach nobody.
    viewport.resize(300);
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn test_two_views_share_a_viewport() {
    let viewport = SimulatedViewport::new(1024);
    let first = mount(&viewport);
    let second = mount(&viewport);
    assert_eq!(viewport.listener_count(), 2);

    drop(first);
    viewport.resize(400);
    assert_eq!(second.layout(), Layout::Column);
    assert_eq!(viewport.listener_count(), 1);
}

// =============================================================================
// Page content
// =============================================================================

#[test]
fn test_fresh_page() {
    let viewport = SimulatedViewport::new(400);
    let view = mount(&viewport);
    let page = view.render().unwrap();

    assert!(page.starts_with("CHESS GAME\nPlay and learn from each move"));
    assert!(page.contains("White to move"));
    assert!(page.contains("8 r n b q k b n r"));
    assert!(page.contains("[ New Game ]"));
    assert!(page.contains("Move History"));
    assert!(page.contains("No moves yet"));
}

#[test]
fn test_page_after_moves() {
    let viewport = SimulatedViewport::new(400);
    let mut view = mount(&viewport);
    assert!(view.drop_piece("e2", "e4"));
    assert!(view.drop_piece("e7", "e5"));

    let page = view.render().unwrap();
    assert!(page.contains("White to move"));
    assert!(page.contains("1. White: e4  Black: e5"));
    assert!(!page.contains("No moves yet"));
    assert!(page.contains("4 . . . . P . . ."));
    assert!(page.contains("5 . . . . p . . ."));
}

#[test]
fn test_rejected_drop_leaves_page_unchanged() {
    let viewport = SimulatedViewport::new(1024);
    let mut view = mount(&viewport);
    let before = view.render().unwrap();

    assert!(!view.drop_piece("e2", "e5"));
    assert!(!view.drop_piece("e4", "e5"));
    assert_eq!(view.render().unwrap(), before);
}

#[test]
fn test_column_stacks_history_below_board() {
    let viewport = SimulatedViewport::new(400);
    let view = mount(&viewport);
    let page = view.render().unwrap();

    let button = line_index(&page, "[ New Game ]");
    let history = line_index(&page, "Move History");
    assert!(history > button);
    assert_eq!(page.lines().nth(history), Some("Move History"));
    assert_eq!(page.lines().last(), Some("No moves yet"));
}

#[test]
fn test_row_puts_history_beside_board() {
    let viewport = SimulatedViewport::new(1024);
    let view = mount(&viewport);
    let page = view.render().unwrap();

    let status = line_index(&page, "White to move");
    let history = line_index(&page, "Move History");
    assert_eq!(status, history);

    let top_rank = line_index(&page, "8 r n b q k b n r");
    assert!(page.lines().nth(top_rank).unwrap().ends_with("No moves yet"));
}

#[test]
fn test_resize_changes_rendering() {
    let viewport = SimulatedViewport::new(1024);
    let view = mount(&viewport);
    let row = view.render().unwrap();

    viewport.resize(600);
    let column = view.render().unwrap();
    assert_ne!(row, column);
    assert!(column.lines().count() > row.lines().count());
}

#[test]
fn test_black_orientation() {
    let viewport = SimulatedViewport::new(400);
    let config = UiConfig::default().with_orientation(Orientation::Black);
    let view = ChessView::mount(&viewport, TextBoard::new(false), config).unwrap();
    let page = view.render().unwrap();

    assert!(page.contains("1 R N B K Q B N R"));
    assert!(page.contains("  h g f e d c b a"));
    assert!(line_index(&page, "1 R N B") < line_index(&page, "8 r n b"));
}

#[test]
fn test_new_game_control() {
    let viewport = SimulatedViewport::new(1024);
    let mut view = mount(&viewport);
    for (source, target) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert!(view.drop_piece(source, target));
    }
    assert_eq!(view.status(), GameStatus::Checkmate);
    assert!(view.render().unwrap().contains("Checkmate!"));
    assert!(!view.drop_piece("e2", "e4"));

    view.new_game();
    assert_eq!(view.status(), GameStatus::ToMove(Color::White));
    let page = view.render().unwrap();
    assert!(page.contains("No moves yet"));
    assert!(view.drop_piece("e2", "e4"));
}

#[test]
fn test_mount_with_existing_game() {
    let mut holder = GameHolder::new();
    assert!(holder.attempt_move("d2", "d4"));

    let viewport = SimulatedViewport::new(1024);
    let view =
        ChessView::mount_with_holder(&viewport, TextBoard::new(false), UiConfig::default(), holder)
            .unwrap();
    assert_eq!(view.status().to_string(), "Black to move");
    assert_eq!(view.history_lines(), vec!["1. White: d4"]);
}

#[test]
fn test_ansi_page_row_alignment() {
    let viewport = SimulatedViewport::new(1024);
    let view = ChessView::mount(&viewport, TextBoard::new(true), UiConfig::default()).unwrap();
    let page = view.render().unwrap();

    // Escape sequences do not count towards the board panel width, so the
    // history column starts at the same visible offset on every board row.
    let offsets: Vec<usize> = page
        .lines()
        .filter(|line| line.contains("\x1b["))
        .filter_map(|line| {
            let stripped = strip_ansi(line);
            stripped.rfind("No moves yet")
        })
        .collect();
    assert_eq!(offsets.len(), 1);
    assert_eq!(offsets[0], 3 * 8 + 2 + 4);
}

fn strip_ansi(line: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in line.chars() {
        if in_escape {
            in_escape = !c.is_ascii_alphabetic();
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            out.push(c);
        }
    }
    out
}
