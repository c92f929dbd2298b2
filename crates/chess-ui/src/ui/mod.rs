//! Presentation layer.
//!
//! ## Modules
//!
//! - `view` - the chess page, owning the game holder
//! - `board` - board widget seam and the text widget
//! - `viewport` - viewport width capability with scoped resize subscriptions
//! - `layout` - column/row choice from the viewport width
//! - `config` - colors, orientation and breakpoint
//! - `command` - line commands for the terminal front-end

pub mod board;
pub mod command;
pub mod config;
pub mod layout;
pub mod view;
pub mod viewport;

pub use board::{BoardProps, BoardWidget, Orientation, RenderError, TextBoard};
pub use command::{Command, CommandError};
pub use config::{ConfigError, UiConfig};
pub use layout::Layout;
pub use view::ChessView;
pub use viewport::{ResizeListener, ResizeSubscription, SimulatedViewport, ViewportProvider};
