/// How the board panel and the move history are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Board above the move history (narrow viewports).
    Column,
    /// Board and move history side by side.
    Row,
}

impl Layout {
    #[must_use]
    pub const fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Column
        } else {
            Self::Row
        }
    }
}
