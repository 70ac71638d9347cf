//! State - カーソルとビューの状態

use serde::{Deserialize, Serialize};

/// Swipe cursor state.
///
/// # 状態遷移
/// - Presenting(i) -> Presenting(i + 1)  (decision, i + 1 < len)
/// - Presenting(i) -> Exhausted          (decision, i + 1 == len)
/// - Exhausted is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeState {
    Presenting(usize),
    Exhausted,
}

impl SwipeState {
    pub fn initial(len: usize) -> Self {
        if len == 0 {
            SwipeState::Exhausted
        } else {
            SwipeState::Presenting(0)
        }
    }

    /// Is this a terminal state (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(self, SwipeState::Exhausted)
    }
}

/// Tabs of the view shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Browse,
    Artists,
    Upload,
}

/// How the browse tab lays out the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One card at a time, swipe to decide.
    Swipe,
    /// All cards in a grid.
    Grid,
}

impl LayoutMode {
    /// Viewports narrower than `breakpoint` get the swipe layout.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            LayoutMode::Swipe
        } else {
            LayoutMode::Grid
        }
    }
}
