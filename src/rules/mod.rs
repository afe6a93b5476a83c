//! Game rules for Gobang
//!
//! Free-style five-in-a-row: the first side to line up `run_length`
//! stones horizontally, vertically, or diagonally wins. A full board with
//! no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, has_run, is_draw, Direction, LineIter, WinLine};
