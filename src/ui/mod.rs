//! GUI front end
//!
//! A native egui/eframe window: menus to pick the seats and start matches,
//! the board canvas, and a side panel with the status, tallies and log.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GobangApp;
pub use session::Session;
