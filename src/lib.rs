//! Gobang (five in a row) on an M×N board
//!
//! The engine picks moves with a depth-limited negamax search. To keep the
//! branching factor small, it only considers a *frontier*: the empty cells
//! close to stones already on the board. Scores are three-valued (a forced
//! win, a forced loss, or nothing decided within the horizon), and ties
//! among equally good moves are broken at random.
//!
//! # Architecture
//!
//! - [`board`]: grid of stones with row-major indexing and console rendering
//! - [`rules`]: win detection along the four lines through a cell
//! - [`search`]: frontier maintenance and the negamax search
//! - [`agent`]: players (search, random, manual) behind one `play` call
//! - [`game`]: turn loop, outcomes and repeat-match tallies
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gobang::agent::{Agent, MinimaxAgent};
//! use gobang::{Board, Pos, Stone};
//!
//! let mut board = Board::square(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//!
//! let mut white = MinimaxAgent::new("White", Stone::White, 2);
//! let pos = white.play(&board, Some(Pos::new(4, 4)), 1).unwrap();
//! assert!(board.is_empty(pos));
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod rules;
pub mod search;
pub mod ui;

pub use board::{Board, Pos, Stone, PIECES_IN_LINE};
pub use config::GameConfig;
pub use game::{Game, GameState, Outcome};
