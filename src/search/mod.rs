//! Search module for the Gobang AI
//!
//! Contains:
//! - The frontier of candidate cells around existing stones
//! - Depth-limited negamax over that frontier

pub mod frontier;
pub mod negamax;

pub use frontier::{Frontier, DEFAULT_SPAN};
pub use negamax::{infer, Score, SearchResult, Searcher, DEFAULT_DEPTH, LOSS, WIN};
