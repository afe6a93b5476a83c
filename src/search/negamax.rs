//! Depth-limited negamax over the search frontier
//!
//! Every candidate in the frontier is tried in ascending index order:
//! the stone is placed speculatively, an immediate five ends the ply with
//! a winning score, otherwise the opponent's best reply is searched one
//! ply shallower and its score negated. There is no static evaluation, so
//! leaves that are not wins score 0. Among equally scored candidates the
//! move is picked uniformly at random.
//!
//! # Example
//!
//! ```
//! use gobang::board::{Board, Pos, Stone};
//! use gobang::search::{infer, Frontier, DEFAULT_SPAN};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut board = Board::square(9);
//! board.place_stone(Pos::new(4, 4), Stone::Black);
//! let frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = infer(Stone::White, &mut board, &frontier, 2, &mut rng);
//! assert!(result.best_move.is_some());
//! ```

use std::ops::{Deref, DerefMut};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::{Board, Pos, Stone, PIECES_IN_LINE};
use crate::rules::has_run;

use super::frontier::{Frontier, DEFAULT_SPAN};

/// Search score from the mover's point of view
pub type Score = i32;

/// Score of a position the mover wins
pub const WIN: Score = Score::MAX;

/// Score of a position the mover loses; `-WIN`
pub const LOSS: Score = -WIN;

/// Default search depth in plies
pub const DEFAULT_DEPTH: usize = 4;

/// Result of one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score of the chosen move
    pub score: Score,
    /// Chosen move, `None` when the frontier was empty
    pub best_move: Option<Pos>,
    /// Speculative placements evaluated
    pub nodes: u64,
}

impl SearchResult {
    #[inline]
    pub fn is_win(&self) -> bool {
        self.score == WIN
    }
}

/// A stone placed for the duration of one candidate evaluation.
///
/// The cell is restored to `Empty` when the guard drops, on every path out
/// of the candidate loop.
struct Speculation<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Speculation<'a> {
    #[inline]
    fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        board.place_stone(pos, stone);
        Self { board, pos }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Negamax searcher with a fixed run length and frontier span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    pub run_length: usize,
    pub span: usize,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            run_length: PIECES_IN_LINE,
            span: DEFAULT_SPAN,
        }
    }
}

impl Searcher {
    pub fn new(run_length: usize, span: usize) -> Self {
        Self { run_length, span }
    }

    /// Pick the best move for `stone` among the frontier cells.
    ///
    /// The board is borrowed mutably for speculative placements and is
    /// identical to its input state when this returns.
    pub fn infer<R: Rng + ?Sized>(
        &self,
        stone: Stone,
        board: &mut Board,
        frontier: &Frontier,
        depth: usize,
        rng: &mut R,
    ) -> SearchResult {
        debug_assert!(stone != Stone::Empty);
        debug_assert!(depth >= 1, "search depth must be at least one ply");

        let mut nodes = 0;
        let (score, best_move) = self.negamax(stone, board, frontier, depth, rng, &mut nodes);
        debug!(?stone, depth, candidates = frontier.len(), nodes, score, ?best_move, "search done");

        SearchResult {
            score,
            best_move,
            nodes,
        }
    }

    fn negamax<R: Rng + ?Sized>(
        &self,
        stone: Stone,
        board: &mut Board,
        frontier: &Frontier,
        depth: usize,
        rng: &mut R,
        nodes: &mut u64,
    ) -> (Score, Option<Pos>) {
        let mut scored: Vec<(Pos, Score)> = Vec::with_capacity(frontier.len());

        for idx in frontier.iter() {
            let pos = board.pos_of(idx);
            *nodes += 1;

            let mut placed = Speculation::place(board, pos, stone);
            if has_run(&placed, stone, pos, self.run_length) {
                // Nothing beats a win; later candidates are not tried
                return (WIN, Some(pos));
            }

            let score = if depth > 1 {
                let next = frontier.updated(&placed, pos, self.span);
                let (reply, _) =
                    self.negamax(stone.opponent(), &mut placed, &next, depth - 1, rng, nodes);
                -reply
            } else {
                0
            };
            scored.push((pos, score));
        }

        // No candidate left: the board is full, a draw
        let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
            return (0, None);
        };
        let ties: Vec<Pos> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(pos, _)| pos)
            .collect();
        (best, ties.choose(rng).copied())
    }
}

/// [`Searcher::infer`] with five in a row and the default span
pub fn infer<R: Rng + ?Sized>(
    stone: Stone,
    board: &mut Board,
    frontier: &Frontier,
    depth: usize,
    rng: &mut R,
) -> SearchResult {
    Searcher::default().infer(stone, board, frontier, depth, rng)
}
