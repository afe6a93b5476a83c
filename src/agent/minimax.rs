//! Search-based player
//!
//! Keeps a running frontier across its own turns: it is extended around the
//! opponent's last move before searching and around its own move after.
//! Searches run on a private copy of the board, so the game's board is
//! never touched.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::error::AgentError;
use crate::search::{Frontier, SearchResult, Searcher};

use super::{Agent, AgentKind};

pub struct MinimaxAgent {
    name: String,
    stone: Stone,
    depth: usize,
    searcher: Searcher,
    frontier: Frontier,
    rng: StdRng,
    last_search: Option<SearchResult>,
}

impl MinimaxAgent {
    /// Five-in-a-row searcher with the default span and an entropy-seeded RNG
    pub fn new(name: &str, stone: Stone, depth: usize) -> Self {
        Self::with_rng(name, stone, depth, Searcher::default(), StdRng::from_entropy())
    }

    pub fn with_rng(name: &str, stone: Stone, depth: usize, searcher: Searcher, rng: StdRng) -> Self {
        assert!(depth >= 1, "search depth must be at least one ply");
        MinimaxAgent {
            name: name.to_string(),
            stone,
            depth,
            searcher,
            frontier: Frontier::new(),
            rng,
            last_search: None,
        }
    }

    /// Candidate cells the next search would consider
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Make sure the frontier has candidates, rebuilding it if needed.
    fn ensure_frontier(&mut self, board: &Board, around: Option<Pos>) {
        if !self.frontier.is_empty() {
            return;
        }
        if let Some(pos) = around {
            self.frontier = Frontier::init(board, pos, self.searcher.span);
        }
        if self.frontier.is_empty() {
            self.frontier = Frontier::from_board(board, self.searcher.span);
        }
    }

    fn choose(&mut self, board: &mut Board, last_move: Option<Pos>) -> Result<Pos, AgentError> {
        if let Some(last) = last_move {
            self.frontier.update(board, last, self.searcher.span);
        }
        if self.frontier.is_empty() {
            warn!(name = %self.name, "frontier exhausted, rebuilding");
            self.ensure_frontier(board, last_move);
        }
        if self.frontier.is_empty() {
            // Nothing on the board to search around
            return if board.is_board_empty() {
                Ok(board.center())
            } else {
                Err(AgentError::BoardFull)
            };
        }

        let result = self
            .searcher
            .infer(self.stone, board, &self.frontier, self.depth, &mut self.rng);
        self.last_search = Some(result);
        result.best_move.ok_or(AgentError::BoardFull)
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Minimax
    }

    fn play(&mut self, board: &Board, last_move: Option<Pos>, step: usize) -> Result<Pos, AgentError> {
        // Steps 0 and 1 are a player's first move of a match
        if step < 2 {
            self.frontier.clear();
        }

        let mut scratch = board.clone();
        let pos = if step == 0 && scratch.is_empty(scratch.center()) {
            scratch.center()
        } else {
            self.choose(&mut scratch, last_move)?
        };
        debug_assert_eq!(scratch, *board);

        scratch.place_stone(pos, self.stone);
        self.frontier.update(&scratch, pos, self.searcher.span);
        self.ensure_frontier(&scratch, Some(pos));

        debug!(name = %self.name, step, %pos, frontier = self.frontier.len(), "minimax move");
        Ok(pos)
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.last_search = None;
    }

    fn last_search(&self) -> Option<SearchResult> {
        self.last_search
    }
}
