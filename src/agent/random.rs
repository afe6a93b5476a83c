use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::error::AgentError;

use super::{Agent, AgentKind};

/// A player that places its stone on a uniformly random empty cell.
pub struct RandomAgent {
    name: String,
    stone: Stone,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: &str, stone: Stone) -> Self {
        Self::with_rng(name, stone, StdRng::from_entropy())
    }

    pub fn with_rng(name: &str, stone: Stone, rng: StdRng) -> Self {
        RandomAgent {
            name: name.to_string(),
            stone,
            rng,
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn play(&mut self, board: &Board, _last_move: Option<Pos>, _step: usize) -> Result<Pos, AgentError> {
        board.empty_cells().choose(&mut self.rng).ok_or(AgentError::BoardFull)
    }
}
