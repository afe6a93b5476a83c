//! Players: anything that can choose the next move
//!
//! The game loop only talks to players through [`Agent::play`]. The
//! [`AgentKind`] tag lets front ends branch on the variant, e.g. to route
//! board clicks to a manual seat instead of calling `play`.

mod manual;
mod minimax;
mod random;

pub use manual::{parse_position, ManualAgent};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::AgentError;
use crate::search::SearchResult;

/// Which kind of player a seat holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum AgentKind {
    /// Human input
    Manual,
    /// Uniformly random empty cell
    Random,
    /// Negamax search over the frontier
    #[default]
    Minimax,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Manual, AgentKind::Random, AgentKind::Minimax];

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Manual => "Manual",
            AgentKind::Random => "Random",
            AgentKind::Minimax => "Minimax",
        }
    }

    /// Build a player of this kind.
    ///
    /// Manual players built here are detached: their moves arrive from the
    /// front end rather than from `play`. `stream` selects the player's RNG
    /// stream when the config carries a seed.
    pub fn build(self, name: &str, stone: Stone, config: &GameConfig, stream: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Manual => Box::new(ManualAgent::detached(name, stone)),
            AgentKind::Random => Box::new(RandomAgent::with_rng(name, stone, config.rng(stream))),
            AgentKind::Minimax => Box::new(MinimaxAgent::with_rng(
                name,
                stone,
                config.depth,
                config.searcher(),
                config.rng(stream),
            )),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Interface shared by every player.
pub trait Agent: Send {
    /// Display name
    fn name(&self) -> &str;

    /// The stone this player places
    fn stone(&self) -> Stone;

    fn kind(&self) -> AgentKind;

    /// Choose the next move.
    ///
    /// `last_move` is the opponent's most recent move (`None` on the very
    /// first move of a match) and `step` the 0-based ply counter. The
    /// returned position addresses an empty cell of `board`.
    fn play(&mut self, board: &Board, last_move: Option<Pos>, step: usize)
        -> Result<Pos, AgentError>;

    /// Forget per-match state; called before every new match.
    fn reset(&mut self) {}

    /// Diagnostics of the most recent search, for players that search
    fn last_search(&self) -> Option<SearchResult> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_kind() {
        let config = GameConfig {
            rows: 9,
            cols: 9,
            seed: Some(1),
            ..GameConfig::default()
        };
        for (i, kind) in AgentKind::ALL.into_iter().enumerate() {
            let agent = kind.build("Black", Stone::Black, &config, i as u64);
            assert_eq!(agent.kind(), kind);
            assert_eq!(agent.stone(), Stone::Black);
            assert_eq!(agent.name(), "Black");
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(AgentKind::Minimax.to_string(), "Minimax");
        assert_eq!(AgentKind::default(), AgentKind::Minimax);
    }
}
