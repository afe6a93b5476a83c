//! Turn loop shared by the desktop and console front ends
//!
//! A [`Game`] owns the board and the two seats. Black always moves at even
//! steps and White at odd ones. Moves enter either through
//! [`Game::play_turn`], which asks the seated agent, or through
//! [`Game::apply_move`] when the front end already has a position (a board
//! click, or a move computed off-thread).

mod score;

pub use score::{RepeatCount, Scoreboard};

use tracing::{debug, info};

use crate::agent::{Agent, AgentKind};
use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{GameError, MoveError};
use crate::rules::{check_win, is_draw, WinLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No match started yet
    #[default]
    Idle,
    Running,
    Over,
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { stone: Stone, line: WinLine },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Win { stone, .. } => Some(*stone),
            Outcome::Draw => None,
        }
    }
}

/// A move that was placed, and the outcome if it ended the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub pos: Pos,
    pub stone: Stone,
    pub outcome: Option<Outcome>,
}

pub struct Game {
    board: Board,
    run_length: usize,
    seats: [Option<Box<dyn Agent>>; 2],
    state: GameState,
    step: usize,
    last_move: Option<Pos>,
    outcome: Option<Outcome>,
    scoreboard: Scoreboard,
    repeat: RepeatCount,
}

fn seat_index(stone: Stone) -> usize {
    match stone {
        Stone::Black => 0,
        Stone::White => 1,
        Stone::Empty => panic!("no seat plays empty stones"),
    }
}

impl Game {
    pub fn new(config: &GameConfig, black: Box<dyn Agent>, white: Box<dyn Agent>) -> Self {
        debug_assert_eq!(black.stone(), Stone::Black);
        debug_assert_eq!(white.stone(), Stone::White);
        Game {
            board: config.board(),
            run_length: config.run_length,
            seats: [Some(black), Some(white)],
            state: GameState::Idle,
            step: 0,
            last_move: None,
            outcome: None,
            scoreboard: Scoreboard::default(),
            repeat: RepeatCount::None,
        }
    }

    /// Game with both seats built from agent kinds
    pub fn with_kinds(config: &GameConfig, black: AgentKind, white: AgentKind) -> Self {
        Self::new(
            config,
            black.build("Black", Stone::Black, config, 0),
            white.build("White", Stone::White, config, 1),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// 0-based ply counter of the move to be played next
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn repeat(&self) -> RepeatCount {
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: RepeatCount) {
        self.repeat = repeat;
    }

    /// Stone of the side to move
    pub fn current_stone(&self) -> Stone {
        if self.step % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Agent in a seat, `None` while it is lent out
    pub fn agent(&self, stone: Stone) -> Option<&dyn Agent> {
        self.seats[seat_index(stone)].as_deref()
    }

    pub fn current_agent(&self) -> Option<&dyn Agent> {
        self.agent(self.current_stone())
    }

    /// Kind of the side to move, `None` while its agent is lent out
    pub fn current_kind(&self) -> Option<AgentKind> {
        self.current_agent().map(|agent| agent.kind())
    }

    /// Put a new agent in a seat, returning the previous one
    pub fn set_agent(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        self.seats[seat_index(agent.stone())].replace(agent)
    }

    /// Lend the agent to move out of its seat, e.g. to run it on a worker
    /// thread. Give it back with [`Game::return_agent`].
    pub fn take_agent(&mut self) -> Result<Box<dyn Agent>, GameError> {
        let stone = self.current_stone();
        self.seats[seat_index(stone)].take().ok_or(GameError::SeatBusy(stone))
    }

    pub fn return_agent(&mut self, agent: Box<dyn Agent>) {
        let idx = seat_index(agent.stone());
        debug_assert!(self.seats[idx].is_none());
        self.seats[idx] = Some(agent);
    }

    /// Start a match if none is running.
    pub fn start(&mut self) {
        if self.state != GameState::Running {
            self.restart();
        }
    }

    /// Clear the board and start a fresh match. Tallies are kept.
    pub fn restart(&mut self) {
        self.board.clear();
        self.step = 0;
        self.last_move = None;
        self.outcome = None;
        for agent in self.seats.iter_mut().flatten() {
            agent.reset();
        }
        self.state = GameState::Running;
        info!(game = self.scoreboard.games() + 1, "match started");
    }

    /// Place the side to move's stone at `pos`.
    ///
    /// Validates the move, checks for a win or a full board, and either
    /// finishes the match or passes the turn.
    pub fn apply_move(&mut self, pos: Pos) -> Result<Turn, MoveError> {
        if self.state != GameState::Running {
            return Err(MoveError::NotRunning);
        }
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let stone = self.current_stone();
        self.board.place_stone(pos, stone);
        self.last_move = Some(pos);
        debug!(step = self.step, ?stone, %pos, "move");

        let outcome = if let Some(line) = check_win(&self.board, stone, pos, self.run_length) {
            Some(Outcome::Win { stone, line })
        } else if is_draw(&self.board) {
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => self.step += 1,
        }
        Ok(Turn { pos, stone, outcome })
    }

    /// Apply a move chosen by a human for a manual seat
    pub fn apply_manual_move(&mut self, pos: Pos) -> Result<Turn, MoveError> {
        if self.state == GameState::Running && self.current_kind() != Some(AgentKind::Manual) {
            return Err(MoveError::NotManualTurn);
        }
        self.apply_move(pos)
    }

    /// Ask the side to move for its move and apply it.
    pub fn play_turn(&mut self) -> Result<Turn, GameError> {
        if self.state != GameState::Running {
            return Err(MoveError::NotRunning.into());
        }
        let mut agent = self.take_agent()?;
        let choice = agent.play(&self.board, self.last_move, self.step);
        self.return_agent(agent);
        Ok(self.apply_move(choice?)?)
    }

    /// Play the current match to the end, starting one if needed.
    pub fn run_match(&mut self) -> Result<Outcome, GameError> {
        self.start();
        loop {
            if let Some(outcome) = self.play_turn()?.outcome {
                return Ok(outcome);
            }
        }
    }

    /// Whether the repeat setting asks for another match
    pub fn wants_rematch(&self) -> bool {
        self.state == GameState::Over
            && self
                .repeat
                .games()
                .is_some_and(|total| self.scoreboard.games() < total)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::Over;
        self.outcome = Some(outcome);
        self.scoreboard.record(&outcome);
        match outcome {
            Outcome::Win { stone, line } => info!(
                winner = stone.name(),
                start = %line.start,
                end = %line.end,
                steps = self.step + 1,
                "{}",
                self.scoreboard
            ),
            Outcome::Draw => info!(steps = self.step + 1, "no one won, {}", self.scoreboard),
        }
    }
}
