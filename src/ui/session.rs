//! Match orchestration behind the GUI
//!
//! Manual seats move by board clicks. Every other seat is lent to a worker
//! thread for its turn and comes back, with its move, over an mpsc channel,
//! so the window keeps repainting while the search runs.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::agent::{Agent, AgentKind};
use crate::board::{Pos, Stone};
use crate::config::GameConfig;
use crate::error::AgentError;
use crate::game::{Game, GameState, Outcome, RepeatCount, Turn};
use crate::search::SearchResult;

/// Pause before the next match of a repeat run starts
const REMATCH_DELAY: Duration = Duration::from_millis(100);

/// A finished `play` call coming back from the worker thread
struct WorkerReply {
    agent: Box<dyn Agent>,
    choice: Result<Pos, AgentError>,
    elapsed: Duration,
}

enum Worker {
    Idle,
    Thinking {
        receiver: Receiver<WorkerReply>,
        start_time: Instant,
    },
}

pub struct Session {
    pub game: Game,
    config: GameConfig,
    /// Menu selection per seat, applied at the next start
    pub seat_kinds: [AgentKind; 2],
    worker: Worker,
    rematch_at: Option<Instant>,
    pub log: Vec<String>,
    pub message: String,
    pub last_search: Option<SearchResult>,
    pub last_think_time: Option<Duration>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let seat_kinds = [AgentKind::Manual, AgentKind::Manual];
        Self {
            game: Game::with_kinds(&config, seat_kinds[0], seat_kinds[1]),
            config,
            seat_kinds,
            worker: Worker::Idle,
            rematch_at: None,
            log: Vec::new(),
            message: "Ready.".to_string(),
            last_search: None,
            last_think_time: None,
        }
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self.worker, Worker::Thinking { .. })
    }

    pub fn thinking_elapsed(&self) -> Option<Duration> {
        match &self.worker {
            Worker::Thinking { start_time, .. } => Some(start_time.elapsed()),
            Worker::Idle => None,
        }
    }

    /// Stone a click would place, if the side to move is a manual seat
    pub fn click_stone(&self) -> Option<Stone> {
        let manual = self.game.state() == GameState::Running
            && !self.is_thinking()
            && self.game.current_kind() == Some(AgentKind::Manual);
        manual.then(|| self.game.current_stone())
    }

    pub fn set_repeat(&mut self, repeat: RepeatCount) {
        self.game.set_repeat(repeat);
    }

    /// Start a match unless one is running
    pub fn start(&mut self) {
        if self.game.state() == GameState::Running {
            return;
        }
        self.new_match();
        self.message = "Start.".to_string();
    }

    /// Abandon the current match, if any, and start a fresh one
    pub fn restart(&mut self) {
        self.new_match();
        self.message = "Restart.".to_string();
    }

    fn new_match(&mut self) {
        // Any search still running belongs to the abandoned match
        self.worker = Worker::Idle;
        self.rematch_at = None;

        let stream = 2 * self.game.scoreboard().games() as u64;
        for (i, stone) in [Stone::Black, Stone::White].into_iter().enumerate() {
            let agent = self.seat_kinds[i].build(stone.name(), stone, &self.config, stream + i as u64);
            self.game.set_agent(agent);
        }
        self.game.restart();
        info!(black = %self.seat_kinds[0], white = %self.seat_kinds[1], "match started from menu");
    }

    /// Board click from the canvas
    pub fn click(&mut self, pos: Pos) {
        if self.is_thinking() {
            return;
        }
        match self.game.apply_manual_move(pos) {
            Ok(turn) => self.after_turn(turn),
            Err(err) => {
                self.log.push(format!("{err}. try again."));
            }
        }
    }

    /// Advance background work; call once per frame.
    pub fn poll(&mut self) {
        self.collect_reply();

        if let Some(at) = self.rematch_at {
            if Instant::now() >= at {
                self.restart();
            }
        }

        let ai_turn = self.game.state() == GameState::Running
            && matches!(self.game.current_kind(), Some(kind) if kind != AgentKind::Manual);
        if ai_turn && !self.is_thinking() {
            self.spawn_worker();
        }
    }

    fn spawn_worker(&mut self) {
        let mut agent = match self.game.take_agent() {
            Ok(agent) => agent,
            Err(err) => {
                warn!(%err, "cannot start search");
                return;
            }
        };
        let board = self.game.board().clone();
        let last_move = self.game.last_move();
        let step = self.game.step();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let start_time = Instant::now();
            let choice = agent.play(&board, last_move, step);
            let _ = tx.send(WorkerReply {
                agent,
                choice,
                elapsed: start_time.elapsed(),
            });
        });

        self.worker = Worker::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    fn collect_reply(&mut self) {
        let reply = match &self.worker {
            Worker::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.worker = Worker::Idle;
                    self.message = "AI error".to_string();
                    return;
                }
            },
            Worker::Idle => return,
        };
        self.worker = Worker::Idle;

        self.last_search = reply.agent.last_search();
        self.last_think_time = Some(reply.elapsed);
        let name = reply.agent.name().to_string();
        self.game.return_agent(reply.agent);

        let applied = reply
            .choice
            .map_err(|err| err.to_string())
            .and_then(|pos| self.game.apply_move(pos).map_err(|err| err.to_string()));
        match applied {
            Ok(turn) => self.after_turn(turn),
            Err(err) => {
                warn!(%name, %err, "agent failed to move");
                self.message = format!("{name} could not move: {err}");
            }
        }
    }

    fn after_turn(&mut self, turn: Turn) {
        let Some(outcome) = turn.outcome else {
            let next = self.game.current_stone();
            self.message = format!("{}'s turn", next.name());
            return;
        };

        self.message = match outcome {
            Outcome::Win { stone, .. } => format!("{} won. Game Over.", stone.name()),
            Outcome::Draw => "No one won. Game Over.".to_string(),
        };
        let score = self.game.scoreboard();
        self.log.push(format!(
            "won times: {}, {}",
            score.wins(Stone::Black),
            score.wins(Stone::White)
        ));

        if self.game.wants_rematch() {
            self.rematch_at = Some(Instant::now() + REMATCH_DELAY);
        }
    }
}
