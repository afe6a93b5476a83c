use std::io::{self, BufRead, BufReader, Write};

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::AgentError;

use super::{Agent, AgentKind};

type BoxedReader = Box<dyn BufRead + Send>;
type BoxedWriter = Box<dyn Write + Send>;

/// A human player.
///
/// With a text channel attached, `play` prompts for `row,col` lines until a
/// valid empty cell arrives. A detached manual player has no channel: the
/// front end collects the move (e.g. from a board click) and `play` only
/// reports [`AgentError::AwaitingInput`].
pub struct ManualAgent<R = BoxedReader, W = BoxedWriter> {
    name: String,
    stone: Stone,
    io: Option<(R, W)>,
}

impl ManualAgent {
    /// Manual player reading from stdin and prompting on stdout
    pub fn stdio(name: &str, stone: Stone) -> Self {
        Self::with_io(name, stone, Box::new(BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn detached(name: &str, stone: Stone) -> Self {
        ManualAgent {
            name: name.to_string(),
            stone,
            io: None,
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> ManualAgent<R, W> {
    pub fn with_io(name: &str, stone: Stone, reader: R, writer: W) -> Self {
        ManualAgent {
            name: name.to_string(),
            stone,
            io: Some((reader, writer)),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.io.is_none()
    }
}

/// Parse `row,col` (whitespace around either number is ignored).
pub fn parse_position(line: &str) -> Option<(i32, i32)> {
    let (row, col) = line.trim().split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

impl<R: BufRead + Send, W: Write + Send> Agent for ManualAgent<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Manual
    }

    fn play(&mut self, board: &Board, _last_move: Option<Pos>, _step: usize) -> Result<Pos, AgentError> {
        let Some((reader, writer)) = self.io.as_mut() else {
            return Err(AgentError::AwaitingInput {
                name: self.name.clone(),
            });
        };
        if board.is_full() {
            return Err(AgentError::BoardFull);
        }

        let mut line = String::new();
        loop {
            write!(writer, "Input {} position(row,col): ", self.name)?;
            writer.flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed {
                    name: self.name.clone(),
                });
            }

            match parse_position(&line) {
                Some((row, col)) if board.is_valid(row, col) => {
                    let pos = Pos::new(row as u8, col as u8);
                    if board.is_empty(pos) {
                        debug!(name = %self.name, %pos, "manual move");
                        return Ok(pos);
                    }
                    writeln!(writer, "Error: The position is not empty! Try again.")?;
                }
                Some(_) => writeln!(writer, "Error: The position is outside the board! Try again.")?,
                None => writeln!(writer, "Error: Expected input like 7,8! Try again.")?,
            }
        }
    }
}
