use std::fmt;

use crate::board::Stone;

use super::Outcome;

/// How many matches to play back to back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepeatCount {
    /// Single match
    #[default]
    None,
    Games200,
    Games400,
    Games800,
    Games1600,
}

impl RepeatCount {
    pub const ALL: [RepeatCount; 5] = [
        RepeatCount::None,
        RepeatCount::Games200,
        RepeatCount::Games400,
        RepeatCount::Games800,
        RepeatCount::Games1600,
    ];

    /// Total number of matches, or `None` for a single match
    pub fn games(self) -> Option<usize> {
        match self {
            RepeatCount::None => None,
            RepeatCount::Games200 => Some(200),
            RepeatCount::Games400 => Some(400),
            RepeatCount::Games800 => Some(800),
            RepeatCount::Games1600 => Some(1600),
        }
    }

    pub fn label(self) -> String {
        self.games().map_or_else(|| "None".to_string(), |n| n.to_string())
    }
}

/// Win tallies per seat across matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    black_wins: usize,
    white_wins: usize,
    draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { stone: Stone::Black, .. } => self.black_wins += 1,
            Outcome::Win { stone: Stone::White, .. } => self.white_wins += 1,
            Outcome::Win { stone: Stone::Empty, .. } => unreachable!("empty cells never win"),
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, stone: Stone) -> usize {
        match stone {
            Stone::Black => self.black_wins,
            Stone::White => self.white_wins,
            Stone::Empty => 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Finished matches
    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "won times: {}, {} (draws: {}, games: {})",
            self.black_wins,
            self.white_wins,
            self.draws,
            self.games()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::WinLine;

    fn win(stone: Stone) -> Outcome {
        Outcome::Win {
            stone,
            line: WinLine {
                start: Pos::new(0, 0),
                end: Pos::new(0, 4),
            },
        }
    }

    #[test]
    fn test_scoreboard_tallies() {
        let mut score = Scoreboard::default();
        score.record(&win(Stone::Black));
        score.record(&win(Stone::Black));
        score.record(&win(Stone::White));
        score.record(&Outcome::Draw);

        assert_eq!(score.wins(Stone::Black), 2);
        assert_eq!(score.wins(Stone::White), 1);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.games(), 4);
        assert_eq!(score.to_string(), "won times: 2, 1 (draws: 1, games: 4)");

        score.clear();
        assert_eq!(score.games(), 0);
    }

    #[test]
    fn test_repeat_counts() {
        let games: Vec<_> = RepeatCount::ALL.iter().map(|r| r.games()).collect();
        assert_eq!(games, vec![None, Some(200), Some(400), Some(800), Some(1600)]);
        assert_eq!(RepeatCount::None.label(), "None");
        assert_eq!(RepeatCount::Games800.label(), "800");
    }
}
