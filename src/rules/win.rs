//! Win condition checking
//!
//! A stone wins when it completes a run of `run_length` (normally five)
//! stones on one of the four lines passing through the cell it was placed
//! on. Each line is walked in ascending index order and clipped to the
//! grid, so edge-proximate cells and non-square boards never read out of
//! bounds.

use crate::board::{Board, Pos, Stone};

/// The four scan lines through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fixed row
    Horizontal,
    /// Fixed column
    Vertical,
    /// `\` diagonal, constant `col - row`
    Diagonal,
    /// `/` diagonal, constant `col + row`
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row/column step between consecutive cells of the line
    #[inline]
    fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// All cells of the line through `pos` that lie inside the board
    pub fn line(self, board: &Board, pos: Pos) -> LineIter {
        let (row, col) = (pos.row as usize, pos.col as usize);
        let (rows, cols) = (board.rows(), board.cols());
        let (start, len) = match self {
            Direction::Horizontal => (Pos::new(pos.row, 0), cols),
            Direction::Vertical => (Pos::new(0, pos.col), rows),
            Direction::Diagonal => {
                let back = row.min(col);
                let (r0, c0) = (row - back, col - back);
                (Pos::new(r0 as u8, c0 as u8), (rows - r0).min(cols - c0))
            }
            Direction::AntiDiagonal => {
                let back = row.min(cols - 1 - col);
                let (r0, c0) = (row - back, col + back);
                (Pos::new(r0 as u8, c0 as u8), (rows - r0).min(c0 + 1))
            }
        };
        LineIter {
            next: start,
            step: self.step(),
            remaining: len,
        }
    }
}

/// Iterator over the cells of one clipped line
#[derive(Debug, Clone)]
pub struct LineIter {
    next: Pos,
    step: (i32, i32),
    remaining: usize,
}

impl Iterator for LineIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            let (dr, dc) = self.step;
            self.next = Pos::new(
                (current.row as i32 + dr) as u8,
                (current.col as i32 + dc) as u8,
            );
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineIter {}

/// First and last cell of a winning run, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub start: Pos,
    pub end: Pos,
}

/// Check whether `stone`, just placed at `pos`, completed a run of
/// `run_length` on any line through `pos`.
///
/// Returns the endpoints of the first winning run found, used by the front
/// ends to highlight the result. For runs longer than `run_length` the
/// endpoints cover the first `run_length` cells of the run.
pub fn check_win(board: &Board, stone: Stone, pos: Pos, run_length: usize) -> Option<WinLine> {
    debug_assert_eq!(
        board.get(pos),
        Some(stone),
        "win check at {pos} which does not hold {stone:?}"
    );

    for dir in Direction::ALL {
        let mut count = 0;
        let mut start = pos;
        for cell in dir.line(board, pos) {
            if board.get(cell) == Some(stone) {
                if count == 0 {
                    start = cell;
                }
                count += 1;
                if count == run_length {
                    return Some(WinLine { start, end: cell });
                }
            } else {
                count = 0;
            }
        }
    }
    None
}

/// Value-only variant of [`check_win`] for the search hot path.
#[inline]
pub fn has_run(board: &Board, stone: Stone, pos: Pos, run_length: usize) -> bool {
    Direction::ALL.iter().any(|dir| {
        let mut count = 0;
        dir.line(board, pos).any(|cell| {
            if board.at(board.index_of(cell)) == stone {
                count += 1;
            } else {
                count = 0;
            }
            count == run_length
        })
    })
}

/// A board with no empty cell and no winner is a draw. Callers check this
/// separately from [`check_win`], which only looks at lines through one cell.
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PIECES_IN_LINE;
    use quickcheck::{quickcheck, TestResult};

    fn board_with(size: usize, stones: &[(u8, u8)], stone: Stone) -> Board {
        let mut board = Board::square(size);
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), stone);
        }
        board
    }

    #[test]
    fn test_five_horizontal() {
        let stones: Vec<(u8, u8)> = (2..7).map(|c| (4, c)).collect();
        let board = board_with(9, &stones, Stone::Black);
        for c in 2..7 {
            let line = check_win(&board, Stone::Black, Pos::new(4, c), PIECES_IN_LINE);
            assert_eq!(
                line,
                Some(WinLine { start: Pos::new(4, 2), end: Pos::new(4, 6) })
            );
        }
    }

    #[test]
    fn test_five_vertical() {
        let stones: Vec<(u8, u8)> = (0..5).map(|r| (r, 8)).collect();
        let board = board_with(9, &stones, Stone::White);
        let line = check_win(&board, Stone::White, Pos::new(2, 8), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(0, 8), end: Pos::new(4, 8) }));
    }

    #[test]
    fn test_five_diagonal() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (3 + i, 1 + i)).collect();
        let board = board_with(9, &stones, Stone::Black);
        let line = check_win(&board, Stone::Black, Pos::new(5, 3), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(3, 1), end: Pos::new(7, 5) }));
    }

    #[test]
    fn test_five_anti_diagonal() {
        // From (4, 8) down-left to (8, 4)
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (4 + i, 8 - i)).collect();
        let board = board_with(9, &stones, Stone::White);
        let line = check_win(&board, Stone::White, Pos::new(6, 6), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(4, 8), end: Pos::new(8, 4) }));
    }

    #[test]
    fn test_four_not_win() {
        let stones: Vec<(u8, u8)> = (0..4).map(|c| (4, c)).collect();
        let board = board_with(9, &stones, Stone::Black);
        assert_eq!(check_win(&board, Stone::Black, Pos::new(4, 3), PIECES_IN_LINE), None);
        assert!(!has_run(&board, Stone::Black, Pos::new(4, 3), PIECES_IN_LINE));
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_with(9, &[(4, 0), (4, 1), (4, 2), (4, 4), (4, 5)], Stone::Black);
        assert_eq!(check_win(&board, Stone::Black, Pos::new(4, 2), PIECES_IN_LINE), None);
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = board_with(9, &[(1, 1), (2, 2), (4, 4), (5, 5), (6, 6)], Stone::White);
        board.place_stone(Pos::new(3, 3), Stone::Black);
        assert!(!has_run(&board, Stone::White, Pos::new(4, 4), PIECES_IN_LINE));
    }

    #[test]
    fn test_six_in_row_reports_first_five() {
        let stones: Vec<(u8, u8)> = (1..7).map(|c| (0, c)).collect();
        let board = board_with(9, &stones, Stone::Black);
        let line = check_win(&board, Stone::Black, Pos::new(0, 6), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(0, 1), end: Pos::new(0, 5) }));
    }

    #[test]
    fn test_corner_diagonals() {
        let stones: Vec<(u8, u8)> = (0..5).map(|i| (14 + i, 14 + i)).collect();
        let board = board_with(19, &stones, Stone::White);
        assert!(has_run(&board, Stone::White, Pos::new(18, 18), PIECES_IN_LINE));

        let stones: Vec<(u8, u8)> = (0..5).map(|i| (14 + i, 4 - i)).collect();
        let board = board_with(19, &stones, Stone::Black);
        let line = check_win(&board, Stone::Black, Pos::new(18, 0), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(14, 4), end: Pos::new(18, 0) }));
    }

    #[test]
    fn test_non_square_diagonals() {
        // 6 rows, 12 columns: the `/` line through (5, 7) has only 5 cells
        let mut board = Board::new(6, 12);
        for i in 0..5u8 {
            board.place_stone(Pos::new(1 + i, 11 - i), Stone::Black);
        }
        let line = check_win(&board, Stone::Black, Pos::new(5, 7), PIECES_IN_LINE);
        assert_eq!(line, Some(WinLine { start: Pos::new(1, 11), end: Pos::new(5, 7) }));

        let mut board = Board::new(12, 6);
        for i in 0..5u8 {
            board.place_stone(Pos::new(7 + i, i), Stone::White);
        }
        assert!(has_run(&board, Stone::White, Pos::new(11, 4), PIECES_IN_LINE));
    }

    #[test]
    fn test_line_lengths_clipped() {
        let board = Board::new(6, 12);
        assert_eq!(Direction::Horizontal.line(&board, Pos::new(2, 3)).len(), 12);
        assert_eq!(Direction::Vertical.line(&board, Pos::new(2, 3)).len(), 6);
        assert_eq!(Direction::Diagonal.line(&board, Pos::new(0, 11)).len(), 1);
        assert_eq!(Direction::Diagonal.line(&board, Pos::new(5, 5)).len(), 6);
        assert_eq!(Direction::AntiDiagonal.line(&board, Pos::new(0, 0)).len(), 1);
        assert_eq!(Direction::AntiDiagonal.line(&board, Pos::new(5, 11)).len(), 1);
        assert_eq!(Direction::AntiDiagonal.line(&board, Pos::new(5, 6)).len(), 6);

        let cells: Vec<_> = Direction::AntiDiagonal.line(&board, Pos::new(1, 1)).collect();
        assert_eq!(cells, vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
    }

    #[test]
    fn test_run_length_parameter() {
        let board = board_with(9, &[(2, 2), (2, 3), (2, 4)], Stone::Black);
        assert!(has_run(&board, Stone::Black, Pos::new(2, 3), 3));
        assert!(!has_run(&board, Stone::Black, Pos::new(2, 3), 4));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::square(5);
        assert!(!is_draw(&board));
        let cells: Vec<_> = board.empty_cells().collect();
        for pos in cells {
            let stone = if (pos.row / 2 + pos.col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        assert!(is_draw(&board));
    }

    /// Dihedral transforms of a square board
    fn transform(pos: Pos, size: u8, kind: u8) -> Pos {
        let (r, c, n) = (pos.row, pos.col, size - 1);
        match kind % 8 {
            0 => Pos::new(r, c),
            1 => Pos::new(c, n - r),
            2 => Pos::new(n - r, n - c),
            3 => Pos::new(n - c, r),
            4 => Pos::new(r, n - c),
            5 => Pos::new(n - r, c),
            6 => Pos::new(c, r),
            _ => Pos::new(n - c, n - r),
        }
    }

    quickcheck! {
        fn prop_win_check_symmetric(cells: Vec<(u8, u8, bool)>, query: (u8, u8), kind: u8) -> TestResult {
            const SIZE: u8 = 9;
            let mut board = Board::square(SIZE as usize);
            let mut mirrored = Board::square(SIZE as usize);
            for (r, c, black) in cells {
                let pos = Pos::new(r % SIZE, c % SIZE);
                let stone = if black { Stone::Black } else { Stone::White };
                if board.is_empty(pos) {
                    board.place_stone(pos, stone);
                    mirrored.place_stone(transform(pos, SIZE, kind), stone);
                }
            }
            let query = Pos::new(query.0 % SIZE, query.1 % SIZE);
            let stone = match board.get(query) {
                Some(Stone::Empty) | None => return TestResult::discard(),
                Some(stone) => stone,
            };
            let mirrored_query = transform(query, SIZE, kind);
            let original = check_win(&board, stone, query, PIECES_IN_LINE).is_some();
            let reflected = check_win(&mirrored, stone, mirrored_query, PIECES_IN_LINE).is_some();
            TestResult::from_bool(
                original == reflected
                    && original == has_run(&board, stone, query, PIECES_IN_LINE)
            )
        }

        fn prop_no_win_without_five(cells: Vec<(u8, u8)>, query: (u8, u8)) -> TestResult {
            // Striped pattern with runs of at most two in every direction
            const SIZE: u8 = 9;
            let mut board = Board::square(SIZE as usize);
            for (r, c) in cells {
                let pos = Pos::new(r % SIZE, c % SIZE);
                if board.is_empty(pos) {
                    let stripe = (pos.row as usize + 2 * pos.col as usize) % 4;
                    let stone = if stripe < 2 { Stone::Black } else { Stone::White };
                    board.place_stone(pos, stone);
                }
            }
            let query = Pos::new(query.0 % SIZE, query.1 % SIZE);
            match board.get(query) {
                Some(Stone::Empty) | None => TestResult::discard(),
                Some(stone) => TestResult::from_bool(!has_run(&board, stone, query, PIECES_IN_LINE)),
            }
        }
    }
}
