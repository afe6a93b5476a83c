//! Search frontier: the empty cells worth considering
//!
//! Instead of enumerating the whole board, the search only looks at empty
//! cells within a small Chebyshev radius (the span) of stones already on
//! the board. The set is grown incrementally as stones are placed.
//!
//! Indices are kept in a `BTreeSet`, so iteration is in ascending
//! row-major order and the search is reproducible for a fixed RNG seed.

use std::collections::BTreeSet;

use crate::board::{Board, Pos, Stone};

/// Default Chebyshev radius around a new stone
pub const DEFAULT_SPAN: usize = 1;

/// Set of linear indices of candidate (empty) cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    indices: BTreeSet<usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frontier from scratch around a single stone
    pub fn init(board: &Board, pos: Pos, span: usize) -> Self {
        let mut frontier = Self::new();
        frontier.update(board, pos, span);
        frontier
    }

    /// Rebuild a frontier around every stone on the board
    pub fn from_board(board: &Board, span: usize) -> Self {
        let mut frontier = Self::new();
        for idx in 0..board.area() {
            if board.at(idx) != Stone::Empty {
                frontier.extend_around(board, board.pos_of(idx), span);
            }
        }
        frontier.indices.retain(|&idx| board.at(idx) == Stone::Empty);
        frontier
    }

    /// Union in the empty cells within `span` of `pos` and drop `pos`.
    ///
    /// Cells that became occupied since the last update are dropped too,
    /// so the set only ever holds empty cells after this call.
    pub fn update(&mut self, board: &Board, pos: Pos, span: usize) {
        self.extend_around(board, pos, span);
        self.indices.remove(&board.index_of(pos));
        self.indices.retain(|&idx| board.at(idx) == Stone::Empty);
    }

    /// Copy of `self` updated around `pos`, used for speculative plies.
    /// Like [`Frontier::update`], the copy only holds empty cells.
    pub(super) fn updated(&self, board: &Board, pos: Pos, span: usize) -> Self {
        let mut next = self.clone();
        next.update(board, pos, span);
        next
    }

    /// Add the empty cells of the square window around `pos`, clipped to
    /// the board.
    fn extend_around(&mut self, board: &Board, pos: Pos, span: usize) {
        let (row, col) = (pos.row as usize, pos.col as usize);
        let row_lo = row.saturating_sub(span);
        let row_hi = (row + span).min(board.rows() - 1);
        let col_lo = col.saturating_sub(span);
        let col_hi = (col + span).min(board.cols() - 1);

        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                let idx = r * board.cols() + c;
                if board.at(idx) == Stone::Empty {
                    self.indices.insert(idx);
                }
            }
        }
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.indices.contains(&idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Candidate indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Candidate positions in ascending order
    pub fn positions<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Pos> + 'a {
        self.indices.iter().map(move |&idx| board.pos_of(idx))
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_init_single_stone() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);

        let frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);
        let cells: Vec<_> = frontier.positions(&board).collect();

        assert_eq!(frontier.len(), 8);
        assert!(!frontier.contains(board.index_of(Pos::new(4, 4))));
        assert_eq!(
            cells,
            vec![
                Pos::new(3, 3),
                Pos::new(3, 4),
                Pos::new(3, 5),
                Pos::new(4, 3),
                Pos::new(4, 5),
                Pos::new(5, 3),
                Pos::new(5, 4),
                Pos::new(5, 5),
            ]
        );
    }

    #[test]
    fn test_init_clipped_at_corner() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(0, 8), Stone::White);

        let frontier = Frontier::init(&board, Pos::new(0, 8), DEFAULT_SPAN);
        let cells: Vec<_> = frontier.positions(&board).collect();
        assert_eq!(cells, vec![Pos::new(0, 7), Pos::new(1, 7), Pos::new(1, 8)]);
    }

    #[test]
    fn test_wider_span() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);

        let frontier = Frontier::init(&board, Pos::new(4, 4), 2);
        assert_eq!(frontier.len(), 24);
    }

    #[test]
    fn test_update_unions_and_removes_move() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let mut frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);

        board.place_stone(Pos::new(4, 5), Stone::White);
        frontier.update(&board, Pos::new(4, 5), DEFAULT_SPAN);

        // 3x4 window around both stones minus the two stones
        assert_eq!(frontier.len(), 10);
        assert!(!frontier.contains(board.index_of(Pos::new(4, 5))));
        assert!(frontier.contains(board.index_of(Pos::new(3, 6))));
    }

    #[test]
    fn test_update_idempotent() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(2, 2), Stone::Black);
        let mut frontier = Frontier::init(&board, Pos::new(2, 2), DEFAULT_SPAN);
        let before = frontier.clone();

        frontier.update(&board, Pos::new(2, 2), DEFAULT_SPAN);
        assert_eq!(frontier, before);
    }

    #[test]
    fn test_update_drops_stale_cells() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let mut frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);

        // A stone the frontier never heard about, then an update elsewhere
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        frontier.update(&board, Pos::new(0, 0), DEFAULT_SPAN);

        assert!(!frontier.contains(board.index_of(Pos::new(3, 3))));
    }

    #[test]
    fn test_updated_drops_stale_cells() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);

        // (3, 3) was filled without the frontier hearing about it
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(5, 5), Stone::Black);
        let next = frontier.updated(&board, Pos::new(5, 5), DEFAULT_SPAN);

        assert!(!next.contains(board.index_of(Pos::new(3, 3))));
        assert!(next.iter().all(|idx| board.at(idx) == Stone::Empty));
    }

    #[test]
    fn test_updated_leaves_original() {
        let mut board = Board::square(9);
        board.place_stone(Pos::new(4, 4), Stone::Black);
        let frontier = Frontier::init(&board, Pos::new(4, 4), DEFAULT_SPAN);

        board.place_stone(Pos::new(5, 5), Stone::White);
        let next = frontier.updated(&board, Pos::new(5, 5), DEFAULT_SPAN);

        assert_eq!(frontier.len(), 8);
        assert!(!next.contains(board.index_of(Pos::new(5, 5))));
        assert!(next.contains(board.index_of(Pos::new(6, 6))));
    }

    #[test]
    fn test_from_board_matches_incremental() {
        let mut board = Board::square(9);
        let mut frontier = Frontier::new();
        for (pos, stone) in [
            (Pos::new(4, 4), Stone::Black),
            (Pos::new(4, 5), Stone::White),
            (Pos::new(6, 2), Stone::Black),
        ] {
            board.place_stone(pos, stone);
            frontier.update(&board, pos, DEFAULT_SPAN);
        }
        assert_eq!(Frontier::from_board(&board, DEFAULT_SPAN), frontier);
        assert!(Frontier::from_board(&Board::square(9), DEFAULT_SPAN).is_empty());
    }

    #[test]
    fn test_full_neighbourhood_gives_empty_frontier() {
        let mut board = Board::square(5);
        let cells: Vec<_> = board.empty_cells().collect();
        for (i, pos) in cells.into_iter().enumerate() {
            board.place_stone(pos, if i % 2 == 0 { Stone::Black } else { Stone::White });
        }
        let frontier = Frontier::init(&board, Pos::new(2, 2), DEFAULT_SPAN);
        assert!(frontier.is_empty());
    }

    quickcheck! {
        fn prop_update_never_holds_occupied(moves: Vec<(u8, u8)>, span: u8) -> bool {
            let span = (span % 3) as usize;
            let mut board = Board::square(9);
            let mut frontier = Frontier::new();
            let mut stone = Stone::Black;
            for (r, c) in moves {
                let pos = Pos::new(r % 9, c % 9);
                if !board.is_empty(pos) {
                    continue;
                }
                board.place_stone(pos, stone);
                frontier.update(&board, pos, span);
                stone = stone.opponent();
                if frontier.iter().any(|idx| board.at(idx) != Stone::Empty) {
                    return false;
                }
            }
            true
        }
    }
}
