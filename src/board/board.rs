//! Board structure: an M x N grid of stones

use super::{Pos, Stone, PIECES_IN_LINE};

/// Game board
///
/// Cells are stored row-major, so a position's linear index is
/// `row * cols + col`. The board never changes shape after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `rows` x `cols` board.
    ///
    /// # Panics
    ///
    /// Panics if either side is shorter than a winning line, or if a side
    /// does not fit the `u8` coordinates of [`Pos`].
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= PIECES_IN_LINE && cols >= PIECES_IN_LINE,
            "board {rows}x{cols} is smaller than a winning line"
        );
        assert!(rows <= 256 && cols <= 256, "board {rows}x{cols} is too large");
        Self {
            rows,
            cols,
            cells: vec![Stone::Empty; rows * cols],
        }
    }

    /// Square board with `size` rows and columns
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Linear index of a position
    #[inline]
    pub fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos} is outside the board");
        pos.row as usize * self.cols + pos.col as usize
    }

    /// Position of a linear index
    #[inline]
    pub fn pos_of(&self, idx: usize) -> Pos {
        debug_assert!(idx < self.cells.len());
        Pos::new((idx / self.cols) as u8, (idx % self.cols) as u8)
    }

    /// Get stone at position, `None` when out of bounds
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos) {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Get stone by linear index
    #[inline]
    pub fn at(&self, idx: usize) -> Stone {
        self.cells[idx]
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone on an empty cell.
    ///
    /// # Panics
    ///
    /// Placing outside the board, on an occupied cell, or placing `Empty`
    /// is a contract violation.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        assert!(stone != Stone::Empty, "cannot place an empty stone at {pos}");
        assert!(self.is_empty(pos), "cannot place {stone:?} at occupied or invalid {pos}");
        let idx = self.index_of(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone, restoring the cell to `Empty`
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index_of(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Center cell (rounded towards the origin)
    pub fn center(&self) -> Pos {
        Pos::new((self.rows / 2) as u8, (self.cols / 2) as u8)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell holds a stone
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Empty cells in ascending index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == Stone::Empty)
            .map(move |(idx, _)| self.pos_of(idx))
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = format!("{}{}", "=".repeat(8), "===".repeat(self.cols));
        let sep = format!("---+{}+---", "---".repeat(self.cols));
        let mut header = String::from("   |");
        for col in 0..self.cols {
            header.push_str(&format!("{col:2} "));
        }
        header.push('|');

        writeln!(f, "{rule}")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{sep}")?;
        for row in 0..self.rows {
            write!(f, "{row:2} |")?;
            for col in 0..self.cols {
                write!(f, " {} ", self.cells[row * self.cols + col].glyph())?;
            }
            writeln!(f, "|{row:2}")?;
        }
        writeln!(f, "{sep}")?;
        writeln!(f, "{header}")?;
        write!(f, "{rule}")
    }
}
