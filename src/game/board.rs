use std::fmt;

use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of contiguous marks that wins the game.
pub const WIN_LENGTH: usize = 4;

/// The symbol a player leaves in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A 0-indexed board coordinate. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Line directions checked for a win: horizontal, vertical, `\` and `/`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Board {
            cells: vec![vec![Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from explicit rows, top row first.
    ///
    /// The grid must be rectangular and non-empty. Cell contents are taken as
    /// given; callers resuming a game are expected to supply a grid that
    /// already respects gravity.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        Ok(Board { cells: rows })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, the last row is the bottom
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// A column is available while its top cell is empty.
    pub fn is_column_available(&self, col: usize) -> bool {
        col < self.cols() && self.cells[0][col].is_empty()
    }

    /// Columns that accept another drop, ascending.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&col| self.is_column_available(col))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.available_columns().is_empty()
    }

    /// Find where a piece dropped into `col` would land.
    pub fn resolve_drop(&self, col: usize) -> Result<Position, MoveError> {
        if col >= self.cols() {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.is_column_available(col) {
            return Err(MoveError::ColumnFull(col));
        }

        (0..self.rows())
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .map(|row| Position::new(row, col))
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Write a mark into a cell.
    ///
    /// `pos` must come from [`Board::resolve_drop`] against the current board;
    /// no gravity check happens here.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = Cell::Occupied(mark);
    }

    /// Length of the longest run of `mark` through `pos` along any line.
    ///
    /// Zero unless `pos` itself holds `mark`. Neighbours are counted outward in
    /// both senses until a different cell or the edge of the board.
    pub fn longest_run_through(&self, pos: Position, mark: Mark) -> usize {
        if self.get(pos) != Cell::Occupied(mark) {
            return 0;
        }

        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| {
                1 + self.count_from(pos, dr, dc, mark) + self.count_from(pos, -dr, -dc, mark)
            })
            .max()
            .unwrap_or(1)
    }

    /// True iff `pos` is part of a winning line of `mark`.
    pub fn is_winning_position(&self, pos: Position, mark: Mark) -> bool {
        self.longest_run_through(pos, mark) >= WIN_LENGTH
    }

    fn count_from(&self, pos: Position, dr: isize, dc: isize, mark: Mark) -> usize {
        let mut count = 0;
        let mut r = pos.row as isize + dr;
        let mut c = pos.col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows()
            && (c as usize) < self.cols()
            && self.cells[r as usize][c as usize] == Cell::Occupied(mark)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text board: a header of 1-indexed column labels, then one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for col in 1..=self.cols() {
            write!(f, " {col} |")?;
        }
        writeln!(f)?;

        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, "   |")?,
                    Cell::Occupied(mark) => write!(f, " {mark} |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
