/// Length of a winning run, and of every scored window.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A square Connect Four board of runtime size.
///
/// Row 0 is the bottom row; pieces stack upward, so the topmost cell of a
/// column is at row `size - 1`. A `Board` is a plain value: the search clones
/// it freely and sibling branches never alias each other's grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of bounds")]
    OutOfBounds(usize),
}

impl Board {
    /// Create a new empty `size` x `size` board.
    ///
    /// Panics if the board cannot fit a four-in-a-row.
    pub fn new(size: usize) -> Self {
        assert!(size >= WIN_LENGTH, "board size {size} cannot fit a four-in-a-row");
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the center column.
    pub fn center_column(&self) -> usize {
        self.size / 2
    }

    /// Get the cell at a position. Row 0 is the bottom row.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Check whether a piece can be dropped in `col`.
    pub fn is_legal(&self, col: usize) -> bool {
        col < self.size && self.get(self.size - 1, col) == Cell::Empty
    }

    /// All playable columns, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.size).filter(|&col| self.is_legal(col)).collect()
    }

    /// Whether at least one column is still playable.
    pub fn has_legal_move(&self) -> bool {
        (0..self.size).any(|col| self.is_legal(col))
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        !self.has_legal_move()
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.size {
            return Err(MoveError::OutOfBounds(col));
        }
        if !self.is_legal(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in 0..self.size {
            if self.get(row, col) == Cell::Empty {
                self.cells[row * self.size + col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column {col} has an empty top cell but no empty row");
    }

    /// Copy the board and drop a piece on the copy.
    ///
    /// This is the move form the search uses: the receiver is never touched,
    /// so hypothetical lines stay confined to their own snapshots.
    pub fn with_move(&self, col: usize, cell: Cell) -> Result<Board, MoveError> {
        let mut next = self.clone();
        next.drop_piece(col, cell)?;
        Ok(next)
    }

    /// Check whether `cell` has four in a row anywhere on the board.
    ///
    /// Scans every window in all four orientations independently; it makes
    /// no assumption that at most one side can have a run.
    pub fn has_four_in_row(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }
        let n = self.size;

        // Horizontal
        for row in 0..n {
            for col in 0..n - 3 {
                if (0..WIN_LENGTH).all(|i| self.get(row, col + i) == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..n {
            for row in 0..n - 3 {
                if (0..WIN_LENGTH).all(|i| self.get(row + i, col) == cell) {
                    return true;
                }
            }
        }

        // Rising diagonal
        for row in 0..n - 3 {
            for col in 0..n - 3 {
                if (0..WIN_LENGTH).all(|i| self.get(row + i, col + i) == cell) {
                    return true;
                }
            }
        }

        // Falling diagonal
        for row in 0..n - 3 {
            for col in 0..n - 3 {
                if (0..WIN_LENGTH).all(|i| self.get(row + 3 - i, col + i) == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// Check if the game is decided: a four-in-a-row exists or no move remains.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_row(Cell::Red) || self.has_four_in_row(Cell::Yellow) || self.is_full()
    }
}
