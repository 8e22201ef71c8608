pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
const WIN_LENGTH: usize = 4;

/// The four axis directions a run can lie along, as (row, col) steps:
/// horizontal, vertical, diagonal ascending, diagonal descending.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom row, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column can take another disc, i.e. its top cell is empty.
    /// Out-of-range columns are reported as not playable; `drop_piece`
    /// distinguishes them with `DropError::InvalidColumn`.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Drop a disc in a column, returns the row where it landed.
    /// Gravity fills a column from row 0 upward: the disc occupies the
    /// lowest empty row.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        debug_assert!(cell != Cell::Empty, "dropped marker must belong to a player");

        if col >= COLS {
            return Err(DropError::InvalidColumn(col));
        }

        if !self.is_column_playable(col) {
            return Err(DropError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in 0..ROWS {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column {col} reported playable but has no empty row");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_playable(col))
    }

    /// Check whether `cell` owns a run of four or more consecutive cells
    /// along any of the four axis directions.
    pub fn has_winning_run(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&step| {
            (0..ROWS).any(|row| (0..COLS).any(|col| self.run_from(cell, row, col, step)))
        })
    }

    /// True when the four cells starting at (row, col) and stepping by
    /// `step` all lie on the board and all hold `cell`. A run longer than
    /// four contains a window of four, so scanning every start is enough.
    fn run_from(&self, cell: Cell, row: usize, col: usize, step: (isize, isize)) -> bool {
        let (row_step, col_step) = step;
        (0..WIN_LENGTH as isize).all(|i| {
            let r = row as isize + row_step * i;
            let c = col as isize + col_step * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
