use crate::error::InputError;

use super::player::PlayerId;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Chips in a line needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owner(PlayerId),
}

impl Cell {
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owner(id) => Some(id),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Result of checking whether a column can take another chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCheck {
    /// Column is on the board and has room; holds the 1-based column number.
    Playable(usize),
    /// Not a number, or not in `1..=COLS`.
    OutOfRange,
    /// Column number is valid but its top cell is taken.
    Full,
}

impl ColumnCheck {
    pub fn is_playable(self) -> bool {
        matches!(self, ColumnCheck::Playable(_))
    }

    pub fn into_result(self) -> Result<usize, InputError> {
        match self {
            ColumnCheck::Playable(column) => Ok(column),
            ColumnCheck::OutOfRange => Err(InputError::InvalidColumnFormat),
            ColumnCheck::Full => Err(InputError::ColumnFull),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(PlayerId),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// The 6x7 grid. Row 0 is the bottom row, chips settle from there upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from rows given bottom-up, `0` for empty and `1`/`2` for
    /// owners. Gravity is not enforced.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [[u8; COLS]; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = match PlayerId::from_number(value) {
                    Some(id) => Cell::Owner(id),
                    None => Cell::Empty,
                };
            }
        }
        board
    }

    /// Get the cell at a 0-based position, row 0 being the bottom.
    ///
    /// Panics if the position is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows in display order, top row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell; COLS]> + '_ {
        self.cells.iter().rev()
    }

    /// Classify raw user text as a column choice.
    pub fn check_column(&self, raw: &str) -> ColumnCheck {
        match raw.trim().parse::<i64>() {
            Ok(number) => self.check_column_number(number),
            Err(_) => ColumnCheck::OutOfRange,
        }
    }

    /// Classify a 1-based column number.
    pub fn check_column_number(&self, number: i64) -> ColumnCheck {
        let column = match usize::try_from(number) {
            Ok(column) if (1..=COLS).contains(&column) => column,
            _ => return ColumnCheck::OutOfRange,
        };

        if self.cells[ROWS - 1][column - 1].is_empty() {
            ColumnCheck::Playable(column)
        } else {
            ColumnCheck::Full
        }
    }

    /// Drop a chip into a 1-based column, returns the row where it landed.
    ///
    /// The board is left untouched when the column is off the board or full.
    pub fn drop_chip(&mut self, column: usize, player: PlayerId) -> Result<usize, InputError> {
        if !(1..=COLS).contains(&column) {
            return Err(InputError::InvalidColumnFormat);
        }
        let col = column - 1;

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(InputError::ColumnFull)?;
        self.cells[row][col] = Cell::Owner(player);
        Ok(row)
    }

    /// Check if every cell holds a chip
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn chip_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Scan the whole grid for the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        if let Some(winner) = self.winner() {
            GameOutcome::Win(winner)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Owner of the first line of four found. Rows are scanned before
    /// columns, columns before diagonals.
    pub fn winner(&self) -> Option<PlayerId> {
        self.row_winner()
            .or_else(|| self.column_winner())
            .or_else(|| self.diagonal_winner())
    }

    fn row_winner(&self) -> Option<PlayerId> {
        (0..ROWS).find_map(|row| {
            (0..=COLS - WIN_LENGTH).find_map(|col| self.line_owner(row, col, 0, 1))
        })
    }

    fn column_winner(&self) -> Option<PlayerId> {
        (0..COLS).find_map(|col| {
            (0..=ROWS - WIN_LENGTH).find_map(|row| self.line_owner(row, col, 1, 0))
        })
    }

    /// Ascending (/) and descending (\) runs, both read left to right.
    fn diagonal_winner(&self) -> Option<PlayerId> {
        (0..ROWS).find_map(|row| {
            (0..COLS).find_map(|col| {
                self.line_owner(row, col, 1, 1)
                    .or_else(|| self.line_owner(row, col, -1, 1))
            })
        })
    }

    /// Owner of the run of `WIN_LENGTH` cells starting at (row, col), if
    /// the run fits on the board and every cell has that same owner.
    fn line_owner(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<PlayerId> {
        let owner = self.cells[row][col].owner()?;

        let uniform = (1..WIN_LENGTH as isize).all(|step| {
            let r = row as isize + d_row * step;
            let c = col as isize + d_col * step;
            self.cell_at(r, c) == Some(Cell::Owner(owner))
        });

        uniform.then_some(owner)
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok().filter(|&r| r < ROWS)?;
        let col = usize::try_from(col).ok().filter(|&c| c < COLS)?;
        Some(self.cells[row][col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
