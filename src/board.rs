use crate::{Cell, Error};
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The dimension of the board: N x N squares
pub const N: usize = 15;

/// The start square, which must be covered by the first play
pub const CENTER: (usize, usize) = (7, 7);

type State = [[Cell; N]; N];

/// Check if `row`, `col` is on the board.
pub fn in_bounds(row: usize, col: usize) -> bool {
    row < N && col < N
}

/// The letters on a 15x15 board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board(State);

impl Default for Board {
    fn default() -> Self {
        Board([[Cell::EMPTY; N]; N])
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Board {
    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters, with "." or " " for an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains an invalid letter.
    /// ## Examples
    /// ```
    /// # use scrabble_referee::{Board, Error};
    /// let state = &[
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "......know.....",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ];
    /// let board = Board::from_strings(state)?;
    /// assert!(board.is_occupied(7, 6)?);
    /// assert_eq!(board.letter_at(7, 9), Some('w'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut board = Board::default();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let cells = row
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>, Error>>()?;
            if cells.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), cells.len()));
            }
            board.0[i].copy_from_slice(&cells);
        }
        Ok(board)
    }

    /// Get the cell at `row`, `col`.
    /// ## Errors
    /// If the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, Error> {
        if in_bounds(row, col) {
            Ok(self.0[row][col])
        } else {
            Err(Error::OutOfRange { row, col })
        }
    }

    /// Put `letter` at `row`, `col`, replacing whatever is there.
    /// ## Errors
    /// If the position is outside the board, or `letter` is not alphabetic.
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> Result<(), Error> {
        if !in_bounds(row, col) {
            return Err(Error::OutOfRange { row, col });
        }
        self.0[row][col] = Cell::from_letter(letter)?;
        Ok(())
    }

    /// Check if cell at `row`, `col` is occupied.
    /// ## Errors
    /// If the position is outside the board.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, Error> {
        self.get(row, col).map(|cell| !cell.is_empty())
    }

    /// Return letter at `row`, `col` or None if empty cell or outside the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        if in_bounds(row, col) {
            return self.0[row][col].letter();
        }
        None
    }

    /// Check if no letter has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.0.iter().flatten().all(Cell::is_empty)
    }
}
