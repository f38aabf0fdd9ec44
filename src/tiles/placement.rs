#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A letter to be placed at `row`, `col` on the board.
///
/// The letter is converted to lowercase on construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub letter: char,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    /// ## Example
    /// ```
    /// use scrabble_referee::Placement;
    /// let placement = Placement::new('K', 7, 6);
    /// assert_eq!(placement.letter, 'k');
    /// ```
    pub fn new(letter: char, row: usize, col: usize) -> Placement {
        Placement {
            letter: letter.to_ascii_lowercase(),
            row,
            col,
        }
    }

    /// The (row, col) position of the placement
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(char, usize, usize)> for Placement {
    fn from((letter, row, col): (char, usize, usize)) -> Self {
        Placement::new(letter, row, col)
    }
}
