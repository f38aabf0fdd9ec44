use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell on the board that is either empty or contains a single lowercase letter
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(Option<char>);

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    /// Create new `Cell` holding `letter`.
    /// ## Errors
    /// If `letter` is not alphabetic.
    pub fn from_letter(letter: char) -> Result<Cell, Error> {
        if letter.is_alphabetic() {
            Ok(Cell(Some(letter.to_ascii_lowercase())))
        } else {
            Err(Error::InvalidLetter(letter))
        }
    }

    /// Get the contained letter or None
    pub fn letter(&self) -> Option<char> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Parse a cell from its board notation: `.` or ` ` for an empty cell.
impl TryFrom<char> for Cell {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' | ' ' => Ok(Cell::EMPTY),
            _ => Cell::from_letter(c),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.unwrap_or('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() -> Result<(), Error> {
        assert_eq!(Cell::try_from('.')?, Cell::EMPTY);
        assert_eq!(Cell::try_from(' ')?, Cell::EMPTY);
        assert_eq!(Cell::try_from('Q')?.letter(), Some('q'));
        assert!(Cell::try_from('7').is_err());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        assert_eq!(Cell::EMPTY.to_string(), ".");
        assert_eq!(Cell::from_letter('k')?.to_string(), "k");
        Ok(())
    }
}
