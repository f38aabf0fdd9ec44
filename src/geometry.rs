//! Line and contiguity rules for the tiles of a play.
use crate::board::N;
use crate::{Board, Error, Placement, Play};
use std::collections::HashSet;

/// The axis a word is read along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Position of the cell before `row`, `col` along this axis, or None at the board edge.
    pub fn before(self, row: usize, col: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => col.checked_sub(1).map(|col| (row, col)),
            Direction::Vertical => row.checked_sub(1).map(|row| (row, col)),
        }
    }

    /// Position of the cell after `row`, `col` along this axis, or None at the board edge.
    pub fn after(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (row, col) = match self {
            Direction::Horizontal => (row, col + 1),
            Direction::Vertical => (row + 1, col),
        };
        if row < N && col < N {
            Some((row, col))
        } else {
            None
        }
    }

    /// Index of `placement` along this axis.
    fn index(self, placement: &Placement) -> usize {
        match self {
            Direction::Horizontal => placement.col,
            Direction::Vertical => placement.row,
        }
    }
}

/// How the tiles of a play are laid out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Single,
    Horizontal,
    Vertical,
    NonLinear,
}

impl Orientation {
    /// The axis of a line of two or more tiles.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Orientation::Horizontal => Some(Direction::Horizontal),
            Orientation::Vertical => Some(Direction::Vertical),
            Orientation::Single | Orientation::NonLinear => None,
        }
    }

    pub fn is_linear(self) -> bool {
        self != Orientation::NonLinear
    }
}

/// Classify the layout of `play`.
///
/// A line needs one distinct row (or column) and a distinct column (or row) per tile,
/// so a play that uses the same square twice is `NonLinear`.
/// ## Errors
/// If the play has no tiles.
/// ## Examples
/// ```
/// # use scrabble_referee::{classify, Orientation, Play, Error};
/// let play: Play = vec![('n', 7, 7), ('o', 7, 8)].into_iter().collect();
/// assert_eq!(classify(&play)?, Orientation::Horizontal);
/// assert!(classify(&Play::default()).is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn classify(play: &Play) -> Result<Orientation, Error> {
    let count = play.len();
    match count {
        0 => return Err(Error::EmptyPlay),
        1 => return Ok(Orientation::Single),
        _ => {}
    }
    let rows: HashSet<usize> = play.iter().map(|p| p.row).collect();
    let cols: HashSet<usize> = play.iter().map(|p| p.col).collect();
    if rows.len() == 1 && cols.len() == count {
        Ok(Orientation::Horizontal)
    } else if cols.len() == 1 && rows.len() == count {
        Ok(Orientation::Vertical)
    } else {
        Ok(Orientation::NonLinear)
    }
}

/// Check that the tiles of `play` leave no gaps along their line.
pub fn is_contiguous(play: &Play, orientation: Orientation) -> bool {
    let direction = match orientation {
        Orientation::Single => return true,
        Orientation::NonLinear => return false,
        Orientation::Horizontal => Direction::Horizontal,
        Orientation::Vertical => Direction::Vertical,
    };
    play.iter()
        .map(|p| direction.index(p))
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[1] == w[0] + 1)
}

/// Check that the played letters do not extend a word already on `board`.
///
/// For a line the squares just before the first tile and just after the last tile must be
/// empty or off the board. A single tile has no axis of its own, so all four of its
/// neighbours must be empty.
pub fn is_self_contained(play: &Play, orientation: Orientation, board: &Board) -> bool {
    let (first, last) = match (play.first(), play.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    let is_free = |pos: Option<(usize, usize)>| match pos {
        Some((row, col)) => board.letter_at(row, col).is_none(),
        None => true,
    };
    match orientation.direction() {
        Some(direction) => {
            is_free(direction.before(first.row, first.col))
                && is_free(direction.after(last.row, last.col))
        }
        None if orientation == Orientation::Single => {
            [Direction::Horizontal, Direction::Vertical].iter().all(|d| {
                is_free(d.before(first.row, first.col)) && is_free(d.after(first.row, first.col))
            })
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn play(tiles: &[(char, usize, usize)]) -> Play {
        tiles.iter().copied().collect()
    }

    fn board(tiles: &[(char, usize, usize)]) -> Result<Board> {
        let mut board = Board::default();
        for &(letter, row, col) in tiles {
            board.set(row, col, letter)?;
        }
        Ok(board)
    }

    #[test]
    fn test_classify() -> Result<()> {
        assert_eq!(classify(&play(&[('a', 7, 7)]))?, Orientation::Single);
        assert_eq!(
            classify(&play(&[('a', 7, 7), ('b', 7, 9)]))?,
            Orientation::Horizontal
        );
        assert_eq!(
            classify(&play(&[('a', 9, 3), ('b', 2, 3)]))?,
            Orientation::Vertical
        );
        assert_eq!(
            classify(&play(&[('a', 7, 7), ('b', 8, 8)]))?,
            Orientation::NonLinear
        );
        // same square twice
        assert_eq!(
            classify(&play(&[('a', 7, 7), ('b', 7, 7), ('c', 7, 8)]))?,
            Orientation::NonLinear
        );
        Ok(())
    }

    #[test]
    #[should_panic(expected = "EmptyPlay")]
    fn test_classify_empty() {
        classify(&Play::default()).unwrap();
    }

    #[test]
    fn test_is_contiguous() {
        let tiles = play(&[('s', 7, 6), ('w', 7, 9)]);
        assert!(!is_contiguous(&tiles, Orientation::Horizontal));
        let tiles = play(&[('n', 6, 8), ('o', 6, 9), ('t', 6, 10)]);
        assert!(is_contiguous(&tiles, Orientation::Horizontal));
        let tiles = play(&[('n', 3, 2), ('o', 4, 2)]);
        assert!(is_contiguous(&tiles, Orientation::Vertical));
        assert!(is_contiguous(&play(&[('a', 0, 0)]), Orientation::Single));
        let tiles = play(&[('a', 7, 7), ('b', 8, 8)]);
        assert!(!is_contiguous(&tiles, Orientation::NonLinear));
    }

    #[test]
    fn test_is_self_contained() -> Result<()> {
        let tiles = [('n', 7, 7), ('o', 7, 8)];
        let live = board(&tiles)?;
        assert!(is_self_contained(&play(&tiles), Orientation::Horizontal, &live));

        // "te" extends "no" to "note"
        let live = board(&[('n', 7, 7), ('o', 7, 8), ('t', 7, 9), ('e', 7, 10)])?;
        let tiles = play(&[('t', 7, 9), ('e', 7, 10)]);
        assert!(!is_self_contained(&tiles, Orientation::Horizontal, &live));

        // letters above do not matter for a horizontal line
        let live = board(&[('x', 6, 7), ('n', 7, 7), ('o', 7, 8)])?;
        let tiles = play(&[('n', 7, 7), ('o', 7, 8)]);
        assert!(is_self_contained(&tiles, Orientation::Horizontal, &live));
        Ok(())
    }

    #[test]
    fn test_self_contained_at_edges() -> Result<()> {
        let tiles = [('a', 0, 14), ('b', 1, 14), ('c', 2, 14)];
        let live = board(&tiles)?;
        assert!(is_self_contained(&play(&tiles), Orientation::Vertical, &live));
        let tiles = [('a', 14, 13), ('b', 14, 14)];
        let live = board(&tiles)?;
        assert!(is_self_contained(&play(&tiles), Orientation::Horizontal, &live));
        Ok(())
    }

    #[test]
    fn test_single_tile_self_contained() -> Result<()> {
        let tiles = play(&[('a', 7, 7)]);
        assert!(is_self_contained(&tiles, Orientation::Single, &board(&[('a', 7, 7)])?));
        let live = board(&[('a', 7, 7), ('n', 8, 7)])?;
        assert!(!is_self_contained(&tiles, Orientation::Single, &live));
        assert!(!is_self_contained(&tiles, Orientation::NonLinear, &live));
        Ok(())
    }

    #[test]
    fn test_direction_steps() {
        assert_eq!(Direction::Horizontal.before(3, 0), None);
        assert_eq!(Direction::Vertical.before(3, 0), Some((2, 0)));
        assert_eq!(Direction::Horizontal.after(3, 14), None);
        assert_eq!(Direction::Vertical.after(14, 3), None);
        assert_eq!(Direction::Vertical.after(13, 3), Some((14, 3)));
    }
}
