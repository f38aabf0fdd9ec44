//! Derive the words a play creates on the board.
//!
//! Two views of the board are used. The `prior` board holds only the tiles of earlier
//! plays, and tells which adjacent letters were already there. The `live` board also holds
//! the tiles of the current play, and is the board words are read from.
use crate::geometry::{self, Direction, Orientation};
use crate::{Board, Play};
use std::collections::BTreeSet;

/// A letter from an earlier play, next to a tile of the current play.
///
/// `direction` is `Vertical` for a letter above or below the tile, `Horizontal` for one to
/// its left or right: the axis of the word the two letters share.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NeighborRef {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub letter: char,
}

/// A word read from the board, starting at `row`, `col`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordOccurrence {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: String,
}

/// The played letters in order. Only a word when the play has no gaps.
pub fn bare_word(play: &Play) -> String {
    play.iter().map(|p| p.letter).collect()
}

/// Find the letters on the `prior` board next to each tile of `play`.
pub fn neighbors(play: &Play, prior: &Board) -> BTreeSet<NeighborRef> {
    let mut found = BTreeSet::new();
    for p in play {
        for &direction in &[Direction::Vertical, Direction::Horizontal] {
            let adjacent = [direction.before(p.row, p.col), direction.after(p.row, p.col)];
            for &(row, col) in adjacent.iter().flatten() {
                if let Some(letter) = prior.letter_at(row, col) {
                    found.insert(NeighborRef {
                        row,
                        col,
                        direction,
                        letter,
                    });
                }
            }
        }
    }
    found
}

/// Walk back from `row`, `col` to the first letter of the word it is part of.
pub fn word_start(row: usize, col: usize, direction: Direction, board: &Board) -> (usize, usize) {
    let (mut row, mut col) = (row, col);
    while let Some((r, c)) = direction
        .before(row, col)
        .filter(|&(r, c)| board.letter_at(r, c).is_some())
    {
        row = r;
        col = c;
    }
    (row, col)
}

/// Reduce `neighbors` to one start per word, so a word touched by several tiles is read once.
pub fn dedupe_starts(
    neighbors: &BTreeSet<NeighborRef>,
    board: &Board,
) -> BTreeSet<(usize, usize, Direction)> {
    neighbors
        .iter()
        .map(|n| {
            let (row, col) = word_start(n.row, n.col, n.direction, board);
            (row, col, n.direction)
        })
        .collect()
}

/// Read the letters from `row`, `col` onwards, up to the first empty square or the edge.
pub fn extract(row: usize, col: usize, direction: Direction, board: &Board) -> String {
    let mut word = String::new();
    let mut pos = Some((row, col));
    while let Some((r, c)) = pos {
        match board.letter_at(r, c) {
            Some(letter) => word.push(letter),
            None => break,
        }
        pos = direction.after(r, c);
    }
    word
}

/// All words created or extended by `play`.
///
/// The bare played word is included only when it is contiguous and stands alone. When it
/// extends a word already on the board, the longer word is found through a neighbor.
/// ## Examples
/// ```
/// # use scrabble_referee::{newly_formed_words, classify, Board, Play, Error};
/// let mut prior = Board::default();
/// prior.set(7, 7, 'n')?;
/// prior.set(7, 8, 'o')?;
/// let play: Play = vec![('s', 7, 6), ('w', 7, 9)].into_iter().collect();
/// let mut live = prior;
/// live.set(7, 6, 's')?;
/// live.set(7, 9, 'w')?;
/// let words = newly_formed_words(&play, classify(&play)?, &prior, &live);
/// let words: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
/// assert_eq!(words, ["snow"]);
/// # Ok::<(), Error>(())
/// ```
pub fn newly_formed_words(
    play: &Play,
    orientation: Orientation,
    prior: &Board,
    live: &Board,
) -> BTreeSet<WordOccurrence> {
    let mut words = BTreeSet::new();
    if geometry::is_contiguous(play, orientation)
        && geometry::is_self_contained(play, orientation, live)
    {
        if let Some(first) = play.first() {
            words.insert(WordOccurrence {
                row: first.row,
                col: first.col,
                direction: orientation.direction().unwrap_or(Direction::Horizontal),
                word: bare_word(play),
            });
        }
    }
    for (row, col, direction) in dedupe_starts(&neighbors(play, prior), live) {
        words.insert(WordOccurrence {
            row,
            col,
            direction,
            word: extract(row, col, direction, live),
        });
    }
    words
}
