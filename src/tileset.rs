use crate::Error;
use std::collections::HashMap;

/// letter, points
type TileInfo = (char, u32);

/// Letter values of the english tile distribution.
const ENGLISH: &[TileInfo] = &[
    ('a', 1),
    ('b', 3),
    ('c', 3),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 2),
    ('h', 4),
    ('i', 1),
    ('j', 8),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 3),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 1),
    ('v', 4),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// The points of each letter that can be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    points: HashMap<char, u32>,
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet {
            points: ENGLISH.iter().copied().collect(),
        }
    }
}

impl TileSet {
    /// Return a new `TileSet` from (letter, points) pairs.
    /// Letters are stored in lowercase.
    /// ## Errors
    /// If a letter is worth 0 points.
    /// ## Examples
    /// ```
    /// # use scrabble_referee::{TileSet, Error};
    /// let tileset = TileSet::new(&[('a', 1), ('b', 4)])?;
    /// assert_eq!(tileset.points('b')?, 4);
    /// assert!(tileset.points('c').is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(tiles: &[TileInfo]) -> Result<TileSet, Error> {
        let points = tiles
            .iter()
            .map(|&(letter, points)| match points {
                0 => Err(Error::InvalidLetterValue(letter)),
                _ => Ok((letter.to_ascii_lowercase(), points)),
            })
            .collect::<Result<HashMap<_, _>, Error>>()?;
        Ok(TileSet { points })
    }

    /// Return the points for `letter`
    /// ## Errors
    /// If the letter is not in the tileset.
    pub fn points(&self, letter: char) -> Result<u32, Error> {
        self.points
            .get(&letter)
            .copied()
            .ok_or(Error::UnknownLetter(letter))
    }

    /// Check if `letter` is in the tileset.
    pub fn contains(&self, letter: char) -> bool {
        self.points.contains_key(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tileset() -> Result<(), Error> {
        let tileset = TileSet::default();
        assert_eq!(tileset.points('a')?, 1);
        assert_eq!(tileset.points('k')?, 5);
        assert_eq!(tileset.points('z')?, 10);
        assert!(tileset.contains('q'));
        assert!(!tileset.contains('A'));
        Ok(())
    }

    #[test]
    fn test_unknown_letter() {
        let tileset = TileSet::default();
        assert!(matches!(tileset.points('é'), Err(Error::UnknownLetter('é'))));
    }

    #[test]
    fn test_zero_points() {
        assert!(matches!(
            TileSet::new(&[('a', 1), ('b', 0)]),
            Err(Error::InvalidLetterValue('b'))
        ));
    }
}
