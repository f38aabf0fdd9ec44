use crate::{Error, TileSet};

/// Adds up letter values.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tileset: TileSet,
}

impl Scorer {
    pub fn new(tileset: TileSet) -> Scorer {
        Scorer { tileset }
    }

    /// The points for a single letter.
    /// ## Errors
    /// If the letter is not in the tileset.
    pub fn letter_value(&self, letter: char) -> Result<u32, Error> {
        self.tileset.points(letter)
    }

    /// The sum of the letter values of `word`.
    /// ## Examples
    /// ```
    /// # use scrabble_referee::{Scorer, Error};
    /// let scorer = Scorer::default();
    /// assert_eq!(scorer.score_word("button")?, 8);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_word(&self, word: &str) -> Result<u32, Error> {
        word.chars().map(|c| self.letter_value(c)).sum()
    }

    /// The sum of the scores of all `words` formed in a play.
    pub fn score_play<'a, I>(&self, words: I) -> Result<u32, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().map(|word| self.score_word(word)).sum()
    }
}

/// Running score of a game.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    game_score: u32,
    last_score: u32,
}

impl Tally {
    /// Add the score of an accepted play.
    pub fn record(&mut self, score: u32) {
        self.game_score += score;
        self.last_score = score;
    }

    /// Total score of all accepted plays.
    pub fn game_score(&self) -> u32 {
        self.game_score
    }

    /// Score of the last accepted play.
    pub fn last_score(&self) -> u32 {
        self.last_score
    }
}
