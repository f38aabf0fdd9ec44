use crate::scorer::Tally;
use crate::validator::{PlayValidator, Verdict};
use crate::{Board, Dictionary, Error, Placement, Play, Rejection, Scorer, TileSet, Wordlist};
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of [`Game::play_tiles`]. `score` is 0 when the play is not valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayResult {
    pub valid: bool,
    pub score: u32,
}

impl PlayResult {
    /// Result of a rejected play
    pub const INVALID: Self = PlayResult {
        valid: false,
        score: 0,
    };
}

/// Result of [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tiles were placed. `words` lists every word formed, in board order.
    Accepted { score: u32, words: Vec<String> },
    /// The board is unchanged.
    Rejected(Rejection),
}

impl From<&Outcome> for PlayResult {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Accepted { score, .. } => PlayResult {
                valid: true,
                score: *score,
            },
            Outcome::Rejected(_) => PlayResult::INVALID,
        }
    }
}

/// A game in progress: the tiles on the board and the score so far.
///
/// Every turn is a call to [`play_tiles`](Game::play_tiles). An accepted play stays on the
/// board and adds to the score; a rejected play leaves no trace.
#[derive(Debug, Clone)]
pub struct Game<D = Wordlist> {
    board: Board,
    dictionary: D,
    scorer: Scorer,
    tally: Tally,
}

impl Default for Game<Wordlist> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<Wordlist> {
    /// Create a new game on an empty board, with an empty wordlist and english letter values.
    ///
    /// Builder functions are used to set the dictionary and the tileset:
    /// - [`with_wordlist_from_words`](Game::with_wordlist_from_words)
    /// - [`with_wordlist_from_file`](Game::with_wordlist_from_file)
    /// - [`with_dictionary`](Game::with_dictionary)
    /// - [`with_tileset`](Game::with_tileset)
    #[must_use]
    pub fn new() -> Game<Wordlist> {
        Game::with_dictionary(Wordlist::default())
    }

    /// Use a wordlist built from `words`, and return the modified game.
    /// ## Examples
    /// ```
    /// use scrabble_referee::Game;
    /// let game = Game::new().with_wordlist_from_words(&["aardvark", "zebra"]);
    /// ```
    #[must_use]
    pub fn with_wordlist_from_words(mut self, words: &[&str]) -> Game<Wordlist> {
        self.dictionary = Wordlist::from_words(words);
        self
    }

    /// Read the wordlist from `wordfile`, and return the modified game.
    ///
    /// The `wordfile` must contain one word per line.
    /// ## Errors
    /// If the `wordfile` can not be read.
    pub fn with_wordlist_from_file(mut self, wordfile: &str) -> Result<Game<Wordlist>, Error> {
        self.dictionary = Wordlist::from_file(wordfile)?;
        Ok(self)
    }
}

impl<D: Dictionary> Game<D> {
    /// Create a new game that checks words against `dictionary`.
    /// ## Examples
    /// ```
    /// use std::collections::HashSet;
    /// use scrabble_referee::Game;
    /// let words: HashSet<String> = vec![String::from("no")].into_iter().collect();
    /// let game = Game::with_dictionary(words);
    /// ```
    pub fn with_dictionary(dictionary: D) -> Game<D> {
        Game {
            board: Board::default(),
            dictionary,
            scorer: Scorer::default(),
            tally: Tally::default(),
        }
    }

    /// Use `tileset` for the letter values, and return the modified game.
    #[must_use]
    pub fn with_tileset(mut self, tileset: TileSet) -> Game<D> {
        self.scorer = Scorer::new(tileset);
        self
    }

    /// Validate and score `placements`, and place them on the board if the play is valid.
    ///
    /// ## Errors
    /// Only for misuse: an empty list of placements, or a letter without a value in the
    /// tileset. The board is unchanged.
    /// ## Examples
    /// ```
    /// # use scrabble_referee::{Game, Placement, PlayResult, Error};
    /// let mut game = Game::new().with_wordlist_from_words(&["no", "snow"]);
    /// let tiles = [Placement::new('n', 7, 7), Placement::new('o', 7, 8)];
    /// assert_eq!(game.play_tiles(&tiles)?, PlayResult { valid: true, score: 2 });
    /// let tiles = [Placement::new('s', 7, 6), Placement::new('w', 7, 9)];
    /// assert_eq!(game.play_tiles(&tiles)?, PlayResult { valid: true, score: 7 });
    /// assert_eq!(game.game_score(), 9);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_tiles(&mut self, placements: &[Placement]) -> Result<PlayResult, Error> {
        let play = Play::new(placements);
        self.play(&play).map(|outcome| PlayResult::from(&outcome))
    }

    /// Like [`play_tiles`](Game::play_tiles), but tell why a play is rejected, or which words
    /// an accepted play formed.
    /// ## Errors
    /// See [`play_tiles`](Game::play_tiles).
    pub fn play(&mut self, play: &Play) -> Result<Outcome, Error> {
        let first_play = self.tally.game_score() == 0;
        let validator = PlayValidator::new(&self.dictionary, &self.scorer);
        match validator.validate(&self.board, play, first_play)? {
            Verdict::Accepted(accepted) => {
                let words: Vec<String> = accepted.words.into_iter().map(|w| w.word).collect();
                self.board = accepted.board;
                self.tally.record(accepted.score);
                info!(
                    score = accepted.score,
                    game_score = self.tally.game_score(),
                    ?words,
                    "play accepted"
                );
                Ok(Outcome::Accepted {
                    score: accepted.score,
                    words,
                })
            }
            Verdict::Rejected(rejection) => Ok(Outcome::Rejected(rejection)),
        }
    }

    /// Return the board with all accepted tiles
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total score of all accepted plays
    pub fn game_score(&self) -> u32 {
        self.tally.game_score()
    }

    /// Score of the last accepted play
    pub fn last_score(&self) -> u32 {
        self.tally.last_score()
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }
}
