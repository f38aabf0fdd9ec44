use crate::board::{in_bounds, CENTER};
use crate::geometry::{self, Orientation};
use crate::words::{self, WordOccurrence};
use crate::{Board, Dictionary, Error, Play, Rejection, Scorer};
use std::collections::BTreeSet;
use tracing::debug;

/// An accepted play, ready to be committed.
#[derive(Debug, Clone)]
pub(crate) struct Accepted {
    /// The board with the tiles of the play
    pub board: Board,
    pub words: BTreeSet<WordOccurrence>,
    pub score: u32,
}

/// Final state of a play under validation.
#[derive(Debug, Clone)]
pub(crate) enum Verdict {
    Accepted(Accepted),
    Rejected(Rejection),
}

/// Checks a play against the board and the dictionary.
pub(crate) struct PlayValidator<'a, D> {
    dictionary: &'a D,
    scorer: &'a Scorer,
}

impl<'a, D: Dictionary> PlayValidator<'a, D> {
    pub fn new(dictionary: &'a D, scorer: &'a Scorer) -> Self {
        PlayValidator { dictionary, scorer }
    }

    /// Validate `play` on top of the `prior` board.
    ///
    /// The tiles are placed on a copy of `prior`; `prior` itself is never changed.
    /// ## Errors
    /// If the play is empty, or uses a letter without a value.
    pub fn validate(&self, prior: &Board, play: &Play, first_play: bool) -> Result<Verdict, Error> {
        if let Some(p) = play.iter().find(|p| !in_bounds(p.row, p.col)) {
            return Ok(self.reject(Rejection::OutOfBounds {
                row: p.row,
                col: p.col,
            }));
        }
        let orientation = geometry::classify(play)?;
        for p in play {
            self.scorer.letter_value(p.letter)?;
        }

        // a square used twice in the same play is occupied by the time its second tile is placed
        let mut live = *prior;
        for p in play {
            if live.is_occupied(p.row, p.col)? {
                return Ok(self.reject(Rejection::CellOccupied {
                    row: p.row,
                    col: p.col,
                }));
            }
            live.set(p.row, p.col, p.letter)?;
        }

        let words = if first_play {
            self.first_play_words(play, orientation, &live)
        } else {
            self.words_formed(play, orientation, prior, &live)
        };
        match words {
            Ok(words) => {
                let score = self
                    .scorer
                    .score_play(words.iter().map(|w| w.word.as_str()))?;
                Ok(Verdict::Accepted(Accepted {
                    board: live,
                    words,
                    score,
                }))
            }
            Err(rejection) => Ok(self.reject(rejection)),
        }
    }

    /// The first play must be a single word in a line that covers the start square.
    fn first_play_words(
        &self,
        play: &Play,
        orientation: Orientation,
        live: &Board,
    ) -> Result<BTreeSet<WordOccurrence>, Rejection> {
        if !orientation.is_linear() {
            return Err(Rejection::NotLinear);
        }
        if !play.iter().any(|p| p.position() == CENTER) {
            return Err(Rejection::NotCenterCovered);
        }
        if !geometry::is_contiguous(play, orientation) {
            return Err(Rejection::NotContiguous);
        }
        // the board is empty, so every word formed is the bare word
        let words = words::newly_formed_words(play, orientation, &Board::default(), live);
        self.check_words(&words)?;
        Ok(words)
    }

    /// Later plays must touch an earlier tile, lie in a line, and form only valid words.
    fn words_formed(
        &self,
        play: &Play,
        orientation: Orientation,
        prior: &Board,
        live: &Board,
    ) -> Result<BTreeSet<WordOccurrence>, Rejection> {
        if words::neighbors(play, prior).is_empty() {
            return Err(Rejection::NotConnected);
        }
        if !orientation.is_linear() {
            return Err(Rejection::NotLinear);
        }
        let words = words::newly_formed_words(play, orientation, prior, live);
        self.check_words(&words)?;
        Ok(words)
    }

    fn check_words(&self, words: &BTreeSet<WordOccurrence>) -> Result<(), Rejection> {
        match words.iter().find(|w| !self.dictionary.contains(&w.word)) {
            Some(w) => Err(Rejection::InvalidWord(w.word.clone())),
            None => Ok(()),
        }
    }

    fn reject(&self, rejection: Rejection) -> Verdict {
        debug!(%rejection, "play rejected");
        Verdict::Rejected(rejection)
    }
}
