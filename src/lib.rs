//! A word board referee for Rust.
//! <br>
//! This crate checks the tiles a player puts on a 15x15 word board, and scores them.
//! A play is accepted when the tiles lie in one row or column, touch the tiles already on
//! the board (or cover the center square on the first turn), and every word they create is
//! in the dictionary. The score of a play is the sum of the letter values of all words it
//! creates, each counted once.
//!
//! # How to use `scrabble_referee`
//! Start by creating a game, then specify the wordlist to be used.
//! The wordlist can be given as a list of words, or read from a file in utf-8 with one word
//! per line. Any type that implements [`Dictionary`] can be used instead of a wordlist.
//! By default the english letter values are used, but you can specify your own
//! [`TileSet`].
//!
//! # Basic usage
//!  ```
//! # use scrabble_referee::{Game, Placement, PlayResult, Error};
//! let mut game = Game::new().with_wordlist_from_words(&["know", "no", "not", "ow"]);
//! let know = [('k', 7, 6), ('n', 7, 7), ('o', 7, 8), ('w', 7, 9)];
//! let tiles: Vec<Placement> = know.iter().copied().map(Placement::from).collect();
//! assert_eq!(game.play_tiles(&tiles)?, PlayResult { valid: true, score: 11 });
//!
//! // "not" on top of "know" also forms "no" and "ow"
//! let not = [('n', 6, 8), ('o', 6, 9), ('t', 6, 10)];
//! let tiles: Vec<Placement> = not.iter().copied().map(Placement::from).collect();
//! assert_eq!(game.play_tiles(&tiles)?, PlayResult { valid: true, score: 10 });
//! println!("{}", game.board());
//! # Ok::<(), Error>(())
//! ```
mod board;
mod dictionary;
mod error;
mod game;
mod geometry;
mod scorer;
mod tiles;
mod tileset;
mod validator;
mod wordlist;
mod words;

pub use crate::board::{Board, CENTER, N};
pub use crate::dictionary::Dictionary;
pub use crate::error::{Error, Rejection};
pub use crate::game::{Game, Outcome, PlayResult};
pub use crate::geometry::{classify, is_contiguous, is_self_contained, Direction, Orientation};
pub use crate::scorer::{Scorer, Tally};
pub use crate::tiles::{Cell, Placement, Play};
pub use crate::tileset::TileSet;
pub use crate::wordlist::Wordlist;
pub use crate::words::{
    bare_word, dedupe_starts, extract, neighbors, newly_formed_words, word_start, NeighborRef,
    WordOccurrence,
};
