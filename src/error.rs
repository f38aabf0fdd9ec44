use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
///
/// These signal a caller or configuration bug. An illegal move is never an `Error`,
/// it is reported as a [`Rejection`](crate::Rejection).
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Board access outside the 15x15 grid
    #[error("Position row={row}, col={col} is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// A play without any tiles
    #[error("Play contains no tiles")]
    EmptyPlay,

    /// Letter is missing from the tileset
    #[error("No points defined for letter '{0}'")]
    UnknownLetter(char),

    /// Letters must be worth at least one point
    #[error("Invalid points for letter '{0}': must be positive")]
    InvalidLetterValue(char),

    /// Character can not be placed on the board
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),
}

/// Reasons for rejecting a play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A tile is placed outside the board
    #[error("tile at row {row}, col {col} is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// A tile is placed on an occupied cell, or two tiles share a cell
    #[error("cell at row {row}, col {col} is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Tiles don't touch any tile already on the board
    #[error("tiles don't connect to any existing tiles")]
    NotConnected,

    /// Tiles are not in a single row or column
    #[error("tiles are not in a line")]
    NotLinear,

    /// The first play leaves a gap between its tiles
    #[error("tiles of the first play are not contiguous")]
    NotContiguous,

    /// The first play must use the start square
    #[error("first play does not cover the center square")]
    NotCenterCovered,

    /// A newly formed word is not in the dictionary
    #[error("\"{0}\" is not a valid word")]
    InvalidWord(String),
}
