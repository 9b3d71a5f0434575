//! Error types for board construction and move parsing.

use std::error::Error;
use std::fmt;

use super::types::{Color, Square};

/// Errors from constructing or parsing a [`Square`](super::types::Square).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation: {notation:?}")
            }
        }
    }
}

impl Error for SquareError {}

/// Errors from parsing a FEN string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    /// FEN must have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement field is malformed
    InvalidPiecePlacement(String),
    /// Side-to-move field is not "w" or "b"
    InvalidSideToMove(String),
    /// Castling field contains characters other than KQkq or "-"
    InvalidCastling(String),
    /// En passant field is not a valid square or "-"
    InvalidEnPassant(String),
    /// Halfmove or fullmove counter is not a number
    InvalidClock(String),
    /// Position lacks a king for the given color
    MissingKing(Color),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidPiecePlacement(s) => {
                write!(f, "invalid piece placement: {s:?}")
            }
            FenError::InvalidSideToMove(s) => write!(f, "invalid side to move: {s:?}"),
            FenError::InvalidCastling(s) => write!(f, "invalid castling rights: {s:?}"),
            FenError::InvalidEnPassant(s) => write!(f, "invalid en passant square: {s:?}"),
            FenError::InvalidClock(s) => write!(f, "invalid move clock: {s:?}"),
            FenError::MissingKing(color) => write!(f, "position has no {color} king"),
        }
    }
}

impl Error for FenError {}

/// Errors from parsing a move in coordinate notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string is not 4 or 5 characters of coordinate notation
    InvalidNotation(String),
    /// Promotion character is not one of q, n, r, b
    InvalidPromotion(char),
    /// No piece of the side to move sits on the origin square
    NoPieceOnSquare(Square),
    /// The move is not legal in the current position
    IllegalMove(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidNotation(s) => write!(f, "invalid move notation: {s:?}"),
            MoveParseError::InvalidPromotion(c) => write!(f, "invalid promotion piece: {c:?}"),
            MoveParseError::NoPieceOnSquare(sq) => {
                write!(f, "no piece of the side to move on {sq}")
            }
            MoveParseError::IllegalMove(s) => write!(f, "illegal move: {s}"),
        }
    }
}

impl Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        match err {
            SquareError::InvalidNotation { notation } => MoveParseError::InvalidNotation(notation),
            other => MoveParseError::InvalidNotation(other.to_string()),
        }
    }
}
