//! Board representation, move generation and move application.

pub mod error;
pub mod types;

mod apply;
mod attack_tables;
mod builder;
mod debug;
mod fen;
mod history;
mod movegen;
mod state;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use history::MoveHistory;
pub use state::Board;
pub use types::{
    Bitboard, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square, SquareIdx,
};

/// FEN for the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
