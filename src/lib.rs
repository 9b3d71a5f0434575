pub mod board;
pub mod cache;
pub mod zobrist;

pub use board::{Board, Color, Move, MoveList, Piece, Square};
pub use cache::MoveCache;
pub use zobrist::ZobristKeys;
