//! Programmatic position construction.

use std::sync::Arc;

use super::error::FenError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};
use crate::zobrist::ZobristKeys;

/// Builds a [`Board`] piece by piece, for tests and position setup.
///
/// ```
/// use chess_core::board::BoardBuilder;
/// use chess_core::{Color, Piece, Square};
///
/// let board = BoardBuilder::new()
///     .piece(Color::White, Piece::King, Square(0, 4))
///     .piece(Color::Black, Piece::King, Square(7, 4))
///     .side_to_move(Color::Black)
///     .build()
///     .unwrap();
/// assert_eq!(board.side_to_move(), Color::Black);
/// ```
pub struct BoardBuilder {
    placements: Vec<(Color, Piece, Square)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    keys: Option<Arc<ZobristKeys>>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placements: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            keys: None,
        }
    }

    #[must_use]
    pub fn piece(mut self, color: Color, piece: Piece, sq: Square) -> Self {
        self.placements.push((color, piece, sq));
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    #[must_use]
    pub fn en_passant(mut self, sq: Square) -> Self {
        self.en_passant = Some(sq);
        self
    }

    #[must_use]
    pub fn clocks(mut self, halfmove: u32, fullmove: u32) -> Self {
        self.halfmove_clock = halfmove;
        self.fullmove_number = fullmove;
        self
    }

    /// Use a specific key set instead of the default seeded one
    #[must_use]
    pub fn zobrist_keys(mut self, keys: Arc<ZobristKeys>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Assemble the board. Both kings must have been placed.
    pub fn build(self) -> Result<Board, FenError> {
        let keys = self
            .keys
            .unwrap_or_else(|| Arc::new(ZobristKeys::default()));
        let mut board = Board::empty_with_keys(keys);
        for (color, piece, sq) in self.placements {
            board.set_piece(color, piece, sq);
        }
        for color in [Color::White, Color::Black] {
            if board.king_square(color).is_none() {
                return Err(FenError::MissingKing(color));
            }
        }
        board.set_side_to_move(self.side_to_move);
        board.set_castling(self.castling);
        board.set_en_passant(self.en_passant);
        board.set_halfmove_clock(self.halfmove_clock);
        board.set_fullmove_number(self.fullmove_number);
        board.hash = board.calculate_hash();
        board.in_check = board.is_in_check(board.side_to_move());
        debug_assert!(board.invariants_hold());
        Ok(board)
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}
