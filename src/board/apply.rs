//! Move application.

use log::trace;

use super::state::Board;
use super::types::{castle_rights_mask, Move, Piece, Square};

impl Board {
    /// Apply a move to this board.
    ///
    /// The move must come from this position's move generator; applying an
    /// arbitrary move may corrupt the position. The hash, castling rights,
    /// en passant target, clocks, check status and history are all updated.
    pub fn apply_move(&mut self, mv: Move) {
        let mover_color = self.side_to_move();
        let opponent = mover_color.opponent();
        let from = mv.from();
        let to = mv.to();
        let mover = mv.mover();

        trace!("{mover_color} plays {mv}");

        self.remove_piece(mover_color, mover, from);

        if mv.is_en_passant() {
            // the captured pawn sits beside the destination, not on it
            let captured_sq = Square(from.rank(), to.file());
            self.remove_piece(opponent, Piece::Pawn, captured_sq);
        } else if let Some(captured) = mv.captured() {
            self.remove_piece(opponent, captured, to);
        }

        match mv.promotion() {
            Some(promoted) => self.set_piece(mover_color, promoted, to),
            None => self.set_piece(mover_color, mover, to),
        }

        if mv.is_castle() {
            let rank = mover_color.back_rank();
            let (rook_from, rook_to) = if to.file() == 6 {
                (Square(rank, 7), Square(rank, 5))
            } else {
                (Square(rank, 0), Square(rank, 3))
            };
            self.remove_piece(mover_color, Piece::Rook, rook_from);
            self.set_piece(mover_color, Piece::Rook, rook_to);
        }

        // any move touching a king or rook home square strips the
        // corresponding rights, including captures of an unmoved rook
        let mut rights = self.castling_rights();
        rights.retain(castle_rights_mask(from));
        rights.retain(castle_rights_mask(to));
        if rights != self.castling_rights() {
            self.set_castling(rights);
        }

        if mv.is_double_pawn_push() {
            let skipped_rank = (from.rank() + to.rank()) / 2;
            self.set_en_passant(Some(Square(skipped_rank, from.file())));
        } else {
            self.set_en_passant(None);
        }

        if mover == Piece::Pawn || mv.is_capture() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock() + 1);
        }

        if mover_color == super::types::Color::Black {
            self.set_fullmove_number(self.fullmove_number() + 1);
        }

        self.flip_side();
        self.in_check = self.is_in_check(opponent);
        self.history.push(mv);

        debug_assert!(self.invariants_hold());
    }
}
