//! Knight move generation.

use crate::board::attack_tables::KNIGHT_ATTACKS;
use crate::board::state::Board;
use crate::board::types::{Bitboard, Move, MoveList, Piece, Square};

pub(super) fn generate(board: &Board, moves: &mut MoveList) {
    let us = board.side_to_move();
    for from_idx in board.pieces(us, Piece::Knight).iter() {
        let from = Square::from_index(from_idx);
        let attacks = Bitboard(KNIGHT_ATTACKS[from_idx.as_usize()]);
        let (quiets, captures) = board.split_targets(us, attacks);
        for to in quiets.iter() {
            moves.push(Move::new(from, Square::from_index(to), Piece::Knight));
        }
        for to in captures.iter() {
            let to = Square::from_index(to);
            moves.push(
                Move::new(from, to, Piece::Knight).with_capture(board.captured_piece_on(to)),
            );
        }
    }
}
