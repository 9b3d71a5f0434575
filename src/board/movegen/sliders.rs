//! Bishop, rook and queen move generation.

use crate::board::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::board::state::Board;
use crate::board::types::{Bitboard, Move, MoveList, Piece, Square, SquareIdx};

pub(super) fn generate(board: &Board, moves: &mut MoveList) {
    generate_for(board, moves, Piece::Bishop, bishop_attacks);
    generate_for(board, moves, Piece::Rook, rook_attacks);
    generate_for(board, moves, Piece::Queen, queen_attacks);
}

fn generate_for(
    board: &Board,
    moves: &mut MoveList,
    piece: Piece,
    attacks: fn(SquareIdx, Bitboard) -> Bitboard,
) {
    let us = board.side_to_move();
    let occupied = board.occupied();
    for from_idx in board.pieces(us, piece).iter() {
        let from = Square::from_index(from_idx);
        let (quiets, captures) = board.split_targets(us, attacks(from_idx, occupied));
        for to in quiets.iter() {
            moves.push(Move::new(from, Square::from_index(to), piece));
        }
        for to in captures.iter() {
            let to = Square::from_index(to);
            moves.push(Move::new(from, to, piece).with_capture(board.captured_piece_on(to)));
        }
    }
}
