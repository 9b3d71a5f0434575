//! Pawn move generation.
//!
//! Pawns move as a whole-board mask per move class: single push, double
//! push, the two capture directions and the two en passant directions.
//! Each target bit is shifted back to recover the origin square.

use crate::board::state::Board;
use crate::board::types::{
    bit_for_square, Bitboard, Color, Move, MoveList, Piece, Square, SquareIdx, PROMOTION_PIECES,
};

pub(super) fn generate(board: &Board, moves: &mut MoveList) {
    let us = board.side_to_move();
    let pawns = board.pieces(us, Piece::Pawn);
    if pawns.is_empty() {
        return;
    }

    let empty = board.occupied().not();
    let enemy = board.occupied_by(us.opponent());
    let ep_mask = board
        .en_passant_square()
        .map_or(Bitboard::EMPTY, bit_for_square);

    let (single, double, west_reach, east_reach) = match us {
        Color::White => {
            let single = pawns.shift_north().and(empty);
            (
                single,
                single.and(Bitboard::RANK_3).shift_north().and(empty),
                pawns.shift_north().shift_west(),
                pawns.shift_north().shift_east(),
            )
        }
        Color::Black => {
            let single = pawns.shift_south().and(empty);
            (
                single,
                single.and(Bitboard::RANK_6).shift_south().and(empty),
                pawns.shift_south().shift_west(),
                pawns.shift_south().shift_east(),
            )
        }
    };

    let dr = us.pawn_direction();
    for to in single.iter() {
        emit(board, moves, us, to, dr, 0, Kind::Quiet);
    }
    for to in double.iter() {
        emit(board, moves, us, to, 2 * dr, 0, Kind::DoublePush);
    }
    for to in west_reach.and(enemy).iter() {
        emit(board, moves, us, to, dr, -1, Kind::Capture);
    }
    for to in east_reach.and(enemy).iter() {
        emit(board, moves, us, to, dr, 1, Kind::Capture);
    }
    for to in west_reach.and(ep_mask).iter() {
        emit(board, moves, us, to, dr, -1, Kind::EnPassant);
    }
    for to in east_reach.and(ep_mask).iter() {
        emit(board, moves, us, to, dr, 1, Kind::EnPassant);
    }
}

enum Kind {
    Quiet,
    DoublePush,
    Capture,
    EnPassant,
}

fn emit(
    board: &Board,
    moves: &mut MoveList,
    us: Color,
    to: SquareIdx,
    dr: isize,
    df: isize,
    kind: Kind,
) {
    let to = Square::from_index(to);
    let from = Square(
        (to.rank() as isize - dr) as usize,
        (to.file() as isize - df) as usize,
    );
    let base = Move::new(from, to, Piece::Pawn);
    let mv = match kind {
        Kind::Quiet => base,
        Kind::DoublePush => base.as_double_pawn_push(),
        Kind::Capture => base.with_capture(board.captured_piece_on(to)),
        Kind::EnPassant => base.with_capture(Piece::Pawn).as_en_passant(),
    };

    if to.rank() == us.pawn_promotion_rank() {
        for promotion in PROMOTION_PIECES {
            moves.push(mv.with_promotion(promotion));
        }
    } else {
        moves.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str) -> MoveList {
        let board = Board::try_from_fen(fen).unwrap();
        let mut moves = MoveList::new();
        generate(&board, &mut moves);
        moves
    }

    #[test]
    fn test_startpos_pawn_moves() {
        let moves = pawn_moves(crate::board::START_FEN);
        // eight single pushes plus eight double pushes
        assert_eq!(moves.len(), 16);
        assert_eq!(moves.iter().filter(|m| m.is_double_pawn_push()).count(), 8);
    }

    #[test]
    fn test_blocked_pawn_cannot_push() {
        let moves = pawn_moves("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn test_double_push_blocked_at_jump_square() {
        // a piece on e3 stops both the single and double push
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves.iter().all(|m| !m.is_double_pawn_push()));
    }

    #[test]
    fn test_captures_both_directions() {
        let moves = pawn_moves("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1");
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 2);
        assert!(captures.iter().all(|m| m.captured() == Some(Piece::Pawn)));
    }

    #[test]
    fn test_no_wraparound_capture() {
        // a white pawn on h4 must not "capture" on a5
        let moves = pawn_moves("4k3/8/8/p7/7P/8/8/4K3 w - - 0 1");
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_promotion_expands_to_four_moves() {
        let moves = pawn_moves("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 4);
        let promos: Vec<_> = moves.iter().filter_map(|m| m.promotion()).collect();
        assert!(promos.contains(&Piece::Queen));
        assert!(promos.contains(&Piece::Knight));
        assert!(promos.contains(&Piece::Rook));
        assert!(promos.contains(&Piece::Bishop));
    }

    #[test]
    fn test_en_passant_generated() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to(), Square(5, 3));
        assert_eq!(ep[0].captured(), Some(Piece::Pawn));
    }

    #[test]
    fn test_black_pawns_move_down() {
        let moves = pawn_moves("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.to().rank() < m.from().rank()));
    }
}
