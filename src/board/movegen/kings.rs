//! King move generation, including castling.

use crate::board::attack_tables::KING_ATTACKS;
use crate::board::state::Board;
use crate::board::types::{bit_for_square, Bitboard, Color, Move, MoveList, Piece, Square};

pub(super) fn generate(board: &Board, moves: &mut MoveList) {
    let us = board.side_to_move();
    let Some(from) = board.king_square(us) else {
        return;
    };

    // squares beside the enemy king can never be stepped onto, so exclude
    // them here instead of leaving it to the legality filter
    let enemy_king_zone = match board.king_square(us.opponent()) {
        Some(sq) => Bitboard(KING_ATTACKS[sq.index().as_usize()]),
        None => Bitboard::EMPTY,
    };

    let attacks = Bitboard(KING_ATTACKS[from.index().as_usize()]).and(enemy_king_zone.not());
    let (quiets, captures) = board.split_targets(us, attacks);
    for to in quiets.iter() {
        moves.push(Move::new(from, Square::from_index(to), Piece::King));
    }
    for to in captures.iter() {
        let to = Square::from_index(to);
        moves.push(Move::new(from, to, Piece::King).with_capture(board.captured_piece_on(to)));
    }

    generate_castles(board, moves, us, from);
}

/// Castling requires the right, the rook at home, empty squares between,
/// a king not currently in check and a transit square that is not attacked.
/// The landing square is vetted by the legality filter like any other move.
fn generate_castles(board: &Board, moves: &mut MoveList, us: Color, from: Square) {
    if board.in_check() {
        return;
    }
    let rank = us.back_rank();
    if from != Square(rank, 4) {
        return;
    }

    let rights = board.castling_rights();
    let (kingside, queenside) = match us {
        Color::White => (rights.white_kingside(), rights.white_queenside()),
        Color::Black => (rights.black_kingside(), rights.black_queenside()),
    };
    let them = us.opponent();
    let rooks = board.pieces(us, Piece::Rook);
    let occupied = board.occupied();

    if kingside
        && rooks.contains(Square(rank, 7))
        && occupied.and(between(rank, 5, 6)).is_empty()
        && !board.is_square_attacked(Square(rank, 5), them)
    {
        moves.push(Move::new(from, Square(rank, 6), Piece::King).as_castle());
    }

    if queenside
        && rooks.contains(Square(rank, 0))
        && occupied.and(between(rank, 1, 3)).is_empty()
        && !board.is_square_attacked(Square(rank, 3), them)
    {
        moves.push(Move::new(from, Square(rank, 2), Piece::King).as_castle());
    }
}

fn between(rank: usize, from_file: usize, to_file: usize) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for file in from_file..=to_file {
        mask = mask.or(bit_for_square(Square(rank, file)));
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king_moves(fen: &str) -> MoveList {
        let board = Board::try_from_fen(fen).unwrap();
        let mut moves = MoveList::new();
        generate(&board, &mut moves);
        moves
    }

    fn castles(moves: &MoveList) -> Vec<Move> {
        moves.iter().filter(|m| m.is_castle()).copied().collect()
    }

    #[test]
    fn test_both_castles_available() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(castles(&moves).len(), 2);
    }

    #[test]
    fn test_castle_requires_right() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R3K2R w K - 0 1");
        let c = castles(&moves);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].to(), Square(0, 6));
    }

    #[test]
    fn test_castle_blocked_by_piece() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R2QK2R w KQ - 0 1");
        let c = castles(&moves);
        assert_eq!(c.len(), 1, "queenside blocked by own queen on d1");
    }

    #[test]
    fn test_castle_requires_rook_at_home() {
        let moves = king_moves("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
        assert_eq!(castles(&moves).len(), 1);
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let moves = king_moves("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(castles(&moves).is_empty());
    }

    #[test]
    fn test_no_castle_through_attacked_square() {
        // black rook on f8 covers f1
        let moves = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let c = castles(&moves);
        assert_eq!(c.len(), 1, "kingside passes through f1");
        assert_eq!(c[0].to(), Square(0, 2));
    }

    #[test]
    fn test_queenside_b_file_attack_does_not_block() {
        // b1 may be attacked; the king never crosses it
        let moves = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(castles(&moves).len(), 1);
    }

    #[test]
    fn test_kings_cannot_touch() {
        let moves = king_moves("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        // d4, c4 and e4 border the black king
        assert!(moves.iter().all(|m| m.to().rank() != 3
            || !(2..=4).contains(&m.to().file())));
    }
}
