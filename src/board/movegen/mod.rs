//! Move generation.
//!
//! Generation runs in two phases. Each piece family contributes pseudo-legal
//! moves, then a legality filter drops every move that leaves the mover's own
//! king attacked by applying it to a throwaway copy of the board. The same
//! pass flags moves that give check, since the applied copy already knows.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use crate::cache::MoveCache;

use super::attack_tables::{self, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::state::Board;
use super::types::{Bitboard, Color, MoveList, Piece, Square};

impl Board {
    /// All pseudo-legal moves for the side to move.
    ///
    /// Castling through an attacked square is already excluded here; moves
    /// that expose the mover's own king are not.
    ///
    /// Generating for a position without a king for the side to move is a
    /// precondition violation; debug builds assert on it.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        debug_assert!(
            self.king_square(self.side_to_move()).is_some(),
            "side to move has no king"
        );
        let mut moves = MoveList::new();
        pawns::generate(self, &mut moves);
        knights::generate(self, &mut moves);
        sliders::generate(self, &mut moves);
        kings::generate(self, &mut moves);
        moves
    }

    /// All legal moves for the side to move, each flagged with whether it
    /// gives check.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        let mover = self.side_to_move();

        // walk backwards so removal never disturbs unvisited indices
        for idx in (0..moves.len()).rev() {
            let mv = moves[idx];
            let mut scratch = self.clone();
            scratch.apply_move(mv);
            if scratch.is_in_check(mover) {
                moves.remove(idx);
            } else {
                moves.set(idx, mv.with_check(scratch.in_check()));
            }
        }
        trace!("{} legal moves for {mover}", moves.len());
        moves
    }

    /// Legal moves via the cache, generating and storing on a miss
    #[must_use]
    pub fn legal_moves_cached(&self, cache: &mut MoveCache) -> MoveList {
        if let Some(found) = cache.probe(self.hash()) {
            return found.clone();
        }
        let moves = self.generate_moves();
        cache.insert(self.hash(), moves.clone());
        moves
    }

    /// Whether `by` attacks `sq` in the current position
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let idx = sq.index().as_usize();
        let occupied = self.occupied();

        // a pawn of `by` attacks sq from the squares a pawn of the other
        // color would attack moving out of sq
        if PAWN_ATTACKS[by.opponent().index()][idx] & self.pieces(by, Piece::Pawn).0 != 0 {
            return true;
        }
        if KNIGHT_ATTACKS[idx] & self.pieces(by, Piece::Knight).0 != 0 {
            return true;
        }
        if KING_ATTACKS[idx] & self.pieces(by, Piece::King).0 != 0 {
            return true;
        }

        let queens = self.pieces(by, Piece::Queen);
        let diag = self.pieces(by, Piece::Bishop).or(queens);
        if !attack_tables::bishop_attacks(sq.index(), occupied)
            .and(diag)
            .is_empty()
        {
            return true;
        }
        let ortho = self.pieces(by, Piece::Rook).or(queens);
        !attack_tables::rook_attacks(sq.index(), occupied)
            .and(ortho)
            .is_empty()
    }

    /// Whether `color`'s king is attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_square_attacked(sq, color.opponent()),
            None => false,
        }
    }

    /// Side to move is in check with no legal moves
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    /// Side to move is not in check but has no legal moves
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth`
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in &moves {
            let mut next = self.clone();
            next.apply_move(*mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    /// Targets on `attacks` split into quiet moves and captures against the
    /// opponent of `us`
    pub(crate) fn split_targets(&self, us: Color, attacks: Bitboard) -> (Bitboard, Bitboard) {
        let own = self.occupied_by(us);
        let enemy = self.occupied_by(us.opponent());
        (attacks.and(own.or(enemy).not()), attacks.and(enemy))
    }

    /// The opponent piece on `sq`, for recording captures.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty, which means the occupancy masks and
    /// piece masks disagree.
    pub(crate) fn captured_piece_on(&self, sq: Square) -> Piece {
        match self.piece_at(sq) {
            Some((_, piece)) => piece,
            None => panic!("capture target {sq} is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.generate_moves().len(), 20);
    }

    #[test]
    #[should_panic(expected = "side to move has no king")]
    fn test_kingless_board_cannot_generate() {
        let _ = Board::empty().pseudo_legal_moves();
    }

    #[test]
    fn test_is_square_attacked() {
        let board = Board::new();
        // f3 is covered by the g2 pawn and the g1 knight
        assert!(board.is_square_attacked(Square(2, 5), Color::White));
        // e4 is attacked by nobody
        assert!(!board.is_square_attacked(Square(3, 4), Color::White));
        assert!(!board.is_square_attacked(Square(3, 4), Color::Black));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // the e-file knight is pinned against the king by the rook
        let fen = "4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        let moves = board.generate_moves();
        assert!(moves.iter().all(|mv| mv.mover() != Piece::Knight));
    }

    #[test]
    fn test_check_must_be_addressed() {
        // king in check from a rook; every legal move must resolve it
        let fen = "4k3/8/8/8/8/8/8/r3K3 w - - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(board.in_check());
        for mv in &board.generate_moves() {
            let mut next = board.clone();
            next.apply_move(*mv);
            assert!(!next.is_in_check(Color::White));
        }
    }

    #[test]
    fn test_checkmate_detection() {
        // back-rank mate
        let fen = "6k1/5ppp/8/8/8/8/8/4K2R w - - 0 1";
        let mut board = Board::try_from_fen(fen).unwrap();
        let mv = board.parse_move("h1h8").unwrap();
        board.apply_move(mv);
        assert!(board.is_checkmate());
        assert!(!board.is_stalemate());
    }

    #[test]
    fn test_stalemate_detection() {
        let fen = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(board.is_stalemate());
        assert!(!board.is_checkmate());
    }

    #[test]
    fn test_gives_check_flag_matches_application() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        for mv in &board.generate_moves() {
            let mut next = board.clone();
            next.apply_move(*mv);
            assert_eq!(mv.gives_check(), next.in_check(), "move {mv}");
        }
    }

    #[test]
    fn test_cached_moves_match_generated() {
        let board = Board::new();
        let mut cache = MoveCache::with_capacity(1021);
        let first = board.legal_moves_cached(&mut cache);
        let second = board.legal_moves_cached(&mut cache);
        assert_eq!(first, board.generate_moves());
        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }
}
