//! Board state: piece placement, game state and the incremental hash.

use std::fmt;
use std::sync::Arc;

use crate::zobrist::ZobristKeys;

use super::history::MoveHistory;
use super::types::{
    bit_for_square, Bitboard, CastlingRights, Color, Piece, Square, ALL_CASTLING_RIGHTS,
};

/// A chess position.
///
/// Piece placement lives in one bitboard per (color, piece) pair plus
/// per-color and total occupancy masks. King squares and the side-to-move
/// check status are cached, and a Zobrist hash is maintained incrementally
/// as moves are applied.
#[derive(Clone)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
    occupied_by: [Bitboard; 2],
    occupied: Bitboard,
    kings: [Option<Square>; 2],

    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,

    pub(crate) in_check: bool,
    pub(crate) hash: u64,
    pub(crate) history: MoveHistory,
    pub(crate) keys: Arc<ZobristKeys>,
}

impl Board {
    /// An empty board with White to move and no castling rights
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_with_keys(Arc::new(ZobristKeys::default()))
    }

    pub(crate) fn empty_with_keys(keys: Arc<ZobristKeys>) -> Self {
        let mut board = Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied_by: [Bitboard::EMPTY; 2],
            occupied: Bitboard::EMPTY,
            kings: [None; 2],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            in_check: false,
            hash: 0,
            history: MoveHistory::new(),
            keys,
        };
        board.hash = board.calculate_hash();
        board
    }

    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::try_from_fen(super::START_FEN).expect("start position FEN parses")
    }

    /// Place a piece, updating occupancy, king cache and hash
    pub(crate) fn set_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        let bit = bit_for_square(sq);
        debug_assert!(
            self.occupied.and(bit).is_empty(),
            "square {sq} already occupied"
        );
        self.pieces[color.index()][piece.index()] =
            self.pieces[color.index()][piece.index()].or(bit);
        self.occupied_by[color.index()] = self.occupied_by[color.index()].or(bit);
        self.occupied = self.occupied.or(bit);
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
        self.hash ^= self.keys.piece_key(color, piece, sq);
    }

    /// Remove a piece, updating occupancy, king cache and hash
    pub(crate) fn remove_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        let bit = bit_for_square(sq);
        debug_assert!(
            !self.pieces[color.index()][piece.index()].and(bit).is_empty(),
            "no {color} {piece:?} on {sq}"
        );
        self.pieces[color.index()][piece.index()] =
            self.pieces[color.index()][piece.index()].and(bit.not());
        self.occupied_by[color.index()] = self.occupied_by[color.index()].and(bit.not());
        self.occupied = self.occupied.and(bit.not());
        if piece == Piece::King {
            self.kings[color.index()] = None;
        }
        self.hash ^= self.keys.piece_key(color, piece, sq);
    }

    /// The piece on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq);
        if self.occupied.and(bit).is_empty() {
            return None;
        }
        let color = if !self.occupied_by[Color::White.index()].and(bit).is_empty() {
            Color::White
        } else {
            Color::Black
        };
        for piece in Piece::ALL {
            if !self.pieces[color.index()][piece.index()].and(bit).is_empty() {
                return Some((color, piece));
            }
        }
        None
    }

    /// Bitboard for one (color, piece) pair
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by either side
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// All squares occupied by one side
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied_by[color.index()]
    }

    /// Cached king square for a color
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Toggle the side to move, updating the hash
    pub(crate) fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= self.keys.side_key();
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub(crate) fn set_castling(&mut self, rights: CastlingRights) {
        self.hash ^= self.castling_hash(self.castling);
        self.castling = rights;
        self.hash ^= self.castling_hash(rights);
    }

    #[inline]
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        if let Some(old) = self.en_passant {
            self.hash ^= self.keys.en_passant_key(old);
        }
        self.en_passant = sq;
        if let Some(new) = sq {
            self.hash ^= self.keys.en_passant_key(new);
        }
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub(crate) fn set_fullmove_number(&mut self, n: u32) {
        self.fullmove_number = n;
    }

    /// Whether the side to move is currently in check
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// The Zobrist hash of this position
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Moves applied to this board, oldest first (bounded)
    #[inline]
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    fn castling_hash(&self, rights: CastlingRights) -> u64 {
        let mut h = 0u64;
        for bit in 0..4usize {
            if rights.0 & ALL_CASTLING_RIGHTS & (1u8 << bit) != 0 {
                h ^= self.keys.castling_key(bit);
            }
        }
        h
    }

    /// Recompute the hash from scratch. The incremental hash must always
    /// agree with this.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut h = 0u64;
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                for idx in self.pieces(color, piece).iter() {
                    h ^= self.keys.piece_key(color, piece, Square::from_index(idx));
                }
            }
        }
        h ^= self.castling_hash(self.castling);
        if let Some(ep) = self.en_passant {
            h ^= self.keys.en_passant_key(ep);
        }
        if self.side_to_move == Color::White {
            h ^= self.keys.side_key();
        }
        h
    }

    /// Structural consistency check used by debug assertions.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        // piece masks of one color must be pairwise disjoint and union to
        // the color occupancy
        for color in [Color::White, Color::Black] {
            let mut union = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let mask = self.pieces(color, piece);
                if !union.and(mask).is_empty() {
                    return false;
                }
                union = union.or(mask);
            }
            if union != self.occupied_by[color.index()] {
                return false;
            }
        }
        if self
            .occupied_by[0]
            .and(self.occupied_by[1])
            .popcount()
            != 0
        {
            return false;
        }
        if self.occupied_by[0].or(self.occupied_by[1]) != self.occupied {
            return false;
        }
        for color in [Color::White, Color::Black] {
            let king_mask = self.pieces(color, Piece::King);
            match self.kings[color.index()] {
                Some(sq) => {
                    if king_mask != bit_for_square(sq) {
                        return false;
                    }
                }
                None => {
                    if !king_mask.is_empty() {
                        return false;
                    }
                }
            }
        }
        self.hash == self.calculate_hash()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}
