//! FEN parsing and serialization, plus coordinate-notation move parsing.

use std::str::FromStr;
use std::sync::Arc;

use log::debug;

use super::error::{FenError, MoveParseError};
use super::state::Board;
use super::types::{
    file_to_index, rank_to_index, CastlingRights, Color, Move, Piece, Square, CASTLE_BLACK_K,
    CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
use crate::zobrist::ZobristKeys;

impl Board {
    /// Build a board from a FEN string.
    ///
    /// On error no partially filled board escapes; the caller's position is
    /// either replaced by a fully loaded one or left alone.
    pub fn try_from_fen(fen: &str) -> Result<Board, FenError> {
        Self::try_from_fen_with_keys(fen, Arc::new(ZobristKeys::default()))
    }

    pub(crate) fn try_from_fen_with_keys(
        fen: &str,
        keys: Arc<ZobristKeys>,
    ) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = Board::empty_with_keys(keys);

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(fields[0].to_string()));
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    _ => {
                        let piece = Piece::from_char(c)
                            .ok_or_else(|| FenError::InvalidPiecePlacement(rank_str.to_string()))?;
                        if file >= 8 {
                            return Err(FenError::InvalidPiecePlacement(rank_str.to_string()));
                        }
                        let color = if c.is_ascii_uppercase() {
                            Color::White
                        } else {
                            Color::Black
                        };
                        board.set_piece(color, piece, Square(rank, file));
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(rank_str.to_string()));
            }
        }

        for color in [Color::White, Color::Black] {
            if board.king_square(color).is_none() {
                return Err(FenError::MissingKing(color));
            }
        }

        match fields[1] {
            "w" => board.set_side_to_move(Color::White),
            "b" => board.set_side_to_move(Color::Black),
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        }

        let mut rights = CastlingRights::none();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => rights.set(CASTLE_WHITE_K),
                    'Q' => rights.set(CASTLE_WHITE_Q),
                    'k' => rights.set(CASTLE_BLACK_K),
                    'q' => rights.set(CASTLE_BLACK_Q),
                    _ => return Err(FenError::InvalidCastling(fields[2].to_string())),
                }
            }
        }
        board.set_castling(rights);

        if fields[3] != "-" {
            let chars: Vec<char> = fields[3].chars().collect();
            if chars.len() != 2
                || !('a'..='h').contains(&chars[0])
                || !['3', '6'].contains(&chars[1])
            {
                return Err(FenError::InvalidEnPassant(fields[3].to_string()));
            }
            let sq = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
            board.set_en_passant(Some(sq));
        }

        let halfmove: u32 = fields[4]
            .parse()
            .map_err(|_| FenError::InvalidClock(fields[4].to_string()))?;
        let fullmove: u32 = fields[5]
            .parse()
            .map_err(|_| FenError::InvalidClock(fields[5].to_string()))?;
        if fullmove == 0 {
            return Err(FenError::InvalidClock(fields[5].to_string()));
        }
        board.set_halfmove_clock(halfmove);
        board.set_fullmove_number(fullmove);

        // hash is built incrementally during setup; rebuild so the side to
        // move is folded in, then cache the check status
        board.hash = board.calculate_hash();
        board.in_check = board.is_in_check(board.side_to_move());

        debug_assert!(board.invariants_hold());
        debug!("loaded position {fen}");
        Ok(board)
    }

    /// Serialize this position as FEN
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empties = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empties > 0 {
                            fen.push(char::from_digit(empties, 10).unwrap_or('0'));
                            empties = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                fen.push(char::from_digit(empties, 10).unwrap_or('0'));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        fen.push_str(&self.castling_rights().to_string());

        fen.push(' ');
        match self.en_passant_square() {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));
        fen
    }

    /// Parse a move in coordinate notation ("e2e4", "a7a8q") against the
    /// legal moves of this position.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let notation = notation.trim();
        // length is in bytes, so non-ASCII input must be rejected before
        // slicing lands inside a multi-byte character
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return Err(MoveParseError::InvalidNotation(notation.to_string()));
        }
        let from: Square = notation[0..2].parse()?;
        let to: Square = notation[2..4].parse()?;
        let promotion = match notation.chars().nth(4) {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p @ (Piece::Queen | Piece::Knight | Piece::Rook | Piece::Bishop)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion(c)),
            },
        };

        match self.piece_at(from) {
            Some((color, _)) if color == self.side_to_move() => {}
            _ => return Err(MoveParseError::NoPieceOnSquare(from)),
        }

        self.generate_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove(notation.to_string()))
    }

    /// Parse and apply a move in coordinate notation
    pub fn make_move_str(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.apply_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
