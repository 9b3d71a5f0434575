//! Human-readable board printing.

use std::fmt;

use super::state::Board;
use super::types::Square;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_startpos() {
        let rendered = Board::new().to_string();
        assert!(rendered.starts_with("8 r n b q k b n r"));
        assert!(rendered.contains("1 R N B Q K B N R"));
        assert!(rendered.ends_with("White to move"));
    }
}
