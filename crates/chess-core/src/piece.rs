//! Chess piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the lowercase FEN letter for this kind.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind and its color.
///
/// Two pieces of the same kind and color are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "piece")]
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the FEN character: uppercase for White, lowercase for Black.
    pub const fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    /// Returns the Unicode chess glyph used to draw this piece.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Returns the same kind with the other color.
    #[inline]
    pub const fn flipped(self) -> Piece {
        Piece {
            kind: self.kind,
            color: self.color.opposite(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_fen() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).to_fen_char(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).to_fen_char(), 'p');
        assert_eq!(Piece::new(PieceKind::King, Color::White).to_fen_char(), 'K');
        assert_eq!(
            Piece::new(PieceKind::Knight, Color::Black).to_fen_char(),
            'n'
        );
    }

    #[test]
    fn piece_from_fen() {
        assert_eq!(
            Piece::from_fen_char('P'),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Piece::new(PieceKind::King, Color::White).glyph(), '♔');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).glyph(), '♟');
    }

    #[test]
    fn snapshot_shape() {
        let p = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"piece":"knight","color":"white"}"#
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed: Result<Piece, _> =
            serde_json::from_str(r#"{"piece":"wizard","color":"white"}"#);
        assert!(parsed.is_err());
    }
}
