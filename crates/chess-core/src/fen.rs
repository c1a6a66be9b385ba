//! FEN (Forsyth-Edwards Notation) piece-placement parsing.
//!
//! The board carries no castling, en passant or clock state, so only the
//! placement field and the optional active-color field are read. A full
//! six-field FEN is accepted and its trailing fields are ignored.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1, 2 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Placement rows, top row (row 0) first, each exactly 8 entries.
    pub rows: Vec<[Option<Piece>; 8]>,
    /// Active color, if the text carried one.
    pub active_color: Option<Color>,
}

impl FenParser {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !matches!(parts.len(), 1 | 2 | 6) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let rows = Self::parse_placement(parts[0])?;

        let active_color = match parts.get(1) {
            None => None,
            Some(&"w") => Some(Color::White),
            Some(&"b") => Some(Color::Black),
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser { rows, active_color })
    }

    fn parse_placement(placement: &str) -> Result<Vec<[Option<Piece>; 8]>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut rows = Vec::with_capacity(8);
        for (i, rank) in ranks.iter().enumerate() {
            let mut row = [None; 8];
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        row[col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    col
                )));
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Serializes placement rows (top row first) back to FEN placement text.
    pub fn placement_to_string<'a, I>(rows: I) -> String
    where
        I: IntoIterator<Item = &'a [Option<Piece>; 8]>,
    {
        let mut fen = String::new();
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                fen.push('/');
            }
            let mut empty_count = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
        }
        fen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, Some(Color::White));
        assert_eq!(
            fen.rows[0][4],
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            fen.rows[6][0],
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(fen.rows[3].iter().all(Option::is_none));
    }

    #[test]
    fn parse_placement_only() {
        let fen = FenParser::parse("8/8/8/8/8/8/8/K7").unwrap();
        assert_eq!(fen.active_color, None);
        assert_eq!(
            fen.rows[7][0],
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn parse_full_fen_ignores_trailing_fields() {
        let fen =
            FenParser::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(fen.active_color, Some(Color::Black));
        assert_eq!(
            fen.rows[4][4],
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn placement_roundtrip() {
        let original = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let parsed = FenParser::parse(original).unwrap();
        assert_eq!(FenParser::placement_to_string(&parsed.rows), original);
    }

    #[test]
    fn invalid_part_count() {
        assert!(matches!(
            FenParser::parse(""),
            Err(FenError::InvalidPartCount(0))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w KQkq"),
            Err(FenError::InvalidPartCount(3))
        ));
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("7/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("09/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
