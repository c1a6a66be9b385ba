//! Move representation.

use crate::Square;
use std::fmt;

/// A move from one square to another.
///
/// Captures are not tagged: a move onto an enemy piece is a capture by
/// virtue of the destination's occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_endpoints() {
        let e2 = Square::new(6, 4);
        let e4 = Square::new(4, 4);
        let m = Move::new(e2, e4);
        assert_eq!(m.from(), e2);
        assert_eq!(m.to(), e4);
    }

    #[test]
    fn move_uci() {
        let m = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(m.to_uci(), "e2e4");
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("g8f6").unwrap();
        assert_eq!(m.from(), Square::new(0, 6));
        assert_eq!(m.to(), Square::new(2, 5));

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e7e8q").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
