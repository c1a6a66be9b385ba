//! Board square representation.

use std::fmt;

/// A square on the board, addressed by (row, column).
///
/// Row 0 is Black's back rank at the top of the screen, row 7 is White's.
/// Column 0 is the a-file. The pair is packed into a single index
/// `row * 8 + col`, so a1 is index 56 and h8 is index 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside `0..8`. Coordinates derived from
    /// the fixed 8x8 layout never trip this; a failure is a caller bug.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square(row * 8 + col)
    }

    /// Creates a square from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row as u8) * 8 + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square::new(b'8' - rank, file - b'a'))
    }

    /// Returns the index (0-63), row-major from the top-left corner.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square `(dr, dc)` away, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::try_new(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
