//! The 8x8 board.

use crate::{Color, FenError, FenParser, Piece, Square};
use thiserror::Error;

/// Errors from building a board out of a flat 64-square snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("board snapshot must have 64 squares, got {0}")]
    WrongLength(usize),
}

/// An 8x8 grid of optional pieces.
///
/// The board holds placement only: whose turn it is and what has been
/// played belong to the game session. Copies are explicit through
/// [`Clone`]; hypothetical moves are always played on a clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from FEN text; any active-color field is ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = Board::empty();
        for (row, pieces) in parsed.rows.into_iter().enumerate() {
            board.squares[row] = pieces;
        }
        Ok(board)
    }

    /// Returns the FEN piece-placement field for this board.
    pub fn to_fen(&self) -> String {
        FenParser::placement_to_string(&self.squares)
    }

    /// Builds a board from 64 squares in row-major order.
    pub fn from_snapshot(squares: &[Option<Piece>]) -> Result<Self, SnapshotError> {
        if squares.len() != 64 {
            return Err(SnapshotError::WrongLength(squares.len()));
        }
        let mut board = Board::empty();
        for (sq, piece) in Square::all().zip(squares) {
            board.set(sq, *piece);
        }
        Ok(board)
    }

    /// Returns the 64 squares in row-major order.
    pub fn to_snapshot(&self) -> Vec<Option<Piece>> {
        self.squares.iter().flatten().copied().collect()
    }

    /// Returns true if `row` and `col` both lie in `0..8`.
    #[inline]
    pub const fn is_in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrites the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Returns a copy with every piece's color swapped, squares unchanged.
    pub fn with_colors_swapped(&self) -> Board {
        let mut board = self.clone();
        for row in board.squares.iter_mut() {
            for square in row.iter_mut() {
                *square = square.map(Piece::flipped);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
