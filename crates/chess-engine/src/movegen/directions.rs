//! Step and ray offsets for each piece kind, as `(row delta, column delta)`.
//!
//! The order of each table fixes the order moves are generated in, which
//! in turn decides ties in the greedy search.

use chess_core::PieceKind;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Queen rays; the king steps along the same eight directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Returns the ray directions for a sliding piece, or `None` otherwise.
pub const fn slider_directions(kind: PieceKind) -> Option<&'static [(i8, i8)]> {
    match kind {
        PieceKind::Bishop => Some(&BISHOP_DIRECTIONS),
        PieceKind::Rook => Some(&ROOK_DIRECTIONS),
        PieceKind::Queen => Some(&QUEEN_DIRECTIONS),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => None,
    }
}
