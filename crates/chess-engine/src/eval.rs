//! Static material evaluation.

use chess_core::{Board, PieceKind};

/// Material balance from White's point of view; positive favors White.
pub type Score = i32;

/// Returns the fixed material value of a piece kind.
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Sums piece values over the board, White positive and Black negative.
///
/// Material only: no positional, mobility or king-safety terms.
pub fn static_evaluate(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
        .sum()
}
