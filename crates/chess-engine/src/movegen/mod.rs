//! Move generation.
//!
//! Generation is pseudo-legal: moves follow each piece's movement pattern
//! and the occupancy rules, but nothing checks whether the mover's own
//! king is left in check. The same generator drives destination
//! highlighting for human players and the computer's search.

mod directions;

use chess_core::{Board, Color, Move, Piece, PieceKind, Square};

pub use directions::{
    slider_directions, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};

/// The moves of a single piece, with a fixed maximum capacity.
///
/// A queen in the middle of an empty board has 27 moves, the most any
/// piece can reach, so a fixed-size array avoids heap allocations during
/// search.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of the list.
    pub const MAX_MOVES: usize = 32;

    const FILLER: Move = Move::new(Square::new(0, 0), Square::new(0, 0));

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Self::FILLER; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if the list holds `m`.
    pub fn contains(&self, m: Move) -> bool {
        self.as_slice().contains(&m)
    }

    /// Returns the destination squares in generation order.
    pub fn destinations(&self) -> Vec<Square> {
        self.as_slice().iter().map(|m| m.to()).collect()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the pseudo-legal moves of the piece standing on `from`.
///
/// An empty origin yields an empty list. The order is fixed per piece
/// kind: pawn pushes before captures (left column first), step and ray
/// pieces in the order of their direction tables.
pub fn generate_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    push_piece_moves(board, from, &mut moves);
    moves
}

/// Generates the pseudo-legal moves of every piece of `side`.
///
/// Origins are visited row-major, and each origin's moves keep the order
/// of [`generate_moves`]. This is the order the greedy search scans in.
pub fn generate_side_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|(from, _)| generate_moves(board, from).as_slice().to_vec())
        .collect()
}

fn push_piece_moves(board: &Board, from: Square, moves: &mut MoveList) {
    let Some(piece) = board.get(from) else {
        return;
    };

    let us = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, us, moves),
        PieceKind::Knight => generate_step_moves(board, from, us, &KNIGHT_OFFSETS, moves),
        PieceKind::King => generate_step_moves(board, from, us, &KING_OFFSETS, moves),
        PieceKind::Bishop => generate_slide_moves(board, from, us, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => generate_slide_moves(board, from, us, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => generate_slide_moves(board, from, us, &QUEEN_DIRECTIONS, moves),
    }
}

/// Returns true if `sq` holds a piece of the opposite color to `us`.
#[inline]
fn is_enemy(board: &Board, sq: Square, us: Color) -> bool {
    matches!(board.get(sq), Some(p) if p.color != us)
}

/// Pawn pushes and diagonal captures. No en passant and no promotion: a
/// pawn on the far row simply has no forward moves left.
fn generate_pawn_moves(board: &Board, from: Square, us: Color, moves: &mut MoveList) {
    let dir = us.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.get(one).is_none() {
            moves.push(Move::new(from, one));

            if from.row() == us.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.get(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if is_enemy(board, to, us) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// Single steps (knight, king): any on-board square not held by a friend.
fn generate_step_moves(
    board: &Board,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                Some(p) if p.color == us => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}

/// Rays (bishop, rook, queen): empty squares extend the ray, an enemy ends
/// it inclusively, a friend ends it exclusively.
fn generate_slide_moves(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut current = from.offset(dr, dc);
        while let Some(to) = current {
            match board.get(to) {
                None => moves.push(Move::new(from, to)),
                Some(p) if p.color != us => {
                    moves.push(Move::new(from, to));
                    break;
                }
                Some(_) => break,
            }
            current = to.offset(dr, dc);
        }
    }
}

/// Plays `m` on `board` in place and returns the piece it displaced.
///
/// The piece on the origin overwrites the destination and the origin is
/// cleared; a displaced piece is the capture. Callers pass moves produced
/// by the generator, so the origin is always occupied.
pub fn apply_move(board: &mut Board, m: Move) -> Option<Piece> {
    let mover = board.get(m.from());
    let captured = board.get(m.to());
    board.set(m.to(), mover);
    board.set(m.from(), None);
    captured
}

/// Returns a copy of `board` with `m` played, leaving `board` untouched.
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut next = board.clone();
    apply_move(&mut next, m);
    next
}
