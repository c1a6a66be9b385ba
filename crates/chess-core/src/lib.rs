//! Core types for chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`PieceKind`], [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row, column)
//! - [`Move`] for move representation
//! - [`Board`], the 8x8 grid of optional pieces
//! - FEN piece-placement parsing and serialization

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::{Board, SnapshotError};
pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
