//! Move engine for the browser chess board.
//!
//! This crate provides:
//! - [`generate_moves`] - pseudo-legal moves of the piece on a square
//! - [`static_evaluate`] - material balance from White's point of view
//! - [`select_best_move`] - greedy one-ply choice of a move for one side
//! - [`Game`] - a game session with turns, selection, history and undo
//!
//! # Rules
//!
//! Generation follows each piece's movement pattern and occupancy rules
//! only. There is no check detection, castling, en passant or promotion,
//! and a generated move may leave the mover's king attacked.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Color, Square};
//! use chess_engine::{generate_moves, select_best_move, static_evaluate};
//!
//! let board = Board::startpos();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! assert_eq!(generate_moves(&board, e2).len(), 2);
//! assert_eq!(static_evaluate(&board), 0);
//! assert!(select_best_move(&board, Color::Black).is_some());
//! ```

mod config;
mod eval;
mod game;
pub mod movegen;
pub mod search;

pub use config::{ConfigError, GameConfig, GameMode};
pub use eval::{piece_value, static_evaluate, Score};
pub use game::{ClickOutcome, Game, GameError, GameMove, GameStatus};
pub use movegen::{apply_move, generate_moves, generate_side_moves, make_move, MoveList};
pub use search::{select_best_move, select_best_move_with, Scoring, SearchResult};
