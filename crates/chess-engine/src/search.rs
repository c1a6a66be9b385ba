//! Greedy one-ply move selection.
//!
//! Every pseudo-legal move of the side to play is tried on a private copy
//! of the board, the resulting position is scored with
//! [`static_evaluate`], and the best-scoring move wins. There is no
//! lookahead, pruning, randomness or time limit, so the result is fully
//! determined by the board.

use crate::eval::{static_evaluate, Score};
use crate::movegen::{generate_moves, make_move};
use chess_core::{Board, Color, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How the search compares successor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Maximize the raw White-relative score whichever side is playing.
    ///
    /// For Black this picks the move that is best for White. This is the
    /// behavior the board has always shipped with and stays the default.
    #[default]
    WhiteRelative,
    /// Maximize the score from the playing side's point of view
    /// (the White-relative score negated for Black).
    SideRelative,
}

impl Scoring {
    /// Scores `board` for `side` under this policy.
    #[inline]
    pub fn score(self, board: &Board, side: Color) -> Score {
        let raw = static_evaluate(board);
        match self {
            Scoring::WhiteRelative => raw,
            Scoring::SideRelative => side.sign() * raw,
        }
    }
}

/// Outcome of a greedy search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move.
    pub mov: Move,
    /// Its score under the policy used for the search.
    pub score: Score,
    /// How many candidate moves were evaluated.
    pub candidates: usize,
}

/// Picks the best move for `side` using [`Scoring::WhiteRelative`].
///
/// Returns `None` when `side` has no pseudo-legal move anywhere.
pub fn select_best_move(board: &Board, side: Color) -> Option<Move> {
    search(board, side, Scoring::default()).map(|result| result.mov)
}

/// Picks the best move for `side` under an explicit scoring policy.
pub fn select_best_move_with(board: &Board, side: Color, scoring: Scoring) -> Option<Move> {
    search(board, side, scoring).map(|result| result.mov)
}

/// Runs the greedy search and reports the chosen move with its score.
///
/// Origins are visited row-major and each origin's moves in generation
/// order; a later move replaces the current best only on a strictly
/// greater score, so ties keep the first move found.
pub fn search(board: &Board, side: Color, scoring: Scoring) -> Option<SearchResult> {
    let mut best: Option<(Move, Score)> = None;
    let mut candidates = 0usize;

    for (from, _) in board.pieces_of(side) {
        for &m in &generate_moves(board, from) {
            let successor = make_move(board, m);
            let score = scoring.score(&successor, side);
            candidates += 1;
            trace!(mov = %m, score, "candidate");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
        }
    }

    let result = best.map(|(mov, score)| SearchResult {
        mov,
        score,
        candidates,
    });

    match &result {
        Some(r) => debug!(
            side = %side,
            candidates,
            best = %r.mov,
            score = r.score,
            ?scoring,
            "greedy search finished"
        ),
        None => debug!(side = %side, ?scoring, "no move available"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    #[test]
    fn white_takes_the_free_queen() {
        // White rook a1 can capture the black queen on a8; nothing else gains material.
        let board = Board::from_fen("q6k/8/8/8/8/8/8/R6K").unwrap();
        assert_eq!(select_best_move(&board, Color::White), Some(mv("a1a8")));
    }

    #[test]
    fn ties_keep_first_move_in_scan_order() {
        // Lone white king on h1 with no captures: every move scores the same,
        // so the first generated move of the first origin wins.
        let board = Board::from_fen("k7/8/8/8/8/8/8/7K").unwrap();
        let first = generate_moves(&board, sq("h1"))[0];
        assert_eq!(select_best_move(&board, Color::White), Some(first));
    }

    #[test]
    fn boxed_in_king_has_no_move() {
        // King a1 walled in by friendly pawns that fill the a- and b-files;
        // every pawn is blocked head-on by a friend and has no enemy to take.
        let board = Board::from_fen("PP6/PP6/PP6/PP6/PP6/PP6/PP6/KP6").unwrap();
        assert!(generate_moves(&board, sq("a1")).is_empty());
        assert_eq!(select_best_move(&board, Color::White), None);
    }

    #[test]
    fn side_without_pieces_has_no_move() {
        let board = Board::from_fen("8/8/8/8/8/8/8/K7").unwrap();
        assert_eq!(select_best_move(&board, Color::Black), None);
    }

    #[test]
    fn black_search_maximizes_white_score_by_default() {
        // Black queen d8 can capture the white rook on d1 (score drops for White)
        // or step quietly. White-relative scoring prefers the quiet move.
        let board = Board::from_fen("3q3k/8/8/8/8/8/8/3R3K").unwrap();
        let chosen = select_best_move(&board, Color::Black).unwrap();
        assert_ne!(chosen, mv("d8d1"));
        let quiet = static_evaluate(&make_move(&board, chosen));
        assert_eq!(quiet, static_evaluate(&board));
    }

    #[test]
    fn side_relative_scoring_lets_black_capture() {
        let board = Board::from_fen("3q3k/8/8/8/8/8/8/3R3K").unwrap();
        assert_eq!(
            select_best_move_with(&board, Color::Black, Scoring::SideRelative),
            Some(mv("d8d1"))
        );
    }

    #[test]
    fn scoring_policies_agree_for_white() {
        let board = Board::from_fen("q6k/8/8/8/8/8/8/R6K").unwrap();
        assert_eq!(
            select_best_move_with(&board, Color::White, Scoring::WhiteRelative),
            select_best_move_with(&board, Color::White, Scoring::SideRelative)
        );
    }

    #[test]
    fn search_reports_score_and_candidates() {
        let board = Board::startpos();
        let result = search(&board, Color::White, Scoring::WhiteRelative).unwrap();
        assert_eq!(result.candidates, 20);
        assert_eq!(result.score, 0);
        // Nothing can be captured, so the first pawn push (a2a3) wins the tie.
        assert_eq!(result.mov, mv("a2a3"));
    }

    #[test]
    fn search_does_not_mutate_the_board() {
        let board = Board::from_fen("q6k/8/8/8/8/8/8/R6K").unwrap();
        let before = board.clone();
        let _ = select_best_move(&board, Color::White);
        assert_eq!(board, before);
    }
}
