//! Property tests for move generation, evaluation and greedy selection.

use chess_core::{Board, Color, Move, Piece, PieceKind, Square};
use chess_engine::{
    generate_moves, generate_side_moves, make_move, select_best_move, static_evaluate,
};
use proptest::prelude::*;

fn arb_piece() -> impl Strategy<Value = Piece> {
    (
        prop::sample::select(PieceKind::ALL.to_vec()),
        prop::sample::select(Color::ALL.to_vec()),
    )
        .prop_map(|(kind, color)| Piece::new(kind, color))
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::weighted(0.35, arb_piece()), 64)
        .prop_map(|squares| Board::from_snapshot(&squares).unwrap())
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|idx| Square::from_index(idx).unwrap())
}

proptest! {
    #[test]
    fn generation_is_deterministic(board in arb_board(), from in arb_square()) {
        let first = generate_moves(&board, from);
        let second = generate_moves(&board, from);
        prop_assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn moves_start_on_origin_and_never_capture_friends(board in arb_board(), from in arb_square()) {
        let moves = generate_moves(&board, from);
        match board.get(from) {
            None => prop_assert!(moves.is_empty()),
            Some(mover) => {
                for m in &moves {
                    prop_assert_eq!(m.from(), from);
                    prop_assert_ne!(m.to(), from);
                    if let Some(target) = board.get(m.to()) {
                        prop_assert_ne!(target.color, mover.color);
                    }
                }
            }
        }
    }

    #[test]
    fn slider_ray_blocked_by_first_piece(
        board in arb_board(),
        from in arb_square(),
        kind in prop::sample::select(vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]),
        color in prop::sample::select(Color::ALL.to_vec()),
    ) {
        let mut board = board;
        board.set(from, Some(Piece::new(kind, color)));
        let moves = generate_moves(&board, from);
        let dirs = chess_engine::movegen::slider_directions(kind).unwrap();

        for &(dr, dc) in dirs {
            let Some(first) = from.offset(dr, dc) else { continue };
            let ray: Vec<Move> = moves
                .as_slice()
                .iter()
                .copied()
                .filter(|m| on_ray(from, m.to(), dr, dc))
                .collect();
            match board.get(first) {
                Some(p) if p.color == color => prop_assert!(ray.is_empty()),
                Some(_) => prop_assert_eq!(ray, vec![Move::new(from, first)]),
                None => prop_assert_eq!(ray.first().copied(), Some(Move::new(from, first))),
            }
        }
    }

    #[test]
    fn pawn_double_step_only_from_start_row(
        board in arb_board(),
        from in arb_square(),
        color in prop::sample::select(Color::ALL.to_vec()),
    ) {
        let mut board = board;
        board.set(from, Some(Piece::new(PieceKind::Pawn, color)));
        for m in &generate_moves(&board, from) {
            let rows = (m.to().row() as i8 - from.row() as i8).abs();
            if rows == 2 {
                prop_assert_eq!(from.row(), color.pawn_start_row());
                prop_assert_eq!(m.to().col(), from.col());
            } else {
                prop_assert_eq!(rows, 1);
            }
        }
    }

    #[test]
    fn swapping_colors_negates_score(board in arb_board()) {
        prop_assert_eq!(
            static_evaluate(&board.with_colors_swapped()),
            -static_evaluate(&board)
        );
    }

    #[test]
    fn best_move_is_a_maximal_generated_move(
        board in arb_board(),
        side in prop::sample::select(Color::ALL.to_vec()),
    ) {
        let all = generate_side_moves(&board, side);
        match select_best_move(&board, side) {
            None => prop_assert!(all.is_empty()),
            Some(best) => {
                prop_assert!(all.contains(&best));
                let best_score = static_evaluate(&make_move(&board, best));
                let first_max = all
                    .iter()
                    .copied()
                    .find(|m| static_evaluate(&make_move(&board, *m)) == best_score);
                for m in &all {
                    prop_assert!(static_evaluate(&make_move(&board, *m)) <= best_score);
                }
                prop_assert_eq!(first_max, Some(best));
            }
        }
    }
}

/// Returns true if `to` lies on the ray from `from` in direction `(dr, dc)`.
fn on_ray(from: Square, to: Square, dr: i8, dc: i8) -> bool {
    let mut current = from.offset(dr, dc);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        current = sq.offset(dr, dc);
    }
    false
}

#[test]
fn e2e4_then_single_steps() {
    let board = Board::startpos();
    let e2 = Square::new(6, 4);
    let e4 = Square::new(4, 4);

    let push = Move::new(e2, e4);
    assert!(generate_moves(&board, e2).contains(push));

    let after = make_move(&board, push);
    let forward: Vec<Square> = generate_moves(&after, e4).destinations();
    assert_eq!(forward, vec![Square::new(3, 4)]);

    // The original board is untouched by the hypothetical move.
    assert_eq!(board, Board::startpos());
}

#[test]
fn greedy_picks_the_only_improving_move() {
    // Only the knight on c3 can take something (the rook on d5).
    let board = Board::from_fen("7k/8/8/3r4/8/2N5/8/7K").unwrap();
    let best = select_best_move(&board, Color::White).unwrap();
    assert_eq!(best, Move::from_uci("c3d5").unwrap());
    assert_eq!(static_evaluate(&make_move(&board, best)), 3);
}

#[test]
fn startpos_is_balanced() {
    assert_eq!(static_evaluate(&Board::startpos()), 0);
}
