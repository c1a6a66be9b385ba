//! Plain data shapes that cross the JavaScript boundary.
//!
//! Everything here is ordinary Rust so it can be built and tested on the
//! host; `lib.rs` only converts these values to and from `JsValue`.

use chess_core::{Board, Color, Move, Piece, SnapshotError, Square};
use chess_engine::{ClickOutcome, GameError, GameMove, Scoring};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while adapting JavaScript input.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },
    #[error("unknown color: {0}")]
    UnknownColor(String),
    #[error("unknown scoring policy: {0}")]
    UnknownScoring(String),
}

/// A square as the page addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub row: u8,
    pub col: u8,
}

impl From<Square> for SquareView {
    fn from(sq: Square) -> Self {
        SquareView {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

/// A move with both coordinate forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    pub from: SquareView,
    pub to: SquareView,
    pub uci: String,
}

impl From<Move> for MoveView {
    fn from(m: Move) -> Self {
        MoveView {
            from: m.from().into(),
            to: m.to().into(),
            uci: m.to_uci(),
        }
    }
}

/// The cue the page plays after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Move,
    Capture,
}

/// A played move as reported to the page.
///
/// The move fields are spelled out rather than flattened from
/// [`MoveView`]: a flattened struct serializes as a map, which reaches
/// JavaScript as a `Map` instead of a plain object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcomeView {
    pub from: SquareView,
    pub to: SquareView,
    pub uci: String,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub sound: Sound,
}

impl From<GameMove> for MoveOutcomeView {
    fn from(gm: GameMove) -> Self {
        MoveOutcomeView {
            from: gm.mov.from().into(),
            to: gm.mov.to().into(),
            uci: gm.mov.to_uci(),
            piece: gm.piece,
            captured: gm.captured,
            sound: if gm.is_capture() {
                Sound::Capture
            } else {
                Sound::Move
            },
        }
    }
}

/// What a click did, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickView {
    Selected {
        square: SquareView,
        destinations: Vec<SquareView>,
    },
    Deselected,
    Moved {
        outcome: MoveOutcomeView,
    },
    Rejected,
    Ignored,
}

impl From<ClickOutcome> for ClickView {
    fn from(outcome: ClickOutcome) -> Self {
        match outcome {
            ClickOutcome::Selected {
                square,
                destinations,
            } => ClickView::Selected {
                square: square.into(),
                destinations: destinations.into_iter().map(SquareView::from).collect(),
            },
            ClickOutcome::Deselected => ClickView::Deselected,
            ClickOutcome::Moved(gm) => ClickView::Moved {
                outcome: gm.into(),
            },
            ClickOutcome::Rejected => ClickView::Rejected,
            ClickOutcome::Ignored => ClickView::Ignored,
        }
    }
}

pub fn square_at(row: u8, col: u8) -> Result<Square, BindingError> {
    if row < 8 && col < 8 {
        Ok(Square::new(row, col))
    } else {
        Err(BindingError::OffBoard { row, col })
    }
}

pub fn parse_color(name: &str) -> Result<Color, BindingError> {
    Color::from_name(name).ok_or_else(|| BindingError::UnknownColor(name.to_string()))
}

/// Accepts the serde names of [`Scoring`]; `None` selects the default.
pub fn parse_scoring(name: Option<&str>) -> Result<Scoring, BindingError> {
    match name {
        None => Ok(Scoring::default()),
        Some("white_relative") => Ok(Scoring::WhiteRelative),
        Some("side_relative") => Ok(Scoring::SideRelative),
        Some(other) => Err(BindingError::UnknownScoring(other.to_string())),
    }
}

pub fn board_from_snapshot(squares: Vec<Option<Piece>>) -> Result<Board, BindingError> {
    Ok(Board::from_snapshot(&squares)?)
}

/// Returns the glyph the page draws for `piece`, if any.
pub fn glyph_text(piece: Option<Piece>) -> Option<String> {
    piece.map(|p| p.glyph().to_string())
}

pub fn move_views(moves: &[Move]) -> Vec<MoveView> {
    moves.iter().copied().map(MoveView::from).collect()
}
