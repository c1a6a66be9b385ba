//! WebAssembly bindings for the chess board.
//!
//! The page keeps drawing the board itself; this crate answers its
//! questions. Boards cross the boundary as an array of 64 entries in row
//! order, each `null` or `{ piece, color }` with lowercase names.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game, generateMoves, selectBestMove } from 'chess-wasm';
//!
//! await init();
//!
//! const game = new Game({ mode: "pvc" });
//! const click = game.click(6, 4); // { kind: "selected", destinations: [...] }
//! const moved = game.click(4, 4); // { kind: "moved", outcome: { uci, sound, ... } }
//!
//! if (game.isComputerTurn()) {
//!   setTimeout(() => render(game.computerMove()), game.computerDelayMs());
//! }
//!
//! const best = selectBestMove(game.board(), "white");
//! ```

mod view;

use chess_engine::GameConfig;
use serde::Serialize;
use view::{
    board_from_snapshot, glyph_text, move_views, parse_color, parse_scoring, square_at,
    ClickView, MoveOutcomeView, MoveView,
};
use wasm_bindgen::prelude::*;

pub use view::{BindingError, Sound};

/// Serializes `value` into plain objects, with `null` for missing values
/// so empty squares and absent captures arrive as `null`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_missing_as_null(true)
        .serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn board_from_js(board: JsValue) -> Result<chess_core::Board, JsError> {
    let squares: Vec<Option<chess_core::Piece>> =
        serde_wasm_bindgen::from_value(board).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(board_from_snapshot(squares)?)
}

fn config_from_js(config: JsValue) -> Result<GameConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GameConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))
}

/// Returns the moves of the piece on (`row`, `col`) as
/// `{ from, to, uci }` objects in generation order.
#[wasm_bindgen(js_name = generateMoves)]
pub fn generate_moves(board: JsValue, row: u8, col: u8) -> Result<JsValue, JsError> {
    let board = board_from_js(board)?;
    let from = square_at(row, col)?;
    let moves = chess_engine::generate_moves(&board, from);
    to_js(&move_views(moves.as_slice()))
}

/// Returns the greedy choice for `side`, or `null` if it cannot move.
///
/// `scoring` is `"white_relative"` (the default) or `"side_relative"`.
#[wasm_bindgen(js_name = selectBestMove)]
pub fn select_best_move(
    board: JsValue,
    side: &str,
    scoring: Option<String>,
) -> Result<JsValue, JsError> {
    let board = board_from_js(board)?;
    let side = parse_color(side)?;
    let scoring = parse_scoring(scoring.as_deref())?;
    match chess_engine::select_best_move_with(&board, side, scoring) {
        Some(m) => to_js(&MoveView::from(m)),
        None => Ok(JsValue::NULL),
    }
}

/// Returns the material balance of `board` from White's point of view.
#[wasm_bindgen(js_name = staticEvaluate)]
pub fn static_evaluate(board: JsValue) -> Result<i32, JsError> {
    Ok(chess_engine::static_evaluate(&board_from_js(board)?))
}

/// A game session that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: chess_engine::Game,
}

#[wasm_bindgen]
impl Game {
    /// Creates a game at the starting position.
    ///
    /// `config` is `undefined` or an object with any of `mode` (`"pvp"`,
    /// `"pvc"`), `computer_color`, `computer_delay_ms` and `scoring`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Game, JsError> {
        Ok(Game {
            inner: chess_engine::Game::new(config_from_js(config)?),
        })
    }

    /// Creates a game from FEN placement text with an optional active color.
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str, config: JsValue) -> Result<Game, JsError> {
        Ok(Game {
            inner: chess_engine::Game::from_fen(fen, config_from_js(config)?)?,
        })
    }

    /// Handles a click on (`row`, `col`) and reports what it did.
    pub fn click(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let outcome = self.inner.click(square_at(row, col)?)?;
        to_js(&ClickView::from(outcome))
    }

    /// Plays a move in coordinate notation, e.g. `"e2e4"`.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, uci: &str) -> Result<JsValue, JsError> {
        let played = self.inner.make_move_uci(uci)?;
        to_js(&MoveOutcomeView::from(played))
    }

    /// Plays the computer's reply, or returns `null` if it has no move.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsError> {
        match self.inner.play_computer_move()? {
            Some(played) => to_js(&MoveOutcomeView::from(played)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Takes back the last move and returns it.
    pub fn undo(&mut self) -> Result<JsValue, JsError> {
        let undone = self.inner.undo()?;
        to_js(&MoveOutcomeView::from(undone))
    }

    /// Starts a new game with the same configuration.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Resigns for the side to move.
    pub fn resign(&mut self) -> Result<(), JsError> {
        Ok(self.inner.resign()?)
    }

    /// Returns the side that resigned, or `null` while the game is on.
    pub fn loser(&self) -> Option<String> {
        match self.inner.status() {
            chess_engine::GameStatus::Active => None,
            chess_engine::GameStatus::Resigned { loser } => Some(loser.name().to_string()),
        }
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Returns `{ piece, color }` for the square, or `null` if it is empty.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        to_js(&self.inner.board().get(square_at(row, col)?))
    }

    /// Returns the Unicode glyph for the square, or `null` if it is empty.
    #[wasm_bindgen(js_name = glyphAt)]
    pub fn glyph_at(&self, row: u8, col: u8) -> Result<Option<String>, JsError> {
        Ok(glyph_text(self.inner.board().get(square_at(row, col)?)))
    }

    /// Returns the board as a 64-entry snapshot.
    pub fn board(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.board().to_snapshot())
    }

    /// Returns the destinations of the piece on (`row`, `col`).
    pub fn destinations(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let moves = self.inner.destinations(square_at(row, col)?);
        to_js(&move_views(moves.as_slice()))
    }

    /// Returns `"white"` or `"black"`.
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        self.inner.side_to_move().name().to_string()
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.inner.is_computer_turn()
    }

    /// How long the page should wait before asking for the computer's move.
    #[wasm_bindgen(js_name = computerDelayMs)]
    pub fn computer_delay_ms(&self) -> u32 {
        self.inner.config().computer_delay_ms
    }

    /// Returns the label for the player of `color`.
    #[wasm_bindgen(js_name = playerName)]
    pub fn player_name(&self, color: &str) -> Result<String, JsError> {
        Ok(self.inner.player_name(parse_color(color)?).to_string())
    }

    /// Returns the played moves, oldest first.
    pub fn history(&self) -> Result<JsValue, JsError> {
        let history: Vec<MoveOutcomeView> = self
            .inner
            .history()
            .iter()
            .copied()
            .map(MoveOutcomeView::from)
            .collect();
        to_js(&history)
    }

    /// Returns the material balance from White's point of view.
    pub fn evaluation(&self) -> i32 {
        self.inner.evaluation()
    }

    #[wasm_bindgen(js_name = toFen)]
    pub fn to_fen(&self) -> String {
        self.inner.to_fen()
    }
}
