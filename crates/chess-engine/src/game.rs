//! Game session management.
//!
//! The [`Game`] struct wraps a [`Board`] with everything the page needs
//! between moves:
//! - Whose turn it is and which piece is selected
//! - Move history with captured pieces, for undo
//! - The computer's reply in player-versus-computer mode
//! - Resignation
//!
//! Moves are validated against the pseudo-legal generator, so a session
//! accepts exactly the destinations it highlights.

use crate::config::{GameConfig, GameMode};
use crate::eval::{static_evaluate, Score};
use crate::movegen::{apply_move, generate_moves, MoveList};
use crate::search::search;
use chess_core::{Board, Color, FenError, FenParser, Move, Piece, Square};
use thiserror::Error;
use tracing::debug;

/// A move recorded in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move itself.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
}

impl GameMove {
    /// Returns true if the move removed an enemy piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not among the generated moves for its origin.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The move text could not be parsed.
    #[error("invalid move format: {0}")]
    InvalidMoveFormat(String),
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The origin holds a piece of the side not to move.
    #[error("{square} holds a {color} piece but {to_move} is to move")]
    NotYourPiece {
        square: Square,
        color: Color,
        to_move: Color,
    },
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// A human move was attempted while the computer is to move.
    #[error("it is the computer's turn")]
    ComputerToMove,
    /// A computer move was requested while a human is to move.
    #[error("it is not the computer's turn")]
    NotComputerTurn,
    /// History is empty.
    #[error("no moves to undo")]
    NothingToUndo,
}

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    /// `loser` resigned.
    Resigned { loser: Color },
}

/// What a click on a square did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; its destinations should be highlighted.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece was clicked again and released.
    Deselected,
    /// The selected piece moved to the clicked square.
    Moved(GameMove),
    /// The clicked square is not a destination of the selected piece;
    /// the selection is kept.
    Rejected,
    /// The click had no effect (empty or enemy square with nothing
    /// selected, or the computer is to move).
    Ignored,
}

/// A game session on one board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    config: GameConfig,
    history: Vec<GameMove>,
    selected: Option<Square>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Creates a game at the starting position with White to move.
    pub fn new(config: GameConfig) -> Self {
        Self::from_board(Board::startpos(), Color::White, config)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color, config: GameConfig) -> Self {
        Game {
            board,
            side_to_move,
            config,
            history: Vec::new(),
            selected: None,
            status: GameStatus::Active,
        }
    }

    /// Creates a game from FEN text; White moves first if no color is given.
    pub fn from_fen(fen: &str, config: GameConfig) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let side = parsed.active_color.unwrap_or(Color::White);
        Ok(Self::from_board(Board::from_fen(fen)?, side, config))
    }

    /// Returns the position as placement plus active color.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.board.to_fen(), side)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Active
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    /// Returns the currently selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the material balance of the current position.
    pub fn evaluation(&self) -> Score {
        static_evaluate(&self.board)
    }

    /// Returns the pseudo-legal moves of the piece on `sq`.
    pub fn destinations(&self, sq: Square) -> MoveList {
        generate_moves(&self.board, sq)
    }

    /// Returns true if the computer plays the side to move.
    pub fn is_computer_turn(&self) -> bool {
        self.config.computer_side() == Some(self.side_to_move)
    }

    /// Returns the label shown for `color`'s player.
    pub fn player_name(&self, color: Color) -> &'static str {
        match (self.config.mode, self.config.computer_side() == Some(color)) {
            (GameMode::PlayerVsComputer, true) => "Computer",
            (GameMode::PlayerVsComputer, false) => "Player",
            (GameMode::PlayerVsPlayer, _) => match color {
                Color::White => "Player 1",
                Color::Black => "Player 2",
            },
        }
    }

    /// Starts a new game at the starting position, keeping the config.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.side_to_move = Color::White;
        self.history.clear();
        self.selected = None;
        self.status = GameStatus::Active;
        debug!("new game");
    }

    /// Plays a human move.
    pub fn make_move(&mut self, m: Move) -> Result<GameMove, GameError> {
        self.ensure_active()?;
        if self.is_computer_turn() {
            return Err(GameError::ComputerToMove);
        }
        let piece = self.validate(m)?;
        Ok(self.apply(m, piece))
    }

    /// Plays a human move given in coordinate notation (e.g., "e2e4").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<GameMove, GameError> {
        let m = Move::from_uci(uci)
            .ok_or_else(|| GameError::InvalidMoveFormat(uci.to_string()))?;
        self.make_move(m)
    }

    /// Handles a click on `sq` the way the board page does.
    ///
    /// With nothing selected, clicking one of the mover's pieces selects
    /// it. With a piece selected, clicking it again releases it, clicking
    /// another own piece moves the selection, and clicking one of its
    /// destinations plays the move.
    pub fn click(&mut self, sq: Square) -> Result<ClickOutcome, GameError> {
        self.ensure_active()?;
        if self.is_computer_turn() {
            return Ok(ClickOutcome::Ignored);
        }

        let own_piece = matches!(self.board.get(sq), Some(p) if p.color == self.side_to_move);

        match self.selected {
            Some(selected) if selected == sq => {
                self.selected = None;
                Ok(ClickOutcome::Deselected)
            }
            _ if own_piece => {
                self.selected = Some(sq);
                Ok(ClickOutcome::Selected {
                    square: sq,
                    destinations: self.destinations(sq).destinations(),
                })
            }
            None => Ok(ClickOutcome::Ignored),
            Some(selected) => {
                let m = Move::new(selected, sq);
                match self.validate(m) {
                    Ok(piece) => Ok(ClickOutcome::Moved(self.apply(m, piece))),
                    Err(_) => Ok(ClickOutcome::Rejected),
                }
            }
        }
    }

    /// Lets the computer play its greedy reply.
    ///
    /// Returns `Ok(None)` when the computer has no move; the position and
    /// the turn are then left unchanged.
    pub fn play_computer_move(&mut self) -> Result<Option<GameMove>, GameError> {
        self.ensure_active()?;
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let Some(result) = search(&self.board, self.side_to_move, self.config.scoring) else {
            debug!(side = %self.side_to_move, "computer has no move");
            return Ok(None);
        };
        let piece = self.validate(result.mov)?;
        Ok(Some(self.apply(result.mov, piece)))
    }

    /// Takes back the last move, restoring any captured piece.
    pub fn undo(&mut self) -> Result<GameMove, GameError> {
        self.ensure_active()?;
        let last = self.history.pop().ok_or(GameError::NothingToUndo)?;

        self.board.set(last.mov.from(), Some(last.piece));
        self.board.set(last.mov.to(), last.captured);
        self.side_to_move = self.side_to_move.opposite();
        self.selected = None;
        debug!(mov = %last.mov, "undo");
        Ok(last)
    }

    /// Resigns for the side to move.
    pub fn resign(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        self.status = GameStatus::Resigned {
            loser: self.side_to_move,
        };
        self.selected = None;
        debug!(loser = %self.side_to_move, "resigned");
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Active => Ok(()),
            GameStatus::Resigned { .. } => Err(GameError::GameAlreadyOver),
        }
    }

    /// Checks `m` against the generator and returns the piece to move.
    fn validate(&self, m: Move) -> Result<Piece, GameError> {
        let piece = self
            .board
            .get(m.from())
            .ok_or(GameError::EmptySquare(m.from()))?;
        if piece.color != self.side_to_move {
            return Err(GameError::NotYourPiece {
                square: m.from(),
                color: piece.color,
                to_move: self.side_to_move,
            });
        }
        if !self.destinations(m.from()).contains(m) {
            return Err(GameError::IllegalMove(m));
        }
        Ok(piece)
    }

    /// Plays an already validated move and records it.
    fn apply(&mut self, m: Move, piece: Piece) -> GameMove {
        let captured = apply_move(&mut self.board, m);
        let record = GameMove {
            mov: m,
            piece,
            captured,
        };

        self.history.push(record);
        self.side_to_move = self.side_to_move.opposite();
        self.selected = None;
        debug!(mov = %m, capture = record.is_capture(), "move played");
        record
    }
}
