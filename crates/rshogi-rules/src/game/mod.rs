//! Game state: board, side to move and captured-piece pool
//!
//! `Game` is the only place where state changes. A move is validated first and
//! applied only on success, so a rejected move leaves the game untouched.

mod error;
mod mode;
mod movegen;
mod validation;

pub use error::MoveValidationError;
pub use mode::{PerformMode, PerformModeParseError};

use log::debug;

use crate::board::Board;
use crate::types::{Color, Move, MoveSource, Piece};

/// A position together with its side to move and captured pieces
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    color: Color,
    /// Pieces of both colors, always unpromoted, kept in display order
    captured: Vec<Piece>,
}

impl Game {
    /// Empty board, Black to move, nothing in hand
    pub fn new() -> Self {
        Game {
            board: Board::empty(),
            color: Color::Black,
            captured: Vec::new(),
        }
    }

    /// Standard initial position
    pub fn startpos() -> Self {
        Game::from_parts(Board::startpos(), Color::Black, Vec::new())
    }

    /// Build a game from parts supplied by a position reader
    ///
    /// Captured pieces are unpromoted and sorted into display order.
    pub fn from_parts(board: Board, color: Color, captured: Vec<Piece>) -> Self {
        let mut game = Game {
            board,
            color,
            captured: captured.into_iter().map(Piece::unpromote).collect(),
        };
        game.sort_captured();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Captured pieces of both colors: Black's first, higher kinds first within a color
    #[inline]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Captured pieces held by one color
    pub fn captured_pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.captured.iter().copied().filter(move |p| p.color() == color)
    }

    /// Whether the side to move is in check
    pub fn is_in_check(&self) -> bool {
        self.board.is_king_checked(self.color)
    }

    /// Validate `mv` under `mode` and apply it on success
    ///
    /// On failure the game is left exactly as it was.
    pub fn perform(&mut self, mv: Move, mode: PerformMode) -> Result<(), MoveValidationError> {
        if let Err(err) = self.validate_with(&mv, mode) {
            debug!("rejected {mv} ({mode}): {err}");
            return Err(err);
        }
        self.apply(mv);
        debug!("performed {mv} ({mode}), {:?} to move", self.color);
        Ok(())
    }

    /// Apply `mv` without validation
    pub(crate) fn apply(&mut self, mv: Move) {
        if let Some(captured) = self.board.remove_piece(mv.destination) {
            self.captured.push(captured.captured_by(self.color));
            self.sort_captured();
        }

        match mv.source {
            MoveSource::Board(from) => {
                self.board.remove_piece(from);
            }
            MoveSource::CapturedPiece => {
                if let Some(index) = self.captured.iter().position(|&p| p == mv.piece) {
                    self.captured.remove(index);
                }
            }
        }

        let piece = if mv.promote {
            mv.piece.promote().unwrap_or(mv.piece)
        } else {
            mv.piece
        };
        self.board.put_piece(mv.destination, piece);
        self.color.toggle();
    }

    fn sort_captured(&mut self) {
        self.captured.sort_by(Piece::hand_order);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
