//! Legal move generation and checkmate detection
//!
//! Candidates are every attacked square of every piece of the side to move (with a
//! promoting twin for promotable pieces) plus every distinct piece in hand dropped on
//! every empty square. Candidates are then filtered through the validation pipeline.

#[cfg(feature = "diagnostics")]
use log::trace;

use crate::types::{Move, MoveList, MoveSource, Piece, Square};

use super::validation::DropMateRule;
use super::{Game, PerformMode};

impl Game {
    /// All legal moves for the side to move
    pub fn valid_moves(&self) -> MoveList {
        self.candidate_moves()
            .filter(|mv| self.is_valid_candidate(mv, DropMateRule::Enforce))
            .collect()
    }

    /// Legal moves of `piece` from `source`
    ///
    /// Every candidate is validated strictly, so a `piece` that is not actually at
    /// `source` (or not in hand) yields no moves.
    pub fn valid_moves_from(&self, source: MoveSource, piece: Piece) -> MoveList {
        let candidates: MoveList = match source {
            MoveSource::Board(from) => self.board_piece_moves(piece, from).collect(),
            MoveSource::CapturedPiece => self.captured_piece_moves(piece).collect(),
        };
        candidates
            .into_iter()
            .filter(|mv| self.validate(mv).is_ok())
            .collect()
    }

    /// Whether the side to move is in check and has no legal move
    pub fn is_checkmated(&self) -> bool {
        self.is_checkmated_with(DropMateRule::Enforce)
    }

    pub(super) fn is_checkmated_with(&self, rule: DropMateRule) -> bool {
        self.is_in_check() && !self.has_valid_move(rule)
    }

    fn has_valid_move(&self, rule: DropMateRule) -> bool {
        self.candidate_moves().any(|mv| self.is_valid_candidate(&mv, rule))
    }

    fn is_valid_candidate(&self, mv: &Move, rule: DropMateRule) -> bool {
        match self.check(mv, PerformMode::AssumesGenerated, rule) {
            Ok(()) => true,
            Err(_err) => {
                #[cfg(feature = "diagnostics")]
                trace!("candidate {mv} filtered out: {_err}");
                false
            }
        }
    }

    fn candidate_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let board_moves = self
            .board
            .occupied_squares(Some(self.color))
            .filter_map(|from| self.board[from].map(|piece| (from, piece)))
            .flat_map(|(from, piece)| self.board_piece_moves(piece, from));

        let drops = self
            .distinct_pieces_in_hand()
            .into_iter()
            .flat_map(|piece| self.captured_piece_moves(piece));

        board_moves.chain(drops)
    }

    /// Moves of `piece` from `from` to every square the occupant of `from` attacks
    fn board_piece_moves(&self, piece: Piece, from: Square) -> impl Iterator<Item = Move> + '_ {
        let promotable = piece.can_promote();
        self.board.attackable_squares_from(from).flat_map(move |to| {
            let plain = Move::board(from, to, piece, false);
            let promoted = promotable.then(|| Move::board(from, to, piece, true));
            std::iter::once(plain).chain(promoted)
        })
    }

    fn captured_piece_moves(&self, piece: Piece) -> impl Iterator<Item = Move> + '_ {
        self.board.empty_squares().map(move |to| Move::drop(piece, to))
    }

    /// The side to move's pieces in hand, each kind once
    fn distinct_pieces_in_hand(&self) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = self.captured_pieces_of(self.color).collect();
        // The pool is sorted, so equal pieces are adjacent
        pieces.dedup();
        pieces
    }
}
