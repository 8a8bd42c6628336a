//! Move validation pipeline
//!
//! Checks run in a fixed order and stop at the first failure:
//! source, destination, double pawn, promotion (or immobility), attack and self-check,
//! and finally the pawn-drop checkmate rule.

use log::trace;

use crate::bitboard::{Bitboard, FILE_BB, PROMOTION_ZONE_BB};
use crate::types::{Move, MoveSource, PieceType};

use super::{Game, MoveValidationError, PerformMode};

/// Whether the pawn-drop checkmate rule is evaluated
///
/// The rule simulates the drop and asks whether the opponent is checkmated. That
/// inner checkmate test runs with `Skip`: a pawn gives check from an adjacent square,
/// so no drop can answer it and the rule cannot change the result. This bounds the
/// simulation to two plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DropMateRule {
    Enforce,
    Skip,
}

type ValidationResult = Result<(), MoveValidationError>;

impl Game {
    /// Validate `mv` with every check. Never mutates the game.
    pub fn validate(&self, mv: &Move) -> ValidationResult {
        self.validate_with(mv, PerformMode::Strict)
    }

    /// Validate `mv` at the given level
    pub fn validate_with(&self, mv: &Move, mode: PerformMode) -> ValidationResult {
        let result = self.check(mv, mode, DropMateRule::Enforce);
        if let Err(err) = &result {
            trace!("{mv} rejected: {err:?}");
        }
        result
    }

    pub(super) fn check(&self, mv: &Move, mode: PerformMode, rule: DropMateRule) -> ValidationResult {
        let strict = match mode {
            PerformMode::NoCheck => return Ok(()),
            PerformMode::Strict => true,
            PerformMode::AssumesGenerated => false,
        };
        self.run_pipeline(mv, strict, rule)
    }

    fn run_pipeline(&self, mv: &Move, strict: bool, rule: DropMateRule) -> ValidationResult {
        if strict {
            self.check_source(mv)?;
        }
        self.check_destination(mv)?;
        self.check_double_pawn(mv)?;
        if mv.promote {
            self.check_promotion(mv)?;
        } else {
            self.check_dead_piece(mv)?;
        }
        self.check_attack(mv, strict)?;
        if rule == DropMateRule::Enforce {
            self.check_drop_pawn_mate(mv)?;
        }
        Ok(())
    }

    fn check_source(&self, mv: &Move) -> ValidationResult {
        match mv.source {
            MoveSource::Board(from) => {
                if self.board[from] != Some(mv.piece) {
                    return Err(MoveValidationError::BoardPieceDoesNotExist);
                }
            }
            MoveSource::CapturedPiece => {
                if !self.captured.contains(&mv.piece) {
                    return Err(MoveValidationError::CapturedPieceDoesNotExist);
                }
            }
        }

        if mv.piece.color() != self.color {
            return Err(MoveValidationError::InvalidPieceColor);
        }
        Ok(())
    }

    fn check_destination(&self, mv: &Move) -> ValidationResult {
        let Some(occupant) = self.board[mv.destination] else {
            return Ok(());
        };
        if occupant.color() == self.color {
            return Err(MoveValidationError::FriendlyPieceAlreadyExists);
        }
        if mv.is_drop() {
            return Err(MoveValidationError::DropSquareOccupied);
        }
        Ok(())
    }

    fn check_double_pawn(&self, mv: &Move) -> ValidationResult {
        if !mv.is_drop() || mv.piece.piece_type() != PieceType::Pawn {
            return Ok(());
        }
        let pawns: Bitboard = self.board.squares_of(mv.piece).collect();
        if pawns.intersects(FILE_BB[mv.destination.file().index()]) {
            return Err(MoveValidationError::DoublePawns);
        }
        Ok(())
    }

    fn check_promotion(&self, mv: &Move) -> ValidationResult {
        if mv.piece.is_promoted() {
            return Err(MoveValidationError::PieceAlreadyPromoted);
        }
        if !mv.piece.can_promote() {
            return Err(MoveValidationError::PieceCannotPromote);
        }

        match mv.source {
            MoveSource::Board(from) => {
                let zone = PROMOTION_ZONE_BB[self.color.index()];
                if !zone.contains(from) && !zone.contains(mv.destination) {
                    return Err(MoveValidationError::IllegalBoardPiecePromotion);
                }
            }
            MoveSource::CapturedPiece => {
                return Err(MoveValidationError::IllegalCapturedPiecePromotion);
            }
        }
        Ok(())
    }

    /// A pawn or lance on the last rank, or a knight on the last two ranks, could
    /// never move again.
    fn check_dead_piece(&self, mv: &Move) -> ValidationResult {
        let color = mv.piece.color();
        let rank = mv.destination.rank();
        let dead = match mv.piece.piece_type() {
            PieceType::Pawn | PieceType::Lance => rank.is_last_for(color),
            PieceType::Knight => rank.is_last_two_for(color),
            _ => false,
        };
        if dead {
            return Err(MoveValidationError::DeadPiece);
        }
        Ok(())
    }

    fn check_attack(&self, mv: &Move, strict: bool) -> ValidationResult {
        let to = mv.destination;
        let checked = match mv.source {
            MoveSource::Board(from) => {
                if strict && !self.board.is_attackable(from, to) {
                    return Err(MoveValidationError::IllegalAttack);
                }
                self.board.is_king_checked_by_moving_piece(from, to, self.color)
            }
            MoveSource::CapturedPiece => {
                self.board.is_king_checked_by_dropping_piece(mv.piece, to, self.color)
            }
        };
        if checked {
            return Err(MoveValidationError::KingPieceIsChecked);
        }
        Ok(())
    }

    fn check_drop_pawn_mate(&self, mv: &Move) -> ValidationResult {
        if !mv.is_drop() || mv.piece.piece_type() != PieceType::Pawn {
            return Ok(());
        }

        let mut next = self.clone();
        next.apply(*mv);
        // Cheap exit before the full checkmate search
        if !next.is_in_check() {
            return Ok(());
        }

        trace!("simulating pawn drop {mv} for checkmate");
        if next.is_checkmated_with(DropMateRule::Skip) {
            return Err(MoveValidationError::DroppedPawnCheckmates);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Color, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    /// Both kings far apart so no rule other than the one under test fires
    fn kings() -> Board {
        let mut board = Board::empty();
        board.put_piece(sq("9i"), Piece::B_KING);
        board.put_piece(sq("1a"), Piece::W_KING);
        board
    }

    fn game(board: Board, captured: Vec<Piece>) -> Game {
        Game::from_parts(board, Color::Black, captured)
    }

    #[test]
    fn test_source_errors() {
        let mut board = kings();
        board.put_piece(sq("5e"), Piece::W_GOLD);
        let g = game(board, vec![Piece::W_PAWN]);

        let missing = Move::board(sq("5f"), sq("5e"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&missing), Err(MoveValidationError::BoardPieceDoesNotExist));

        let wrong_piece = Move::board(sq("5e"), sq("5f"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&wrong_piece), Err(MoveValidationError::BoardPieceDoesNotExist));

        let enemy = Move::board(sq("5e"), sq("5f"), Piece::W_GOLD, false);
        assert_eq!(g.validate(&enemy), Err(MoveValidationError::InvalidPieceColor));

        let not_in_pool = Move::drop(Piece::B_PAWN, sq("5d"));
        assert_eq!(g.validate(&not_in_pool), Err(MoveValidationError::CapturedPieceDoesNotExist));

        let enemy_pool = Move::drop(Piece::W_PAWN, sq("5d"));
        assert_eq!(g.validate(&enemy_pool), Err(MoveValidationError::InvalidPieceColor));
    }

    #[test]
    fn test_destination_errors() {
        let mut board = kings();
        board.put_piece(sq("5e"), Piece::B_GOLD);
        board.put_piece(sq("5d"), Piece::B_PAWN);
        board.put_piece(sq("4d"), Piece::W_PAWN);
        let g = game(board, vec![Piece::B_SILVER]);

        let friendly = Move::board(sq("5e"), sq("5d"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&friendly), Err(MoveValidationError::FriendlyPieceAlreadyExists));

        let capture = Move::board(sq("5e"), sq("4d"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&capture), Ok(()));

        let drop_on_enemy = Move::drop(Piece::B_SILVER, sq("4d"));
        assert_eq!(g.validate(&drop_on_enemy), Err(MoveValidationError::DropSquareOccupied));

        let drop_on_friend = Move::drop(Piece::B_SILVER, sq("5d"));
        assert_eq!(
            g.validate(&drop_on_friend),
            Err(MoveValidationError::FriendlyPieceAlreadyExists)
        );
    }

    #[test]
    fn test_promotion_errors() {
        let mut board = kings();
        board.put_piece(sq("5e"), Piece::B_GOLD);
        board.put_piece(sq("3e"), Piece::B_SILVER);
        board.put_piece(sq("7d"), Piece::B_PRO_PAWN);
        board.put_piece(sq("2d"), Piece::B_SILVER);
        board.put_piece(sq("8c"), Piece::B_SILVER);
        let g = game(board, vec![Piece::B_GOLD]);

        let promoted = Move::board(sq("7d"), sq("7c"), Piece::B_PRO_PAWN, true);
        assert_eq!(g.validate(&promoted), Err(MoveValidationError::PieceAlreadyPromoted));

        let gold = Move::board(sq("5e"), sq("5d"), Piece::B_GOLD, true);
        assert_eq!(g.validate(&gold), Err(MoveValidationError::PieceCannotPromote));

        let outside = Move::board(sq("3e"), sq("3d"), Piece::B_SILVER, true);
        assert_eq!(g.validate(&outside), Err(MoveValidationError::IllegalBoardPiecePromotion));

        // Entering the zone
        let entering = Move::board(sq("2d"), sq("2c"), Piece::B_SILVER, true);
        assert_eq!(g.validate(&entering), Ok(()));

        // Leaving the zone
        let leaving = Move::board(sq("8c"), sq("7d"), Piece::B_SILVER, true);
        assert_eq!(g.validate(&leaving), Err(MoveValidationError::FriendlyPieceAlreadyExists));
        let leaving = Move::board(sq("8c"), sq("9d"), Piece::B_SILVER, true);
        assert_eq!(g.validate(&leaving), Ok(()));

        let mut drop = Move::drop(Piece::B_GOLD, sq("5c"));
        drop.promote = true;
        assert_eq!(g.validate(&drop), Err(MoveValidationError::PieceCannotPromote));
    }

    #[test]
    fn test_drop_promotion_error() {
        let g = game(kings(), vec![Piece::B_SILVER]);
        let mut drop = Move::drop(Piece::B_SILVER, sq("5c"));
        drop.promote = true;
        assert_eq!(g.validate(&drop), Err(MoveValidationError::IllegalCapturedPiecePromotion));
    }

    #[test]
    fn test_illegal_attack() {
        let mut board = kings();
        board.put_piece(sq("5e"), Piece::B_GOLD);
        let g = game(board, Vec::new());

        let diagonal_back = Move::board(sq("5e"), sq("4f"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&diagonal_back), Err(MoveValidationError::IllegalAttack));

        // The generator never produces such a move, so the relaxed mode skips the check
        assert_eq!(g.validate_with(&diagonal_back, PerformMode::AssumesGenerated), Ok(()));
        assert_eq!(g.validate_with(&diagonal_back, PerformMode::NoCheck), Ok(()));
    }

    #[test]
    fn test_self_check() {
        let mut board = Board::empty();
        board.put_piece(sq("5i"), Piece::B_KING);
        board.put_piece(sq("5h"), Piece::B_GOLD);
        board.put_piece(sq("5a"), Piece::W_ROOK);
        board.put_piece(sq("1a"), Piece::W_KING);
        let g = game(board, vec![Piece::B_PAWN]);

        let pinned = Move::board(sq("5h"), sq("4h"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&pinned), Err(MoveValidationError::KingPieceIsChecked));
        assert_eq!(
            g.validate_with(&pinned, PerformMode::AssumesGenerated),
            Err(MoveValidationError::KingPieceIsChecked)
        );

        let along_file = Move::board(sq("5h"), sq("5g"), Piece::B_GOLD, false);
        assert_eq!(g.validate(&along_file), Ok(()));

        let king_into_file = Move::board(sq("5i"), sq("4i"), Piece::B_KING, false);
        assert_eq!(g.validate(&king_into_file), Ok(()));
    }

    #[test]
    fn test_drop_while_in_check_must_block() {
        let mut board = Board::empty();
        board.put_piece(sq("5i"), Piece::B_KING);
        board.put_piece(sq("5a"), Piece::W_ROOK);
        board.put_piece(sq("1a"), Piece::W_KING);
        let g = game(board, vec![Piece::B_GOLD]);
        assert!(g.is_in_check());

        assert_eq!(g.validate(&Move::drop(Piece::B_GOLD, sq("5e"))), Ok(()));
        assert_eq!(
            g.validate(&Move::drop(Piece::B_GOLD, sq("4e"))),
            Err(MoveValidationError::KingPieceIsChecked)
        );
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let mut board = kings();
        board.put_piece(sq("5e"), Piece::B_GOLD);
        let g = game(board, vec![Piece::B_PAWN]);
        let before = g.clone();
        let _ = g.validate(&Move::drop(Piece::B_PAWN, sq("1b")));
        let _ = g.validate(&Move::board(sq("5e"), sq("5d"), Piece::B_GOLD, false));
        assert_eq!(g, before);
    }
}
