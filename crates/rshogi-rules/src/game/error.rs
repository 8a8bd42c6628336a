//! Move validation errors

/// Reason a move was rejected
///
/// The pipeline stops at the first failing check, so the variant identifies the
/// earliest rule the move violates.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveValidationError {
    #[error("the moving piece is not on its source square")]
    BoardPieceDoesNotExist,
    #[error("the dropped piece is not in the captured-piece pool")]
    CapturedPieceDoesNotExist,
    #[error("the moving piece does not belong to the side to move")]
    InvalidPieceColor,
    #[error("a friendly piece already occupies the destination")]
    FriendlyPieceAlreadyExists,
    #[error("pieces can only be dropped on empty squares")]
    DropSquareOccupied,
    #[error("an unpromoted pawn of the same color is already on this file")]
    DoublePawns,
    #[error("the piece is already promoted")]
    PieceAlreadyPromoted,
    #[error("the piece cannot promote")]
    PieceCannotPromote,
    #[error("neither the source nor the destination is in the promotion zone")]
    IllegalBoardPiecePromotion,
    #[error("a dropped piece cannot promote")]
    IllegalCapturedPiecePromotion,
    #[error("the piece would have no legal move from the destination")]
    DeadPiece,
    #[error("the piece does not attack the destination")]
    IllegalAttack,
    #[error("the move leaves the king in check")]
    KingPieceIsChecked,
    #[error("a pawn drop must not deliver checkmate")]
    DroppedPawnCheckmates,
}
