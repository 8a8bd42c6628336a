//! Shogi rules oracle
//!
//! Validates and generates legal moves for a position: promotion zones, pieces with
//! no further move, double pawns, self-check, and the pawn-drop checkmate rule.
//!
//! - [`types`]: colors, squares, pieces and moves
//! - [`bitboard`]: 81-bit sets, directions and per-piece attack patterns
//! - [`board`]: piece placement and attack queries
//! - [`game`]: side to move, captured pieces, validation and move generation
//! - [`snapshot`]: serde model for exchanging positions as JSON
//!
//! ```
//! use rshogi_rules::{Game, Move, PerformMode, Piece};
//!
//! let mut game = Game::startpos();
//! assert_eq!(game.valid_moves().len(), 30);
//!
//! let mv = Move::board("7g".parse()?, "7f".parse()?, Piece::B_PAWN, false);
//! game.perform(mv, PerformMode::Strict)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bitboard;
pub mod board;
pub mod game;
pub mod snapshot;
pub mod types;

pub use bitboard::{Bitboard, Direction};
pub use board::Board;
pub use game::{Game, MoveValidationError, PerformMode, PerformModeParseError};
pub use snapshot::{GameSnapshot, SnapshotError};
pub use types::{
    Color, File, Move, MoveList, MoveSource, Piece, PieceType, Rank, Square, SquareParseError,
};
