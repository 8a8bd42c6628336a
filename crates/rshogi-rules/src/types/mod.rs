//! 基本型モジュール
//!
//! ルール判定で使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! File, Rank
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//! ```

mod color;
mod file;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod square;

pub use color::Color;
pub use file::File;
pub use moves::{Move, MoveList, MoveSource};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use rank::Rank;
pub use square::{Square, SquareParseError};
