//! ビットボードモジュール
//!
//! 81マスの盤面を u128 で表現し、駒の利き計算に必要なビット演算を提供する。
//!
//! - `Bitboard`: 81bit盤面表現（シフト・塗りつぶし）
//! - `Direction`: 12方向とその盤端情報
//! - 駒ごとの利きテーブル

mod attacks;
mod core;
mod direction;
mod tables;

pub use attacks::{AttackStep, PIECE_ATTACKS, PieceAttacks, attacks};
pub use core::Bitboard;
pub use core::BitboardIter;
pub use direction::Direction;
pub use tables::*;
