//! 指し手（Move）

use std::fmt;

use smallvec::SmallVec;

use super::{Piece, Square};

/// 指し手の移動元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// 盤上の升目から動かす
    Board(Square),
    /// 持ち駒から打つ
    CapturedPiece,
}

/// 指し手
///
/// 移動元・移動先・動かす駒（移動前の状態）・成りフラグの組。値として比較する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: MoveSource,
    pub destination: Square,
    pub piece: Piece,
    pub promote: bool,
}

/// 合法手リスト（通常の局面ならヒープ確保なしで収まる）
pub type MoveList = SmallVec<[Move; 128]>;

impl Move {
    /// 盤上の駒を動かす指し手を生成
    #[inline]
    pub const fn board(from: Square, to: Square, piece: Piece, promote: bool) -> Move {
        Move {
            source: MoveSource::Board(from),
            destination: to,
            piece,
            promote,
        }
    }

    /// 駒打ちの指し手を生成
    #[inline]
    pub const fn drop(piece: Piece, to: Square) -> Move {
        Move {
            source: MoveSource::CapturedPiece,
            destination: to,
            piece,
            promote: false,
        }
    }

    /// 駒打ちかどうか
    #[inline]
    pub const fn is_drop(&self) -> bool {
        matches!(self.source, MoveSource::CapturedPiece)
    }

    /// 移動元の升目（駒打ちならNone）
    #[inline]
    pub const fn from(&self) -> Option<Square> {
        match self.source {
            MoveSource::Board(sq) => Some(sq),
            MoveSource::CapturedPiece => None,
        }
    }

    /// USI形式の文字列に変換
    pub fn to_usi(&self) -> String {
        self.to_string()
    }
}

/// USI 形式（"7g7f", "8h2b+", "P*5e"）
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            MoveSource::Board(from) => {
                write!(f, "{from}{}", self.destination)?;
                if self.promote {
                    f.write_str("+")?;
                }
                Ok(())
            }
            MoveSource::CapturedPiece => {
                let letter = self.piece.unpromote().piece_type().usi_str();
                write!(f, "{letter}*{}", self.destination)
            }
        }
    }
}
