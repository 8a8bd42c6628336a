//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{File, Rank};

/// 升目の文字列表現が不正なときのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square notation must be two characters, got {0:?}")]
    InvalidLength(String),
    #[error("invalid file character: {0:?}")]
    InvalidFile(char),
    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),
}

/// 升目（0-80）
///
/// 配置: 横型（段優先）
/// SQ_11(1一)=0, SQ_21(2一)=1, ..., SQ_91(9一)=8, SQ_12(1二)=9, ...
///
/// 線形インデックスは `rank * 9 + file`。東西方向のシフトが ±1、
/// 南北方向が ±9 になるので、方向テーブルのオフセットがそのまま使える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    // 定数定義（主要なもの）
    /// 1一
    pub const SQ_11: Square = Square(0);
    /// 9一
    pub const SQ_91: Square = Square(8);
    /// 5五（中央）
    pub const SQ_55: Square = Square(40);
    /// 1九
    pub const SQ_19: Square = Square(72);
    /// 9九
    pub const SQ_99: Square = Square(80);

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 9 + file as u8)
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 9) as usize]
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 9) as usize]
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// インデックスから生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(n: usize) -> Option<Square> {
        if n < Square::NUM { Some(Square(n as u8)) } else { None }
    }

    /// USI形式の文字列（"7g"等）に変換
    pub fn to_usi(self) -> String {
        self.to_string()
    }

    /// USI形式の文字列からSquareに変換
    pub fn from_usi(s: &str) -> Option<Square> {
        s.parse().ok()
    }

    /// 全ての升を返すイテレータ（インデックス順）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::NUM as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_usi_char(), self.rank().to_usi_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::InvalidLength(s.to_string()));
        };
        let file = File::from_usi_char(f).ok_or(SquareParseError::InvalidFile(f))?;
        let rank = Rank::from_usi_char(r).ok_or(SquareParseError::InvalidRank(r))?;
        Ok(Square::new(file, rank))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}
