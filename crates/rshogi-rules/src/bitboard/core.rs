//! Bitboard（81bit盤面表現）

use crate::types::Square;

use super::Direction;

/// Bitboard（u128 の下位81bitを使用）
///
/// 横型配置: bit `rank * 9 + file`。
/// 81bit目以降は常に0。生成・演算のたびに `MASK` で切り落とす。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u128);

impl Bitboard {
    /// 有効ビットのマスク
    const MASK: u128 = (1u128 << Square::NUM) - 1;

    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 全マスが立っているBitboard
    pub const ALL: Bitboard = Bitboard(Self::MASK);

    /// 生の値から生成（81bit目以降は落とす）
    #[inline]
    pub const fn new(bits: u128) -> Bitboard {
        Bitboard(bits & Self::MASK)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u128 << sq.index())
    }

    /// u128として取得
    #[inline]
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 空でないかどうか
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 共通するマスがあるか
    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// 指定マスにビットが立っているか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    /// ビットを立てる
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// ビットを消す
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// ビットをXOR（トグル）
    #[inline]
    pub fn toggle(&mut self, sq: Square) {
        self.0 ^= 1u128 << sq.index();
    }

    /// 最下位ビットのSquareを取得（消さない）
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }

    /// 最下位ビットのSquareを取得して消す
    #[inline]
    pub fn pop(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    /// 符号付きオフセットでシフト（負なら右シフト）
    ///
    /// 盤外にはみ出したビットは捨てる。筋の折り返しは考慮しないので、
    /// 方向に沿った移動には `shifted` を使う。
    #[inline]
    pub const fn shift(self, offset: i8) -> Bitboard {
        if offset >= 0 {
            Bitboard((self.0 << offset as u32) & Self::MASK)
        } else {
            Bitboard(self.0 >> offset.unsigned_abs() as u32)
        }
    }

    /// 方向に沿って1マス移動したBitboard
    ///
    /// 東（1筋側）へ向かう方向では1筋、西（9筋側）へ向かう方向では9筋のビットを
    /// 先に落としてから移動するので、盤端を越えて隣の段に回り込むことはない。
    #[inline]
    pub const fn shifted(self, direction: Direction) -> Bitboard {
        let mut bits = self.0;
        if direction.crosses_east() {
            bits &= !super::FILE1_BB.0;
        }
        if direction.crosses_west() {
            bits &= !super::FILE9_BB.0;
        }
        Bitboard(bits).shift(direction.offset())
    }

    /// 方向に沿って伸ばした利き（飛び駒用）
    ///
    /// 自分自身のマスは含まない。`stoppers` のマスに到達したらそのマスを含めて止まり、
    /// 盤端に達して変化しなくなったら止まる。
    pub const fn filled(self, direction: Direction, stoppers: Bitboard) -> Bitboard {
        let origin = self.0;
        let mut bits = self.0;
        loop {
            let prev = bits;
            bits |= Bitboard(bits).shifted(direction).0;
            bits &= !origin;
            if bits & stoppers.0 != 0 || prev == bits {
                break;
            }
        }
        Bitboard(bits)
    }

    /// イテレータを返す（インデックスの昇順）
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

// ビット演算
impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        // 未使用ビットはマスク
        Bitboard(!self.0 & Self::MASK)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitboard {{")?;
        // 盤面形式で表示（1段目から9段目、9筋から1筋）
        for rank in 0..9 {
            write!(f, "  ")?;
            for file in (0..9).rev() {
                let bit = (self.0 >> (rank * 9 + file)) & 1;
                write!(f, "{}", if bit == 1 { "●" } else { "・" })?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/// Bitboardイテレータ
#[derive(Debug, Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}
