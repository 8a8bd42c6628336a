//! 駒（Piece）
//!
//! 駒は `Color` と `PieceType` の組。盤上の空きマスは `Option<Piece>` の `None` で表し、
//! 「駒なし」を表す番兵値は持たない。

use std::cmp::Ordering;
use std::fmt;

use super::{Color, PieceType};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
}

impl Piece {
    // 先手の駒
    pub const B_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const B_LANCE: Piece = Piece::new(Color::Black, PieceType::Lance);
    pub const B_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const B_SILVER: Piece = Piece::new(Color::Black, PieceType::Silver);
    pub const B_GOLD: Piece = Piece::new(Color::Black, PieceType::Gold);
    pub const B_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const B_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const B_KING: Piece = Piece::new(Color::Black, PieceType::King);
    pub const B_PRO_PAWN: Piece = Piece::new(Color::Black, PieceType::ProPawn);
    pub const B_PRO_LANCE: Piece = Piece::new(Color::Black, PieceType::ProLance);
    pub const B_PRO_KNIGHT: Piece = Piece::new(Color::Black, PieceType::ProKnight);
    pub const B_PRO_SILVER: Piece = Piece::new(Color::Black, PieceType::ProSilver);
    pub const B_HORSE: Piece = Piece::new(Color::Black, PieceType::Horse);
    pub const B_DRAGON: Piece = Piece::new(Color::Black, PieceType::Dragon);

    // 後手の駒
    pub const W_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const W_LANCE: Piece = Piece::new(Color::White, PieceType::Lance);
    pub const W_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const W_SILVER: Piece = Piece::new(Color::White, PieceType::Silver);
    pub const W_GOLD: Piece = Piece::new(Color::White, PieceType::Gold);
    pub const W_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const W_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const W_KING: Piece = Piece::new(Color::White, PieceType::King);
    pub const W_PRO_PAWN: Piece = Piece::new(Color::White, PieceType::ProPawn);
    pub const W_PRO_LANCE: Piece = Piece::new(Color::White, PieceType::ProLance);
    pub const W_PRO_KNIGHT: Piece = Piece::new(Color::White, PieceType::ProKnight);
    pub const W_PRO_SILVER: Piece = Piece::new(Color::White, PieceType::ProSilver);
    pub const W_HORSE: Piece = Piece::new(Color::White, PieceType::Horse);
    pub const W_DRAGON: Piece = Piece::new(Color::White, PieceType::Dragon);

    /// 駒の種類数（配列サイズ用）
    pub const NUM: usize = Color::NUM * PieceType::NUM;

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece { color, piece_type }
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.piece_type.is_promoted()
    }

    /// 成れる駒かどうか
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.piece_type.can_promote()
    }

    /// 成り駒を返す
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        match self.piece_type.promote() {
            Some(pt) => Some(Piece::new(self.color, pt)),
            None => None,
        }
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece::new(self.color, self.piece_type.unpromote())
    }

    /// 取った側の持ち駒としての駒（生駒に戻して手番を付け替える）
    #[inline]
    pub const fn captured_by(self, color: Color) -> Piece {
        Piece::new(color, self.piece_type.unpromote())
    }

    /// インデックス（0-27）: `color * 14 + piece_type`
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * PieceType::NUM + self.piece_type.index()
    }

    /// インデックスから生成
    #[inline]
    pub const fn from_index(n: usize) -> Option<Piece> {
        if n >= Piece::NUM {
            return None;
        }
        Some(Piece::new(Color::ALL[n / PieceType::NUM], PieceType::ALL[n % PieceType::NUM]))
    }

    /// 持ち駒の表示順による比較（先手が先、同じ手番内では駒種の降順）
    pub fn hand_order(&self, other: &Piece) -> Ordering {
        self.color
            .cmp(&other.color)
            .then_with(|| other.piece_type.cmp(&self.piece_type))
    }
}

/// USI 形式（先手は大文字、後手は小文字、成駒は `+` 付き）
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.piece_type.usi_str();
        match self.color {
            Color::Black => f.pad(s),
            Color::White => f.pad(&s.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_new() {
        assert_eq!(Piece::new(Color::Black, PieceType::Pawn), Piece::B_PAWN);
        assert_eq!(Piece::new(Color::White, PieceType::Pawn), Piece::W_PAWN);
        assert_eq!(Piece::new(Color::Black, PieceType::King), Piece::B_KING);
        assert_eq!(Piece::new(Color::White, PieceType::Dragon), Piece::W_DRAGON);
    }

    #[test]
    fn test_piece_accessors() {
        assert_eq!(Piece::B_DRAGON.piece_type(), PieceType::Dragon);
        assert_eq!(Piece::W_DRAGON.piece_type(), PieceType::Dragon);
        assert_eq!(Piece::B_KING.color(), Color::Black);
        assert_eq!(Piece::W_KING.color(), Color::White);
    }

    #[test]
    fn test_piece_promote() {
        assert_eq!(Piece::B_PAWN.promote(), Some(Piece::B_PRO_PAWN));
        assert_eq!(Piece::W_BISHOP.promote(), Some(Piece::W_HORSE));
        assert_eq!(Piece::B_GOLD.promote(), None);
        assert_eq!(Piece::W_KING.promote(), None);
    }

    #[test]
    fn test_piece_unpromote() {
        assert_eq!(Piece::B_PRO_PAWN.unpromote(), Piece::B_PAWN);
        assert_eq!(Piece::W_HORSE.unpromote(), Piece::W_BISHOP);
        assert_eq!(Piece::B_PAWN.unpromote(), Piece::B_PAWN);
    }

    #[test]
    fn test_piece_captured_by() {
        assert_eq!(Piece::W_DRAGON.captured_by(Color::Black), Piece::B_ROOK);
        assert_eq!(Piece::B_PRO_SILVER.captured_by(Color::White), Piece::W_SILVER);
        assert_eq!(Piece::B_GOLD.captured_by(Color::White), Piece::W_GOLD);
    }

    #[test]
    fn test_piece_index() {
        assert_eq!(Piece::B_PAWN.index(), 0);
        assert_eq!(Piece::B_DRAGON.index(), 13);
        assert_eq!(Piece::W_PAWN.index(), 14);
        assert_eq!(Piece::W_DRAGON.index(), 27);
        for i in 0..Piece::NUM {
            let piece = Piece::from_index(i).unwrap();
            assert_eq!(piece.index(), i);
        }
        assert_eq!(Piece::from_index(Piece::NUM), None);
    }

    #[test]
    fn test_piece_hand_order() {
        let mut pieces = vec![
            Piece::W_PAWN,
            Piece::B_PAWN,
            Piece::W_ROOK,
            Piece::B_GOLD,
            Piece::B_BISHOP,
        ];
        pieces.sort_by(Piece::hand_order);
        assert_eq!(
            pieces,
            vec![
                Piece::B_BISHOP,
                Piece::B_GOLD,
                Piece::B_PAWN,
                Piece::W_ROOK,
                Piece::W_PAWN
            ]
        );
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::B_PAWN.to_string(), "P");
        assert_eq!(Piece::W_PAWN.to_string(), "p");
        assert_eq!(Piece::B_HORSE.to_string(), "+B");
        assert_eq!(Piece::W_DRAGON.to_string(), "+r");
    }
}
