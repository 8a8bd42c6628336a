//! Bitboardマスク

use crate::types::{Color, File, Rank};

use super::Bitboard;

/// 筋のBitboard
pub static FILE_BB: [Bitboard; File::NUM] = init_file_bb();

/// 成れる段（敵陣3段）のBitboard [Color]
pub static PROMOTION_ZONE_BB: [Bitboard; Color::NUM] = init_promotion_zone_bb();

/// 1筋（東端）
pub const FILE1_BB: Bitboard = file_bb(File::File1);

/// 9筋（西端）
pub const FILE9_BB: Bitboard = file_bb(File::File9);

// === 初期化関数 ===

const fn file_bb(file: File) -> Bitboard {
    let mut bits = 0u128;
    let mut rank = 0;
    while rank < Rank::NUM {
        bits |= 1u128 << (rank * 9 + file.index());
        rank += 1;
    }
    Bitboard::new(bits)
}

const fn rank_bb(rank: Rank) -> Bitboard {
    // 1段分の9bitを段の先頭へ
    Bitboard::new(0x1FFu128 << (rank.index() * 9))
}

const fn init_file_bb() -> [Bitboard; File::NUM] {
    let mut result = [Bitboard::EMPTY; File::NUM];
    let mut file = 0;
    while file < File::NUM {
        result[file] = file_bb(File::ALL[file]);
        file += 1;
    }
    result
}

const fn init_promotion_zone_bb() -> [Bitboard; Color::NUM] {
    let mut result = [0u128; Color::NUM];
    let mut rank = 0;
    while rank < Rank::NUM {
        let r = Rank::ALL[rank];
        let mut c = 0;
        while c < Color::NUM {
            if r.can_promote(Color::ALL[c]) {
                result[c] |= rank_bb(r).as_u128();
            }
            c += 1;
        }
        rank += 1;
    }
    [Bitboard::new(result[0]), Bitboard::new(result[1])]
}
