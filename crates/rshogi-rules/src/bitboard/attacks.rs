//! 駒の利き
//!
//! 駒（手番×駒種の28通り）ごとに「方向と、その方向へ飛ぶかどうか」の組を
//! コンパイル時に表へ展開しておき、盤面の占有状態を受け取って利きを計算する。

use crate::types::{Color, Piece, PieceType, Square};

use super::{Bitboard, Direction};
use Direction::*;

/// 利きの1方向分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStep {
    pub direction: Direction,
    /// 飛び駒として遮られるまで伸びるか
    pub sliding: bool,
}

/// 1種類の駒の利きの方向一覧（最大8方向）
#[derive(Debug, Clone, Copy)]
pub struct PieceAttacks {
    steps: [AttackStep; 8],
    len: usize,
}

impl PieceAttacks {
    const EMPTY: PieceAttacks = PieceAttacks {
        steps: [AttackStep {
            direction: Direction::North,
            sliding: false,
        }; 8],
        len: 0,
    };

    const fn with(mut self, direction: Direction, sliding: bool) -> PieceAttacks {
        self.steps[self.len] = AttackStep { direction, sliding };
        self.len += 1;
        self
    }

    const fn step(self, directions: &[Direction]) -> PieceAttacks {
        let mut result = self;
        let mut i = 0;
        while i < directions.len() {
            result = result.with(directions[i], false);
            i += 1;
        }
        result
    }

    const fn slide(self, directions: &[Direction]) -> PieceAttacks {
        let mut result = self;
        let mut i = 0;
        while i < directions.len() {
            result = result.with(directions[i], true);
            i += 1;
        }
        result
    }

    /// 後手用（上下反転）
    const fn flipped(self) -> PieceAttacks {
        let mut result = self;
        let mut i = 0;
        while i < self.len {
            result.steps[i].direction = self.steps[i].direction.flipped_vertically();
            i += 1;
        }
        result
    }

    /// 方向の一覧
    pub fn steps(&self) -> &[AttackStep] {
        &self.steps[..self.len]
    }
}

const ORTHOGONAL: [Direction; 4] = [North, South, East, West];
const DIAGONAL: [Direction; 4] = [NorthEast, NorthWest, SouthEast, SouthWest];
const GOLD: [Direction; 6] = [North, South, East, West, NorthEast, NorthWest];

/// 先手から見た駒種ごとの利き
const fn black_attacks(piece_type: PieceType) -> PieceAttacks {
    let e = PieceAttacks::EMPTY;
    match piece_type {
        PieceType::Pawn => e.step(&[North]),
        PieceType::Lance => e.slide(&[North]),
        PieceType::Knight => e.step(&[NorthNorthEast, NorthNorthWest]),
        PieceType::Silver => e.step(&[North, NorthEast, NorthWest, SouthEast, SouthWest]),
        PieceType::Gold
        | PieceType::ProPawn
        | PieceType::ProLance
        | PieceType::ProKnight
        | PieceType::ProSilver => e.step(&GOLD),
        PieceType::Bishop => e.slide(&DIAGONAL),
        PieceType::Rook => e.slide(&ORTHOGONAL),
        PieceType::Horse => e.slide(&DIAGONAL).step(&ORTHOGONAL),
        PieceType::Dragon => e.slide(&ORTHOGONAL).step(&DIAGONAL),
        PieceType::King => e.step(&ORTHOGONAL).step(&DIAGONAL),
    }
}

const fn init_piece_attacks() -> [PieceAttacks; Piece::NUM] {
    let mut result = [PieceAttacks::EMPTY; Piece::NUM];
    let mut i = 0;
    while i < Piece::NUM {
        let color = Color::ALL[i / PieceType::NUM];
        let attacks = black_attacks(PieceType::ALL[i % PieceType::NUM]);
        result[i] = match color {
            Color::Black => attacks,
            Color::White => attacks.flipped(),
        };
        i += 1;
    }
    result
}

/// 駒ごとの利きの方向 [Piece::index()]
pub static PIECE_ATTACKS: [PieceAttacks; Piece::NUM] = init_piece_attacks();

/// `from` にいる `piece` の利き
///
/// 飛び駒は `stoppers`（通常は盤上の全駒）に当たったマスまで伸び、そのマスを含む。
/// 味方の駒がいるマスも含むので、移動先としての可否は呼び出し側で判定する。
pub fn attacks(piece: Piece, from: Square, stoppers: Bitboard) -> Bitboard {
    let origin = Bitboard::from_square(from);
    PIECE_ATTACKS[piece.index()]
        .steps()
        .iter()
        .fold(Bitboard::EMPTY, |acc, step| {
            acc | if step.sliding {
                origin.filled(step.direction, stoppers)
            } else {
                origin.shifted(step.direction)
            }
        })
}
