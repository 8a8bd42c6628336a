//! JSON-friendly snapshot of a game
//!
//! Mirrors the board-state objects the front end exchanges: cells labelled with USI
//! squares, owners as `"sente"` / `"gote"`, piece letters plus a promoted flag, and
//! per-side hand counts. This is a value model for interchange, not a file format.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game::Game;
use crate::types::{Color, File, Piece, PieceType, Rank, Square};

/// Error converting a snapshot back into a game
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("invalid owner: {0:?} (expected \"sente\" or \"gote\")")]
    InvalidOwner(String),
    #[error("invalid turn: {0:?} (expected \"sente\" or \"gote\")")]
    InvalidTurn(String),
    #[error("invalid piece type: {0:?}")]
    InvalidPieceType(String),
    #[error("{0} cannot be promoted")]
    InvalidPromotion(String),
    #[error("square {0} appears more than once")]
    DuplicateSquare(Square),
    #[error("expected 81 cells, got {0}")]
    CellCount(usize),
    #[error("{0} holds a king in hand")]
    KingInHand(String),
}

/// 駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceSnapshot {
    /// "sente" | "gote"
    pub owner: String,
    /// "K" | "R" | "B" | "G" | "S" | "N" | "L" | "P"
    #[serde(rename = "type")]
    pub piece_type: String,
    /// 成駒かどうか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellSnapshot {
    /// "9a" ~ "1i" 形式
    pub square: Square,
    /// 駒（存在しない場合はnull）
    pub piece: Option<PieceSnapshot>,
}

/// 持ち駒の枚数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandSnapshot {
    #[serde(rename = "P", default, skip_serializing_if = "is_zero")]
    pub pawn: u32,
    #[serde(rename = "L", default, skip_serializing_if = "is_zero")]
    pub lance: u32,
    #[serde(rename = "N", default, skip_serializing_if = "is_zero")]
    pub knight: u32,
    #[serde(rename = "S", default, skip_serializing_if = "is_zero")]
    pub silver: u32,
    #[serde(rename = "G", default, skip_serializing_if = "is_zero")]
    pub gold: u32,
    #[serde(rename = "B", default, skip_serializing_if = "is_zero")]
    pub bishop: u32,
    #[serde(rename = "R", default, skip_serializing_if = "is_zero")]
    pub rook: u32,
    #[serde(rename = "K", default, skip_serializing_if = "is_zero")]
    pub king: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// 両者の持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandsSnapshot {
    pub sente: HandSnapshot,
    pub gote: HandSnapshot,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    /// 9x9のセル配列（行は一段目から、列は9筋から）
    pub cells: Vec<Vec<CellSnapshot>>,
    /// 持ち駒
    pub hands: HandsSnapshot,
    /// 手番: "sente" | "gote"
    pub turn: String,
}

fn owner_str(color: Color) -> &'static str {
    match color {
        Color::Black => "sente",
        Color::White => "gote",
    }
}

fn parse_owner(s: &str) -> Option<Color> {
    match s {
        "sente" => Some(Color::Black),
        "gote" => Some(Color::White),
        _ => None,
    }
}

impl HandSnapshot {
    fn count_mut(&mut self, piece_type: PieceType) -> &mut u32 {
        match piece_type.unpromote() {
            PieceType::Pawn => &mut self.pawn,
            PieceType::Lance => &mut self.lance,
            PieceType::Knight => &mut self.knight,
            PieceType::Silver => &mut self.silver,
            PieceType::Gold => &mut self.gold,
            PieceType::Bishop => &mut self.bishop,
            PieceType::Rook => &mut self.rook,
            _ => &mut self.king,
        }
    }

    /// Pieces in hand, higher kinds first
    fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        [
            (PieceType::Rook, self.rook),
            (PieceType::Bishop, self.bishop),
            (PieceType::Gold, self.gold),
            (PieceType::Silver, self.silver),
            (PieceType::Knight, self.knight),
            (PieceType::Lance, self.lance),
            (PieceType::Pawn, self.pawn),
        ]
        .into_iter()
        .flat_map(move |(pt, n)| std::iter::repeat_n(Piece::new(color, pt), n as usize))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        let base = piece.piece_type().unpromote();
        PieceSnapshot {
            owner: owner_str(piece.color()).to_string(),
            piece_type: base.usi_str().to_string(),
            promoted: base.can_promote().then_some(piece.is_promoted()),
        }
    }
}

impl TryFrom<&PieceSnapshot> for Piece {
    type Error = SnapshotError;

    fn try_from(snapshot: &PieceSnapshot) -> Result<Self, Self::Error> {
        let color = parse_owner(&snapshot.owner)
            .ok_or_else(|| SnapshotError::InvalidOwner(snapshot.owner.clone()))?;
        let mut chars = snapshot.piece_type.chars();
        let base = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => PieceType::from_usi_char(c),
            _ => None,
        }
        .ok_or_else(|| SnapshotError::InvalidPieceType(snapshot.piece_type.clone()))?;

        let piece_type = if snapshot.promoted.unwrap_or(false) {
            base.promote()
                .ok_or_else(|| SnapshotError::InvalidPromotion(snapshot.piece_type.clone()))?
        } else {
            base
        };
        Ok(Piece::new(color, piece_type))
    }
}

impl Game {
    /// Snapshot of the current position
    pub fn to_snapshot(&self) -> GameSnapshot {
        let cells = Rank::ALL
            .iter()
            .map(|&rank| {
                File::ALL
                    .iter()
                    .rev()
                    .map(|&file| {
                        let square = Square::new(file, rank);
                        CellSnapshot {
                            square,
                            piece: self.board()[square].map(PieceSnapshot::from),
                        }
                    })
                    .collect()
            })
            .collect();

        let mut hands = HandsSnapshot::default();
        for &piece in self.captured_pieces() {
            let hand = match piece.color() {
                Color::Black => &mut hands.sente,
                Color::White => &mut hands.gote,
            };
            *hand.count_mut(piece.piece_type()) += 1;
        }

        GameSnapshot {
            cells,
            hands,
            turn: owner_str(self.color()).to_string(),
        }
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let color =
            parse_owner(&snapshot.turn).ok_or_else(|| SnapshotError::InvalidTurn(snapshot.turn.clone()))?;

        let cell_count: usize = snapshot.cells.iter().map(Vec::len).sum();
        if cell_count != Square::NUM {
            return Err(SnapshotError::CellCount(cell_count));
        }

        let mut board = Board::empty();
        let mut seen = [false; Square::NUM];
        for cell in snapshot.cells.iter().flatten() {
            if std::mem::replace(&mut seen[cell.square.index()], true) {
                return Err(SnapshotError::DuplicateSquare(cell.square));
            }
            let piece = cell.piece.as_ref().map(Piece::try_from).transpose()?;
            board.set_piece(cell.square, piece);
        }

        for (owner, hand) in [("sente", &snapshot.hands.sente), ("gote", &snapshot.hands.gote)] {
            if hand.king != 0 {
                return Err(SnapshotError::KingInHand(owner.to_string()));
            }
        }

        let captured = snapshot
            .hands
            .sente
            .pieces(Color::Black)
            .chain(snapshot.hands.gote.pieces(Color::White))
            .collect();

        Ok(Game::from_parts(board, color, captured))
    }
}
