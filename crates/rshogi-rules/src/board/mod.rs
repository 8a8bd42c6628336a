//! Board representation and attack queries
//!
//! The board stores one `Option<Piece>` per square. Occupancy bitboards are derived
//! from the cell array on demand, so they can never drift out of sync with it.
//! `Board` is `Copy`: hypothetical positions used for self-check detection are
//! independent copies and never touch the live board.

use std::ops::Index;

#[cfg(debug_assertions)]
use log::warn;

use crate::bitboard::{Bitboard, BitboardIter, attacks};
use crate::types::{Color, File, Piece, PieceType, Rank, Square};

/// Board representation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Piece on each square
    squares: [Option<Piece>; Square::NUM],
}

impl Board {
    /// Create empty board
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::NUM],
        }
    }

    /// Create board with the standard initial arrangement
    pub fn startpos() -> Self {
        use PieceType::*;

        let mut board = Board::empty();
        // Back rank from file 9 to file 1
        let back_rank = [Lance, Knight, Silver, Gold, King, Gold, Silver, Knight, Lance];
        for (i, &piece_type) in back_rank.iter().enumerate() {
            let file = File::ALL[File::NUM - 1 - i];
            board.put_piece(Square::new(file, Rank::Rank1), Piece::new(Color::White, piece_type));
            board.put_piece(Square::new(file, Rank::Rank9), Piece::new(Color::Black, piece_type));
        }
        for file in File::ALL {
            board.put_piece(Square::new(file, Rank::Rank3), Piece::W_PAWN);
            board.put_piece(Square::new(file, Rank::Rank7), Piece::B_PAWN);
        }
        board.put_piece(Square::new(File::File8, Rank::Rank2), Piece::W_ROOK);
        board.put_piece(Square::new(File::File2, Rank::Rank2), Piece::W_BISHOP);
        board.put_piece(Square::new(File::File8, Rank::Rank8), Piece::B_BISHOP);
        board.put_piece(Square::new(File::File2, Rank::Rank8), Piece::B_ROOK);
        board
    }

    /// Get piece on square
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Set or clear a square, returning what was there before
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index()], piece)
    }

    /// Place piece on board
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.set_piece(sq, Some(piece))
    }

    /// Remove piece from board
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.set_piece(sq, None)
    }

    /// All occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.occupied_squares(None).collect()
    }

    /// Squares occupied by one color
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied_squares(Some(color)).collect()
    }

    /// Squares holding a piece, optionally restricted to one color, in index order
    pub fn occupied_squares(&self, color: Option<Color>) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| match self.piece_on(sq) {
            Some(piece) => color.is_none_or(|c| piece.color() == c),
            None => false,
        })
    }

    /// Unoccupied squares in index order
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_on(sq).is_none())
    }

    /// Squares holding exactly `piece` (same color, type and promotion state)
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_on(sq) == Some(piece))
    }

    /// Find king square
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(Piece::new(color, PieceType::King)).next()
    }

    /// Attack bitboard of the piece on `from`, using total occupancy as stoppers
    ///
    /// Squares held by friendly pieces are included. An empty square attacks nothing.
    pub fn attacks_from(&self, from: Square) -> Bitboard {
        self.attacks_with_stoppers(from, self.occupied())
    }

    fn attacks_with_stoppers(&self, from: Square, stoppers: Bitboard) -> Bitboard {
        match self.piece_on(from) {
            Some(piece) => attacks(piece, from, stoppers),
            None => Bitboard::EMPTY,
        }
    }

    /// Whether the piece on `from` attacks `to`
    pub fn is_attackable(&self, from: Square, to: Square) -> bool {
        self.attacks_from(from).contains(to)
    }

    /// Squares attacked by the piece on `from`
    pub fn attackable_squares_from(&self, from: Square) -> BitboardIter {
        self.attacks_from(from).iter()
    }

    /// Squares whose occupant attacks `to`, optionally restricted to one color
    pub fn attackable_squares_to(
        &self,
        to: Square,
        color: Option<Color>,
    ) -> impl Iterator<Item = Square> + '_ {
        let stoppers = self.occupied();
        self.occupied_squares(color)
            .filter(move |&from| self.attacks_with_stoppers(from, stoppers).contains(to))
    }

    /// Whether `color`'s king is attacked by any opposing piece
    ///
    /// A side without a king is never in check.
    pub fn is_king_checked(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            #[cfg(debug_assertions)]
            warn!("No king found for {color:?}");
            return false;
        };
        self.attackable_squares_to(king_sq, Some(color.opponent())).next().is_some()
    }

    /// Whether `color`'s king would be in check after moving the piece on `from` to `to`
    ///
    /// Anything standing on `to` is treated as captured. `self` is not modified.
    pub fn is_king_checked_by_moving_piece(&self, from: Square, to: Square, color: Color) -> bool {
        let mut board = *self;
        if let Some(piece) = board.remove_piece(from) {
            board.put_piece(to, piece);
        }
        board.is_king_checked(color)
    }

    /// Whether `color`'s king would be in check after placing `piece` on `to`
    pub fn is_king_checked_by_dropping_piece(&self, piece: Piece, to: Square, color: Color) -> bool {
        let mut board = *self;
        board.put_piece(to, piece);
        board.is_king_checked(color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Option<Piece> {
        &self.squares[sq.index()]
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        // Rank a (White's side) first, file 9 on the left
        for rank in Rank::ALL {
            write!(f, " ")?;
            for file in File::ALL.iter().rev() {
                match self.piece_on(Square::new(*file, rank)) {
                    Some(piece) => write!(f, "{piece:>3}")?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
