//! Helpers shared by the integration tests
#![allow(dead_code)]

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use rshogi_rules::{Board, Color, Game, Move, PerformMode, Piece, Square};

/// Route `log` output through the test harness (`RUST_LOG=trace` to see rejections)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Build a game from `(square, piece)` pairs
pub fn position(pieces: &[(&str, Piece)], color: Color, hand: &[Piece]) -> Game {
    init_logging();
    let mut board = Board::empty();
    for &(s, piece) in pieces {
        board.put_piece(sq(s), piece);
    }
    Game::from_parts(board, color, hand.to_vec())
}

/// Play `plies` random legal moves from the initial position
pub fn random_playout(seed: u64, plies: usize) -> Game {
    init_logging();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut game = Game::startpos();
    for _ in 0..plies {
        let moves = game.valid_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        game.perform(mv, PerformMode::AssumesGenerated).unwrap();
    }
    game
}

/// Every move shape that could be legal for the side to move, legal or not
pub fn all_candidate_shapes(game: &Game) -> Vec<Move> {
    let mut moves = Vec::new();
    let color = game.color();
    for from in game.board().occupied_squares(Some(color)) {
        let piece = game.board()[from].unwrap();
        for to in Square::all() {
            for promote in [false, true] {
                moves.push(Move::board(from, to, piece, promote));
            }
        }
    }
    let mut hand: Vec<Piece> = game.captured_pieces_of(color).collect();
    hand.dedup();
    for piece in hand {
        for to in Square::all() {
            let mut mv = Move::drop(piece, to);
            moves.push(mv);
            mv.promote = true;
            moves.push(mv);
        }
    }
    moves
}
