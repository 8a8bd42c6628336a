//! Generated moves agree with strict validation on every candidate shape

mod common;

use std::collections::HashSet;

use common::{all_candidate_shapes, position, random_playout};
use rshogi_rules::{Color, Game, Move, MoveSource, Piece};

fn assert_consistent(game: &Game) {
    let generated = game.valid_moves();
    let unique: HashSet<Move> = generated.iter().copied().collect();
    assert_eq!(unique.len(), generated.len(), "duplicate moves generated");

    for mv in all_candidate_shapes(game) {
        let valid = game.validate(&mv).is_ok();
        assert_eq!(
            valid,
            unique.contains(&mv),
            "{mv}: validate={:?}\n{:?}",
            game.validate(&mv),
            game.board()
        );
    }
}

#[test]
fn test_startpos_consistency() {
    assert_consistent(&Game::startpos());
}

#[test]
fn test_drop_mate_net_consistency() {
    let game = position(
        &[
            ("1a", Piece::W_KING),
            ("3b", Piece::B_SILVER),
            ("2c", Piece::B_GOLD),
            ("9i", Piece::B_KING),
            ("5e", Piece::B_PAWN),
        ],
        Color::Black,
        &[Piece::B_PAWN, Piece::B_KNIGHT, Piece::B_ROOK],
    );
    assert_consistent(&game);
}

#[test]
fn test_in_check_consistency() {
    let game = position(
        &[
            ("5i", Piece::B_KING),
            ("4h", Piece::B_SILVER),
            ("5b", Piece::W_ROOK),
            ("1a", Piece::W_KING),
        ],
        Color::Black,
        &[Piece::B_GOLD, Piece::B_PAWN],
    );
    assert!(game.is_in_check());
    assert_consistent(&game);
}

#[test]
fn test_random_playout_consistency() {
    for seed in 0..6 {
        let game = random_playout(seed, 30 + seed as usize * 7);
        assert_consistent(&game);
    }
}

#[test]
fn test_valid_moves_from_matches_valid_moves() {
    let game = random_playout(42, 40);
    let all = game.valid_moves();
    for from in game.board().occupied_squares(Some(game.color())) {
        let Some(piece) = game.board()[from] else { continue };
        let from_square = game.valid_moves_from(MoveSource::Board(from), piece);
        let expected: Vec<Move> =
            all.iter().copied().filter(|mv| mv.from() == Some(from)).collect();
        assert_eq!(from_square.to_vec(), expected, "{from}");
    }
}
