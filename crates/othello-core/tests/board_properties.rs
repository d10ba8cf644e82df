//! Property-based tests using proptest.

use othello_core::bitboard::{Bitboard, Direction};
use othello_core::board::{Board, Perspective};
use othello_core::eval::{Evaluator, SquareWeights};
use othello_core::search::Searcher;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random game length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    0..=70usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Plays up to `plies` random moves, passing when the side to move is blocked.
fn random_game(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_move_list();
        if moves.is_empty() {
            board.pass();
        } else {
            let sq = moves[rng.random_range(0..moves.len())];
            assert!(board.apply_move(sq));
        }
    }
    board
}

/// Per-square, per-direction, per-distance scan for legal moves.
fn scan_moves(player: Bitboard, opponent: Bitboard) -> Bitboard {
    let empty = !(player | opponent);
    empty
        .iter()
        .filter(|sq| {
            Direction::ALL.iter().any(|&dir| {
                let mut cursor = dir.step(sq.bitboard());
                let mut distance = 0;
                while !(cursor & opponent).is_empty() {
                    cursor = dir.step(cursor);
                    distance += 1;
                }
                distance > 0 && !(cursor & player).is_empty()
            })
        })
        .collect()
}

proptest! {
    /// Property: the two sides never share a square
    #[test]
    fn prop_discs_are_disjoint(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = random_game(seed, plies);
        prop_assert!((board.player() & board.opponent()).is_empty());

        while board.undo().is_some() {
            prop_assert!((board.player() & board.opponent()).is_empty());
        }
        prop_assert_eq!(board, Board::new());
    }

    /// Property: apply followed by undo restores the position for every legal move
    #[test]
    fn prop_apply_undo_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = random_game(seed, plies);
        let before = board.clone();

        for sq in board.legal_move_list() {
            prop_assert!(board.apply_move(sq));
            prop_assert_eq!(board.side_to_move(), before.side_to_move().opposite());
            prop_assert!(board.undo().is_some());
            prop_assert_eq!(&board, &before);
        }

        board.pass();
        board.undo();
        prop_assert_eq!(&board, &before);
    }

    /// Property: flood-fill move generation equals a brute-force scan
    #[test]
    fn prop_moves_match_scan(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_game(seed, plies);
        prop_assert_eq!(
            board.legal_moves(Perspective::Mover),
            scan_moves(board.player(), board.opponent())
        );
        prop_assert_eq!(
            board.legal_moves(Perspective::Opponent),
            scan_moves(board.opponent(), board.player())
        );
    }

    /// Property: flood-fill move generation equals a brute-force scan on arbitrary boards
    #[test]
    fn prop_moves_match_scan_unreachable(occupied in any::<u64>(), split in any::<u64>()) {
        let player = Bitboard::new(occupied & split);
        let opponent = Bitboard::new(occupied & !split);
        prop_assert_eq!(player.get_moves(opponent), scan_moves(player, opponent));
    }

    /// Property: terminal exactly when neither side can move
    #[test]
    fn prop_terminal_iff_no_moves(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_game(seed, plies);
        let no_moves = board.legal_moves(Perspective::Mover).is_empty()
            && board.legal_moves(Perspective::Opponent).is_empty();
        prop_assert_eq!(board.is_terminal(), no_moves);
    }

    /// Property: a move flips only opponent discs and adds exactly one new disc
    #[test]
    fn prop_flips_are_opponent_discs(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = random_game(seed, plies);
        let before = board.clone();
        for sq in before.legal_move_list() {
            let flipped = board.try_apply_move(sq).unwrap();
            prop_assert!(!flipped.is_empty());
            prop_assert_eq!(flipped & before.opponent(), flipped);
            prop_assert_eq!(
                (board.player() | board.opponent()).count(),
                (before.player() | before.opponent()).count() + 1
            );
            board.undo();
        }
    }

    /// Property: stable edge discs are owned rim discs
    #[test]
    fn prop_stable_edges_are_owned_rim_discs(seed in seed_strategy(), plies in ply_count_strategy()) {
        let board = random_game(seed, plies);
        let rim = Bitboard::new(0xff818181818181ff);
        for perspective in [Perspective::Mover, Perspective::Opponent] {
            let stable = board.stable_edge_discs(perspective);
            prop_assert_eq!(stable & board.discs(perspective), stable);
            prop_assert_eq!(stable & rim, stable);
        }
    }

    /// Property: depth-0 search is the static evaluation
    #[test]
    fn prop_depth_zero_is_evaluation(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = random_game(seed, plies);
        let weights = SquareWeights::classic();
        let expected = weights.evaluate(&board);
        let result = Searcher::with_depth(0, weights).search(&mut board);
        prop_assert_eq!(result.score, expected);
        prop_assert_eq!(result.best_move, None);
    }
}
