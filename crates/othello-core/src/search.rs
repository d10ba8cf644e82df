//! Game tree search engine.
//!
//! A fixed-depth negamax search with alpha-beta pruning. Every node returns
//! its value from the point of view of its own side to move; the parent
//! negates it. Moves are tried in ascending square order, so among equally
//! good moves the first one in that order is chosen.

pub mod options;
mod parallel;
mod search_context;
pub mod search_result;

use log::debug;

use crate::board::{Board, Perspective};
use crate::constants::SCORE_INF;
use crate::eval::Evaluator;
use crate::search::options::SearchOptions;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Negamax alpha-beta searcher over a pluggable evaluator.
///
/// The searcher owns no board state: every call works on the board it is given
/// and leaves it as it found it.
#[derive(Debug, Clone)]
pub struct Searcher<E> {
    options: SearchOptions,
    evaluator: E,
}

impl<E: Evaluator> Searcher<E> {
    /// Creates a new searcher.
    ///
    /// # Arguments
    ///
    /// * `options` - Search configuration.
    /// * `evaluator` - Scores leaf positions for their side to move.
    pub fn new(options: SearchOptions, evaluator: E) -> Self {
        Searcher { options, evaluator }
    }

    /// Creates a searcher that looks `depth` plies ahead.
    pub fn with_depth(depth: Depth, evaluator: E) -> Self {
        Searcher::new(SearchOptions::new(depth), evaluator)
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches the position in place.
    ///
    /// Moves are applied to and undone on `board` itself; when this returns the
    /// board is back in its original state.
    ///
    /// # Returns
    ///
    /// The root value for the side to move and the move achieving it. The move
    /// is `None` when the side to move has to pass, the game is over, or the
    /// depth is 0.
    pub fn search(&self, board: &mut Board) -> SearchResult {
        let mut ctx = SearchContext::new();
        let (score, best_move) = self.negamax(&mut ctx, board, 0, -SCORE_INF, SCORE_INF);

        debug!(
            "search depth={} score={} best_move={:?} nodes={}",
            self.options.depth, score, best_move, ctx.n_nodes
        );

        SearchResult {
            score,
            best_move,
            n_nodes: ctx.n_nodes,
            depth: self.options.depth,
        }
    }

    /// Searches a private copy of `board`, leaving the caller's board untouched.
    pub fn search_cloned(&self, board: &Board) -> SearchResult {
        let mut scratch = board.clone();
        self.search(&mut scratch)
    }

    /// Negamax with alpha-beta cutoffs.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Node counter.
    /// * `board` - Position to search; restored before returning.
    /// * `ply` - Distance from the root.
    /// * `alpha` - Lower bound for the side to move.
    /// * `beta` - Upper bound for the side to move.
    ///
    /// # Returns
    ///
    /// The value for the side to move at this node and the best move found, if
    /// any move raised `alpha`.
    fn negamax(
        &self,
        ctx: &mut SearchContext,
        board: &mut Board,
        ply: Depth,
        mut alpha: Score,
        beta: Score,
    ) -> (Score, Option<Square>) {
        ctx.increment_nodes();

        if ply >= self.options.depth || board.is_terminal() {
            return (self.evaluator.evaluate(board), None);
        }

        let moves = board.legal_moves(Perspective::Mover);
        if moves.is_empty() {
            board.pass();
            let (score, _) = self.negamax(ctx, board, ply + 1, -beta, -alpha);
            board.undo();
            return (-score, None);
        }

        let mut best_move = None;
        for sq in moves {
            let applied = board.apply_move(sq);
            debug_assert!(applied, "generated move {sq} was rejected");
            let (score, _) = self.negamax(ctx, board, ply + 1, -beta, -alpha);
            board.undo();

            let score = -score;
            if score > alpha {
                alpha = score;
                best_move = Some(sq);
                if alpha >= beta {
                    break;
                }
            }
        }

        (alpha, best_move)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;

    use super::*;
    use crate::disc::Disc;
    use crate::eval::{DiscDifference, SquareWeights};

    /// Plays `plies` random moves (passing when forced) from the opening.
    pub(crate) fn random_position(rng: &mut StdRng, plies: usize) -> Board {
        let mut board = Board::new();
        for _ in 0..plies {
            if board.is_terminal() {
                break;
            }
            match board.legal_moves(Perspective::Mover).iter().choose(rng) {
                Some(sq) => {
                    board.apply_move(sq);
                }
                None => board.pass(),
            }
        }
        board
    }

    /// Plain minimax without pruning, same leaf and pass rules as the searcher.
    fn minimax<E: Evaluator>(evaluator: &E, board: &mut Board, depth: Depth) -> Score {
        if depth == 0 || board.is_terminal() {
            return evaluator.evaluate(board);
        }
        let moves = board.legal_moves(Perspective::Mover);
        if moves.is_empty() {
            board.pass();
            let score = -minimax(evaluator, board, depth - 1);
            board.undo();
            return score;
        }
        let mut best = -SCORE_INF;
        for sq in moves {
            board.apply_move(sq);
            best = best.max(-minimax(evaluator, board, depth - 1));
            board.undo();
        }
        best
    }

    #[test]
    fn test_depth_zero_evaluates_root() {
        let weights = SquareWeights::classic();
        let mut rng = StdRng::seed_from_u64(7);
        let searcher = Searcher::with_depth(0, weights.clone());
        for plies in [0, 5, 20, 40] {
            let mut board = random_position(&mut rng, plies);
            let result = searcher.search(&mut board);
            assert_eq!(result.score, weights.evaluate(&board));
            assert_eq!(result.best_move, None);
            assert_eq!(result.n_nodes, 1);
            assert_eq!(result.depth, 0);
        }
    }

    #[test]
    fn test_zero_weights_picks_first_move() {
        let searcher = Searcher::with_depth(1, SquareWeights::zero());
        let mut board = Board::new();
        let result = searcher.search(&mut board);
        assert_eq!(result.best_move, Some(Square::D3));
        assert_eq!(result.score, 0);
        assert_eq!(result.n_nodes, 5);
    }

    #[test]
    fn test_search_restores_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let searcher = Searcher::with_depth(3, SquareWeights::classic());
        for _ in 0..10 {
            let mut board = random_position(&mut rng, 12);
            let before = board.clone();
            searcher.search(&mut board);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_search_cloned_matches_in_place() {
        let mut rng = StdRng::seed_from_u64(13);
        let searcher = Searcher::with_depth(3, SquareWeights::classic());
        for _ in 0..10 {
            let board = random_position(&mut rng, 16);
            let cloned = searcher.search_cloned(&board);
            let mut scratch = board.clone();
            assert_eq!(searcher.search(&mut scratch), cloned);
        }
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut rng = StdRng::seed_from_u64(17);
        let evaluators: [&dyn Fn(&Board) -> Score; 2] = [
            &|b: &Board| SquareWeights::classic().evaluate(b),
            &|b: &Board| DiscDifference.evaluate(b),
        ];
        for plies in [0, 8, 20, 36, 50] {
            for _ in 0..4 {
                let mut board = random_position(&mut rng, plies);
                for evaluator in evaluators {
                    for depth in 1..=4 {
                        let searcher = Searcher::with_depth(depth, evaluator);
                        let result = searcher.search(&mut board);
                        assert_eq!(
                            result.score,
                            minimax(&evaluator, &mut board, depth),
                            "depth {depth} on\n{board}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_best_move_achieves_score() {
        let mut rng = StdRng::seed_from_u64(19);
        let weights = SquareWeights::classic();
        let searcher = Searcher::with_depth(3, weights.clone());
        for _ in 0..10 {
            let mut board = random_position(&mut rng, 20);
            let result = searcher.search(&mut board);
            let Some(sq) = result.best_move else {
                continue;
            };
            board.apply_move(sq);
            assert_eq!(-minimax(&weights, &mut board, 2), result.score);
        }
    }

    #[test]
    fn test_forced_pass() {
        // Black owns B1 and cannot move; White can play C1.
        let mut board = Board::from_bitboards(Square::B1, Square::A1, Disc::Black).unwrap();
        let before = board.clone();
        let searcher = Searcher::with_depth(2, DiscDifference);

        let result = searcher.search(&mut board);
        assert_eq!(result.best_move, None);
        // White takes all three discs.
        assert_eq!(result.score, -3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_root() {
        let mut board = Board::from_bitboards(u64::MAX, 0u64, Disc::White).unwrap();
        let searcher = Searcher::with_depth(5, DiscDifference);
        let result = searcher.search(&mut board);
        assert_eq!(result.score, crate::constants::SCORE_MAX);
        assert_eq!(result.best_move, None);
        assert_eq!(result.n_nodes, 1);
    }

    #[test]
    fn test_single_move_is_returned() {
        // Only A3 is legal for Black.
        let mut board = Board::from_bitboards(Square::A1, Square::A2, Disc::Black).unwrap();
        let searcher = Searcher::with_depth(3, DiscDifference);
        let result = searcher.search(&mut board);
        assert_eq!(result.best_move, Some(Square::A3));
        assert_eq!(result.score, 3);
    }
}
