//! Root-split parallel search.
//!
//! Each root move is searched on its own copy of the board with a full
//! window, so the subtrees share no state. The root value and move are the
//! same as those of the sequential search.

use log::debug;
use rayon::prelude::*;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval::Evaluator;
use crate::search::Searcher;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::Score;

/// Outcome of searching one root move.
struct RootMove {
    sq: Square,
    score: Score,
    n_nodes: u64,
}

impl<E: Evaluator + Sync> Searcher<E> {
    /// Searches every root move in parallel on the rayon thread pool.
    ///
    /// Positions that the root cannot branch on (depth 0, game over, forced
    /// pass) fall back to [`Searcher::search_cloned`].
    pub fn search_parallel(&self, board: &Board) -> SearchResult {
        let moves = board.legal_move_list();
        if self.options.depth == 0 || moves.is_empty() {
            return self.search_cloned(board);
        }

        let root_moves: Vec<RootMove> = moves
            .as_slice()
            .par_iter()
            .map(|&sq| {
                let mut child = board.clone();
                let applied = child.apply_move(sq);
                debug_assert!(applied, "generated move {sq} was rejected");

                let mut ctx = SearchContext::new();
                let (score, _) = self.negamax(&mut ctx, &mut child, 1, -SCORE_INF, SCORE_INF);
                RootMove {
                    sq,
                    score: -score,
                    n_nodes: ctx.n_nodes,
                }
            })
            .collect();

        // First maximum in move order, as in the sequential search.
        let mut best = &root_moves[0];
        for rm in &root_moves[1..] {
            if rm.score > best.score {
                best = rm;
            }
        }
        let n_nodes = 1 + root_moves.iter().map(|rm| rm.n_nodes).sum::<u64>();

        debug!(
            "parallel search depth={} score={} best_move={} nodes={} root_moves={}",
            self.options.depth,
            best.score,
            best.sq,
            n_nodes,
            root_moves.len()
        );

        SearchResult {
            score: best.score,
            best_move: Some(best.sq),
            n_nodes,
            depth: self.options.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::disc::Disc;
    use crate::eval::{DiscDifference, SquareWeights};
    use crate::search::tests::random_position;

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(23);
        let searcher = Searcher::with_depth(4, SquareWeights::classic());
        for plies in [0, 6, 14, 24, 34, 44] {
            let board = random_position(&mut rng, plies);
            let parallel = searcher.search_parallel(&board);
            let sequential = searcher.search_cloned(&board);
            assert_eq!(parallel.score, sequential.score, "\n{board}");
            assert_eq!(parallel.best_move, sequential.best_move, "\n{board}");
        }
    }

    #[test]
    fn test_parallel_tie_break_is_first_move() {
        let searcher = Searcher::with_depth(2, SquareWeights::zero());
        let result = searcher.search_parallel(&Board::new());
        assert_eq!(result.best_move, Some(Square::D3));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_parallel_with_35_root_moves() {
        let board = Board::from_bitboards(
            0x0008_6411_0631_0000u64,
            0x0076_0842_2846_7200u64,
            Disc::Black,
        )
        .unwrap();
        let searcher = Searcher::with_depth(1, DiscDifference);
        let parallel = searcher.search_parallel(&board);
        let sequential = searcher.search_cloned(&board);
        assert_eq!(parallel.score, sequential.score);
        assert_eq!(parallel.best_move, sequential.best_move);
        assert_eq!(parallel.n_nodes, 36);
    }

    #[test]
    fn test_parallel_falls_back_without_root_moves() {
        let board = Board::from_bitboards(Square::B1, Square::A1, Disc::Black).unwrap();
        let searcher = Searcher::with_depth(2, DiscDifference);
        let result = searcher.search_parallel(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -3);

        let depth_zero = Searcher::with_depth(0, DiscDifference);
        assert_eq!(depth_zero.search_parallel(&Board::new()).n_nodes, 1);
    }
}
