//! Self-play driver and per-ply game recording.
//!
//! [`play_game`] runs the standard driver loop: stop once neither side can
//! move, pass when the side to move has no legal move, otherwise ask that
//! side's [`MoveSelector`] and play its answer. After every ply a
//! [`GameRecorder`] snapshots the position from the point of view of the side
//! that just moved. Writing the record anywhere is left to the caller.

use log::{info, trace};

use crate::board::{Board, Outcome, Perspective};
use crate::disc::Disc;
use crate::error::GameError;
use crate::eval::{Evaluator, SquareWeights};
use crate::search::Searcher;
use crate::square::{Square, TOTAL_SQUARES};

/// Chooses moves for one side of a game.
pub trait MoveSelector {
    /// Picks a move for the side to move on `board`.
    ///
    /// The board may be used as scratch space but must be returned in the
    /// state it was given. `None` means "no move", which the driver only
    /// accepts when the side to move has no legal move.
    fn select_move(&mut self, board: &mut Board) -> Option<Square>;
}

impl<E: Evaluator> MoveSelector for Searcher<E> {
    fn select_move(&mut self, board: &mut Board) -> Option<Square> {
        self.search(board).best_move
    }
}

/// Snapshot of a position right after one ply, seen by the side that played it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyRecord {
    /// 1-based ply number.
    pub ply: usize,
    /// Colour of the side that played this ply.
    pub mover: Disc,
    /// Square played, `None` for a pass.
    pub played: Option<Square>,
    /// Mover's discs minus the other side's.
    pub disc_difference: i32,
    /// Mover's square-weight total minus the other side's, using the mover's table.
    pub square_value: i32,
    /// Legal moves the mover would have if it were its turn again.
    pub mover_mobility: u32,
    /// Legal moves of the side now to move.
    pub opponent_mobility: u32,
    /// Empty squares next to the discs flipped by this ply.
    pub openness: u32,
    /// Mover's corner-anchored edge discs.
    pub mover_stable_edges: u32,
    /// Other side's corner-anchored edge discs.
    pub opponent_stable_edges: u32,
    /// Every square from A1 to H8: `1` for the mover, `-1` for the other side, `0` empty.
    pub squares: [i8; TOTAL_SQUARES],
    /// Final result for the mover, filled in by [`GameRecorder::finish`].
    pub outcome: Option<Outcome>,
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub plies: Vec<PlyRecord>,
    pub black_discs: u32,
    pub white_discs: u32,
}

impl GameRecord {
    /// Returns the colour with more discs, or `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        match self.black_discs.cmp(&self.white_discs) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Accumulates [`PlyRecord`]s while a game is played.
#[derive(Debug, Clone)]
pub struct GameRecorder {
    black_weights: SquareWeights,
    white_weights: SquareWeights,
    plies: Vec<PlyRecord>,
}

impl Default for GameRecorder {
    fn default() -> Self {
        GameRecorder::new(SquareWeights::zero(), SquareWeights::zero())
    }
}

impl GameRecorder {
    /// Creates a recorder.
    ///
    /// # Arguments
    ///
    /// * `black_weights` - Table used for Black's `square_value`.
    /// * `white_weights` - Table used for White's `square_value`.
    pub fn new(black_weights: SquareWeights, white_weights: SquareWeights) -> Self {
        GameRecorder {
            black_weights,
            white_weights,
            plies: Vec::new(),
        }
    }

    /// Returns the plies recorded so far.
    pub fn plies(&self) -> &[PlyRecord] {
        &self.plies
    }

    /// Records the position after the ply just played on `board`.
    pub fn record(&mut self, board: &Board) {
        // The board has already handed the turn over.
        let mover = board.side_to_move().opposite();
        let weights = match mover {
            Disc::White => &self.white_weights,
            _ => &self.black_weights,
        };

        let mut squares = [0i8; TOTAL_SQUARES];
        for sq in board.opponent() {
            squares[sq.index()] = 1;
        }
        for sq in board.player() {
            squares[sq.index()] = -1;
        }

        let record = PlyRecord {
            ply: self.plies.len() + 1,
            mover,
            played: board.last_ply().and_then(|ply| ply.square()),
            disc_difference: -board.disc_difference(),
            square_value: weights.square_value_sum(board),
            mover_mobility: board.mobility_count(Perspective::Opponent),
            opponent_mobility: board.mobility_count(Perspective::Mover),
            openness: board.openness_of_last_move(),
            mover_stable_edges: board.stable_edge_discs(Perspective::Opponent).count(),
            opponent_stable_edges: board.stable_edge_discs(Perspective::Mover).count(),
            squares,
            outcome: None,
        };
        trace!(
            "ply {} {:?} {:?} disc_diff={} square_value={}",
            record.ply, record.mover, record.played, record.disc_difference, record.square_value
        );
        self.plies.push(record);
    }

    /// Stamps every ply with its mover's result and returns the finished record.
    ///
    /// `board` must be the final position.
    pub fn finish(mut self, board: &Board) -> GameRecord {
        let side_to_move = board.side_to_move();
        let result = board.result();
        for record in &mut self.plies {
            record.outcome = Some(if record.mover == side_to_move {
                result
            } else {
                result.opposite()
            });
        }

        let (black_discs, white_discs) = board.disc_counts();
        GameRecord {
            plies: self.plies,
            black_discs,
            white_discs,
        }
    }
}

/// Plays a game to the end.
///
/// # Arguments
///
/// * `board` - Starting position; left at the final position.
/// * `black` - Chooses Black's moves.
/// * `white` - Chooses White's moves.
/// * `recorder` - Collects one [`PlyRecord`] per ply.
///
/// # Errors
///
/// [`GameError::MissingMove`] if a selector returns `None` while legal moves
/// exist, and [`GameError::Board`] if it returns an illegal square.
pub fn play_game<B, W>(
    board: &mut Board,
    black: &mut B,
    white: &mut W,
    mut recorder: GameRecorder,
) -> Result<GameRecord, GameError>
where
    B: MoveSelector + ?Sized,
    W: MoveSelector + ?Sized,
{
    while !board.is_terminal() {
        let side = board.side_to_move();
        if board.has_legal_moves() {
            let choice = match side {
                Disc::White => white.select_move(board),
                _ => black.select_move(board),
            };
            let sq = choice.ok_or(GameError::MissingMove {
                side,
                ply: board.ply_count(),
            })?;
            board.try_apply_move(sq)?;
        } else {
            trace!("{side:?} passes");
            board.pass();
        }
        recorder.record(board);
    }

    let record = recorder.finish(board);
    info!(
        "game over after {} plies: black {} white {}",
        record.plies.len(),
        record.black_discs,
        record.white_discs
    );
    Ok(record)
}
