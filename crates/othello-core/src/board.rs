//! Othello board represented as a mover-relative pair of bitboards.
//!
//! The two bitboards always mean "side to move" and "side not to move"; after
//! every move or pass they simply trade places. The absolute colour of the
//! mover is tracked separately and is only needed to report results.

use std::fmt;

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::constants::MAX_MOVES;
use crate::disc::Disc;
use crate::error::BoardError;
use crate::flip;
use crate::square::{Square, TOTAL_SQUARES};
use crate::stability;

/// Whose point of view a query is asked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perspective {
    /// The side to move.
    Mover,
    /// The side not to move.
    Opponent,
}

/// Occupant of a square relative to the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Mover,
    Opponent,
    Empty,
}

/// Final result of a game, from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Returns `1` for a win, `-1` for a loss and `0` for a draw.
    pub const fn signum(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
            Outcome::Draw => 0,
        }
    }

    /// Returns the same result seen from the other side.
    pub const fn opposite(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    fn from_counts(mine: u32, theirs: u32) -> Outcome {
        match mine.cmp(&theirs) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Undo information for one ply.
///
/// A pass is stored as an empty placement with nothing flipped, which the undo
/// formula turns into a pure side swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ply {
    /// The square the disc was placed on (empty for a pass).
    pub placed: Bitboard,
    /// The opponent discs that were reversed.
    pub flipped: Bitboard,
}

impl Ply {
    pub const PASS: Ply = Ply {
        placed: Bitboard::EMPTY,
        flipped: Bitboard::EMPTY,
    };

    /// Checks whether this ply was a pass.
    #[inline]
    pub fn is_pass(&self) -> bool {
        self.placed.is_empty()
    }

    /// Returns the square played, or `None` for a pass.
    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.placed.lsb_square()
    }
}

/// Represents an Othello board with bitboards for the player and opponent.
///
/// `player` holds the discs of the side to move and `opponent` the discs of the
/// other side. `history` records every ply played on this board so that
/// [`Board::undo`] can restore the previous position exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    player: Bitboard,
    opponent: Bitboard,
    side_to_move: Disc,
    history: Vec<Ply>,
}

impl Default for Board {
    /// Creates a board with the standard starting position, Black to move.
    ///
    /// The initial position has:
    /// - Black discs on D5 and E4
    /// - White discs on D4 and E5
    fn default() -> Self {
        Board {
            player: Square::D5.bitboard() | Square::E4.bitboard(),
            opponent: Square::D4.bitboard() | Square::E5.bitboard(),
            side_to_move: Disc::Black,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from given bitboards.
    ///
    /// # Arguments
    /// * `player` - Discs of the side to move.
    /// * `opponent` - Discs of the other side.
    /// * `side_to_move` - Absolute colour of the side to move.
    ///
    /// # Errors
    /// [`BoardError::Overlap`] if a square is claimed by both sides and
    /// [`BoardError::NoSideToMove`] if `side_to_move` is [`Disc::Empty`].
    pub fn from_bitboards(
        player: impl Into<Bitboard>,
        opponent: impl Into<Bitboard>,
        side_to_move: Disc,
    ) -> Result<Board, BoardError> {
        let player = player.into();
        let opponent = opponent.into();

        let overlap = player & opponent;
        if !overlap.is_empty() {
            return Err(BoardError::Overlap(overlap.bits()));
        }
        if side_to_move == Disc::Empty {
            return Err(BoardError::NoSideToMove);
        }

        Ok(Board {
            player,
            opponent,
            side_to_move,
            history: Vec::new(),
        })
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds the 64 squares from A1 to H8 in rank order. `X` is
    /// Black, `O` is White and `-` (or `.`) is empty; whitespace is ignored.
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    /// * `side_to_move` - Absolute colour of the side to move.
    ///
    /// # Errors
    /// Returns a [`BoardError`] for unknown characters or a wrong square count.
    pub fn from_string(board_string: &str, side_to_move: Disc) -> Result<Board, BoardError> {
        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        let mut count = 0;

        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(BoardError::InvalidChar(c))?;
            if let Some(sq) = Square::from_index(count) {
                match disc {
                    Disc::Black => black = black.set(sq),
                    Disc::White => white = white.set(sq),
                    Disc::Empty => {}
                }
            }
            count += 1;
        }

        if count != TOTAL_SQUARES {
            return Err(BoardError::InvalidLength(count));
        }

        match side_to_move {
            Disc::Black => Board::from_bitboards(black, white, side_to_move),
            Disc::White => Board::from_bitboards(white, black, side_to_move),
            Disc::Empty => Err(BoardError::NoSideToMove),
        }
    }

    /// Returns the discs of the side to move.
    #[inline(always)]
    pub fn player(&self) -> Bitboard {
        self.player
    }

    /// Returns the discs of the side not to move.
    #[inline(always)]
    pub fn opponent(&self) -> Bitboard {
        self.opponent
    }

    /// Returns the absolute colour of the side to move.
    #[inline(always)]
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the plies played on this board, oldest first.
    #[inline]
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// Returns the most recent ply, if any.
    #[inline]
    pub fn last_ply(&self) -> Option<&Ply> {
        self.history.last()
    }

    /// Returns the number of plies (moves and passes) played on this board.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the discs owned by the given side.
    #[inline(always)]
    pub fn discs(&self, perspective: Perspective) -> Bitboard {
        match perspective {
            Perspective::Mover => self.player,
            Perspective::Opponent => self.opponent,
        }
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn empty(&self) -> Bitboard {
        !(self.player | self.opponent)
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }

    /// Gets the legal moves for one side.
    ///
    /// # Arguments
    /// * `perspective` - Which side's moves to generate.
    ///
    /// # Returns
    /// A bitboard where each set bit is a square that side could play.
    #[inline(always)]
    pub fn legal_moves(&self, perspective: Perspective) -> Bitboard {
        match perspective {
            Perspective::Mover => self.player.get_moves(self.opponent),
            Perspective::Opponent => self.opponent.get_moves(self.player),
        }
    }

    /// Lists the legal moves of the side to move in ascending square order.
    pub fn legal_move_list(&self) -> ArrayVec<Square, MAX_MOVES> {
        self.legal_moves(Perspective::Mover).iter().collect()
    }

    /// Checks if the side to move has any legal move.
    #[inline(always)]
    pub fn has_legal_moves(&self) -> bool {
        !self.legal_moves(Perspective::Mover).is_empty()
    }

    /// Checks if the side to move may play at `sq`.
    #[inline(always)]
    pub fn can_play(&self, sq: Square) -> bool {
        self.legal_moves(Perspective::Mover).contains(sq)
    }

    /// Plays `sq` for the side to move.
    ///
    /// # Returns
    /// `true` if the move was legal and has been applied, `false` (with the
    /// board untouched) otherwise.
    pub fn apply_move(&mut self, sq: Square) -> bool {
        self.try_apply_move(sq).is_ok()
    }

    /// Plays `sq` for the side to move.
    ///
    /// # Returns
    /// The discs reversed by the move.
    ///
    /// # Errors
    /// [`BoardError::IllegalMove`] if `sq` is not a legal move; the board is
    /// left unchanged.
    pub fn try_apply_move(&mut self, sq: Square) -> Result<Bitboard, BoardError> {
        if !self.can_play(sq) {
            return Err(BoardError::IllegalMove(sq));
        }

        let flipped = flip::flip(sq, self.player, self.opponent);
        debug_assert!(!flipped.is_empty());

        let ply = Ply {
            placed: sq.bitboard(),
            flipped,
        };
        self.player ^= ply.placed | ply.flipped;
        self.opponent ^= ply.flipped;
        self.switch_sides();
        self.history.push(ply);

        Ok(flipped)
    }

    /// Hands the turn to the other side without placing a disc.
    ///
    /// The board does not check that the side to move has no legal move.
    pub fn pass(&mut self) {
        self.switch_sides();
        self.history.push(Ply::PASS);
    }

    /// Takes back the most recent move or pass.
    ///
    /// # Returns
    /// The ply that was taken back, or `None` at the start of the history.
    pub fn undo(&mut self) -> Option<Ply> {
        let ply = self.history.pop()?;
        self.switch_sides();
        self.player ^= ply.placed | ply.flipped;
        self.opponent ^= ply.flipped;
        Some(ply)
    }

    #[inline(always)]
    fn switch_sides(&mut self) {
        std::mem::swap(&mut self.player, &mut self.opponent);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Checks if the game is over (neither side can move).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.legal_moves(Perspective::Mover).is_empty()
            && self.legal_moves(Perspective::Opponent).is_empty()
    }

    /// Compares disc counts from the point of view of the side to move.
    ///
    /// Only meaningful once [`Board::is_terminal`] holds.
    pub fn result(&self) -> Outcome {
        Outcome::from_counts(self.player.count(), self.opponent.count())
    }

    /// Returns the number of legal moves available to one side.
    #[inline]
    pub fn mobility_count(&self, perspective: Perspective) -> u32 {
        self.legal_moves(perspective).count()
    }

    /// Gets the rim discs of one side that are anchored to a corner.
    ///
    /// This only looks along the four edges; interior discs are never
    /// reported even when they cannot be flipped.
    pub fn stable_edge_discs(&self, perspective: Perspective) -> Bitboard {
        stability::get_stable_edge_discs(self.discs(perspective))
    }

    /// Counts the empty squares adjacent to the discs flipped by the last move.
    ///
    /// # Returns
    /// `0` at the start of the game or when the last ply was a pass.
    pub fn openness_of_last_move(&self) -> u32 {
        match self.history.last() {
            Some(ply) if !ply.is_pass() => (ply.flipped.neighbours() & self.empty()).count(),
            _ => 0,
        }
    }

    /// Gets the occupant of a square relative to the side to move.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Occupant {
        if self.player.contains(sq) {
            Occupant::Mover
        } else if self.opponent.contains(sq) {
            Occupant::Opponent
        } else {
            Occupant::Empty
        }
    }

    /// Gets the absolute colour of the disc on a square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        match self.occupant(sq) {
            Occupant::Mover => self.side_to_move,
            Occupant::Opponent => self.side_to_move.opposite(),
            Occupant::Empty => Disc::Empty,
        }
    }

    /// Returns the `(black, white)` disc counts.
    pub fn disc_counts(&self) -> (u32, u32) {
        let mover = self.player.count();
        let opponent = self.opponent.count();
        match self.side_to_move {
            Disc::White => (opponent, mover),
            _ => (mover, opponent),
        }
    }

    /// Returns the number of mover discs minus the number of opponent discs.
    #[inline]
    pub fn disc_difference(&self) -> i32 {
        self.player.count() as i32 - self.opponent.count() as i32
    }

    /// Converts the board to an 8x8 grid of `X` (Black), `O` (White) and `-`.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(TOTAL_SQUARES + 8);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                s.push('\n');
            }
            s.push(self.disc_at(sq).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
