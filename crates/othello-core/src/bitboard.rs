//! Bitboard operations and types.
//!
//! A [`Bitboard`] packs the 64 squares into a single `u64` (bit 0 = A1 at the
//! top-left, bit 63 = H8 at the bottom-right). Move generation, flip walks,
//! neighbourhood and edge queries all operate on whole words at once.

use std::fmt;

use crate::square::Square;

/// Every square except those on file A.
const NOT_FILE_A: u64 = 0xfefefefefefefefe;

/// Every square except those on file H.
const NOT_FILE_H: u64 = 0x7f7f7f7f7f7f7f7f;

/// Interior of each rank: blocks runs from touching files A and H.
const HORIZONTAL_SENTINEL: u64 = 0x7e7e7e7e7e7e7e7e;

/// Interior of each file: blocks runs from touching ranks 1 and 8.
const VERTICAL_SENTINEL: u64 = 0x00ffffffffffff00;

/// Interior of the board: blocks diagonal runs from touching any edge.
const DIAGONAL_SENTINEL: u64 = 0x007e7e7e7e7e7e00;

/// Bitboard mask of the board rim (ranks 1 and 8, files A and H).
pub const EDGE_MASK: u64 = 0xff818181818181ff;

/// Longest run of opponent discs that can sit between a move and an anchor.
const MAX_RUN: usize = 6;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The bitboard with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// The bitboard with every bit set.
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a copy with the bit of `sq` set.
    #[inline(always)]
    pub const fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard().0)
    }

    /// Returns a copy with the bit of `sq` cleared.
    #[inline(always)]
    pub const fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    /// Checks whether the bit of `sq` is set.
    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// Checks whether no bit is set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether exactly one bit is set.
    #[inline(always)]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a copy with the least significant set bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square of the least significant set bit, or `None` when empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as usize))
        }
    }

    /// Splits off the least significant set bit.
    ///
    /// # Returns
    ///
    /// The square of the lowest set bit and the remaining bitboard, or `None`
    /// when the bitboard is empty.
    #[inline(always)]
    pub fn pop_lsb(self) -> Option<(Square, Self)> {
        self.lsb_square().map(|sq| (sq, self.clear_lsb()))
    }

    /// Iterates over the set squares in ascending index order (A1 first).
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }

    /// Returns every square adjacent (in any of the 8 directions) to a set bit.
    ///
    /// The set bits themselves are included only if they neighbour another set bit.
    #[inline]
    pub fn neighbours(self) -> Self {
        Direction::ALL
            .iter()
            .fold(Bitboard::EMPTY, |acc, dir| acc | dir.step(self))
    }

    /// Gets the legal moves for the owner of this bitboard.
    ///
    /// # Arguments
    ///
    /// * `opponent` - The opponent's discs.
    ///
    /// # Returns
    ///
    /// Every empty square from which at least one direction flips opponent discs.
    #[inline(always)]
    pub fn get_moves(self, opponent: Bitboard) -> Bitboard {
        Bitboard(get_moves(self.0, opponent.0))
    }
}

/// One of the eight compass directions a line of discs can run in.
///
/// North is towards rank 1 (the top of the board), east is towards file H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Shifts every bit one square in this direction without any edge masking.
    ///
    /// Bits leaving the top or bottom fall off the word; bits crossing the A/H
    /// files wrap into the neighbouring rank, so callers must mask.
    #[inline(always)]
    pub const fn shift(self, bits: u64) -> u64 {
        match self {
            Direction::North => bits >> 8,
            Direction::NorthEast => bits >> 7,
            Direction::East => bits << 1,
            Direction::SouthEast => bits << 9,
            Direction::South => bits << 8,
            Direction::SouthWest => bits << 7,
            Direction::West => bits >> 1,
            Direction::NorthWest => bits >> 9,
        }
    }

    /// Mask applied to opponent discs during move generation so that a run of
    /// discs never touches the edge it would wrap across.
    #[inline(always)]
    pub const fn sentinel(self) -> u64 {
        match self {
            Direction::East | Direction::West => HORIZONTAL_SENTINEL,
            Direction::North | Direction::South => VERTICAL_SENTINEL,
            _ => DIAGONAL_SENTINEL,
        }
    }

    /// Moves every set square exactly one step in this direction.
    ///
    /// Squares that would leave the board are dropped instead of wrapping.
    #[inline(always)]
    pub const fn step(self, bb: Bitboard) -> Bitboard {
        let shifted = self.shift(bb.0);
        Bitboard(match self {
            Direction::North | Direction::South => shifted,
            Direction::NorthEast | Direction::East | Direction::SouthEast => shifted & NOT_FILE_A,
            Direction::NorthWest | Direction::West | Direction::SouthWest => shifted & NOT_FILE_H,
        })
    }
}

/// Computes the legal moves with a bounded shift flood fill.
///
/// For each direction the player's discs are pushed through the opponent's
/// (sentinel-masked) discs for up to [`MAX_RUN`] steps, then one more step is
/// taken and intersected with the empty squares.
#[inline]
fn get_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    let mut moves = 0;

    for dir in Direction::ALL {
        let run = opponent & dir.sentinel();
        let mut reach = run & dir.shift(player);
        for _ in 1..MAX_RUN {
            reach |= run & dir.shift(reach);
        }
        moves |= empty & dir.shift(reach);
    }

    moves
}

/// Reference move generator: walks every empty square in every direction.
///
/// Only used to cross-check [`Bitboard::get_moves`].
#[cfg(test)]
pub(crate) fn get_moves_scan(player: Bitboard, opponent: Bitboard) -> Bitboard {
    let empty = !(player | opponent);
    let mut moves = Bitboard::EMPTY;

    for sq in empty.iter() {
        let origin = sq.bitboard();
        let legal = Direction::ALL.iter().any(|&dir| {
            let mut cursor = dir.step(origin);
            let mut run = 0;
            while !(cursor & opponent).is_empty() {
                cursor = dir.step(cursor);
                run += 1;
            }
            run > 0 && !(cursor & player).is_empty()
        });
        if legal {
            moves = moves.set(sq);
        }
    }

    moves
}

// Operator trait implementations

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

impl fmt::Display for Bitboard {
    /// Prints an 8x8 grid, rank 1 on the first line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::iter() {
            write!(f, "{}", if self.contains(sq) { '1' } else { '.' })?;
            if sq.file() == 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let (square, rest) = self.bitboard.pop_lsb()?;
        self.bitboard = rest;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}
