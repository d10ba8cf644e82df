use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;

/// A square on the 8x8 board, named in algebraic notation.
///
/// Files (columns) run A-H from left to right and ranks (rows) run 1-8 from top
/// to bottom. The discriminant is the bit index used by every [`Bitboard`]:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
///
/// Ascending index order is the left-to-right, top-to-bottom order in which moves
/// are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[rustfmt::skip]
const ALL_SQUARES: [Square; TOTAL_SQUARES] = {
    use Square::*;
    [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ]
};

impl Square {
    /// Returns a bitboard with only this square's bit set.
    ///
    /// A1 is `0x1`, H8 is `0x8000000000000000`.
    #[inline(always)]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self as u8)
    }

    /// Returns the bit index (0-63) of this square.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up the square for a bit index.
    ///
    /// # Arguments
    ///
    /// * `index` - Bit index in `0..64`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for a valid index, `None` otherwise.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < TOTAL_SQUARES {
            Some(ALL_SQUARES[index])
        } else {
            None
        }
    }

    /// Same as [`Square::from_index`] for indices already known to be on the board.
    #[inline(always)]
    pub(crate) fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(index < TOTAL_SQUARES, "square index out of range: {index}");
        ALL_SQUARES[index]
    }

    /// Returns the file (0 = A, 7 = H).
    #[inline]
    pub const fn file(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the rank (0 = rank 1 at the top, 7 = rank 8 at the bottom).
    #[inline]
    pub const fn rank(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Builds a square from file and rank coordinates.
    ///
    /// # Returns
    ///
    /// `None` if either coordinate is outside `0..8`.
    pub const fn from_file_rank(file: usize, rank: usize) -> Option<Square> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(ALL_SQUARES[rank * BOARD_SIZE + file])
        } else {
            None
        }
    }

    /// Iterates over all 64 squares from A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }
}

/// Error returned when parsing a square from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    #[error("invalid square '{0}': expected two characters such as 'd3'")]
    InvalidFormat(String),
    #[error("invalid file '{0}': must be a-h")]
    InvalidFile(char),
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"D3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat(trimmed.to_string()));
        };

        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(SquareError::InvalidFile(file_char)),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(SquareError::InvalidRank(rank_char)),
        };

        Ok(Square::from_index_unchecked(rank * BOARD_SIZE + file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}
