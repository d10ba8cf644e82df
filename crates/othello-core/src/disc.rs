/// Absolute colour of a square's occupant.
///
/// The board itself is stored relative to the side to move; `Disc` is the
/// translation used for reporting (recorders, renderers, board strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Returns the board-string character: `'-'`, `'X'` (Black) or `'O'` (White).
    pub const fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a board-string character. `'.'` is accepted as an empty square.
    pub const fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' | '.' => Some(Disc::Empty),
            'X' | 'x' => Some(Disc::Black),
            'O' | 'o' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the other colour; `Empty` stays `Empty`.
    pub const fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for disc in [Disc::Empty, Disc::Black, Disc::White] {
            assert_eq!(Disc::from_char(disc.to_char()), Some(disc));
        }
        assert_eq!(Disc::from_char('.'), Some(Disc::Empty));
        assert_eq!(Disc::from_char('?'), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Disc::Black.opposite(), Disc::White);
        assert_eq!(Disc::White.opposite(), Disc::Black);
        assert_eq!(Disc::Empty.opposite(), Disc::Empty);
    }
}
