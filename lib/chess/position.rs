use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// Coordinates that fall outside of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "({}, {}) is outside of the board", row, col)]
pub struct InvalidPosition {
    pub row: i8,
    pub col: i8,
}

/// A square on the chess board.
///
/// Rows count ranks from White's side, so row `0` is rank `1`, and columns count files from
/// the queenside, so column `0` is file `a`. This type guarantees both coordinates are in
/// the range `0..8`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Position {
    #[cfg_attr(test, strategy(0u8..8))]
    row: u8,
    #[cfg_attr(test, strategy(0u8..8))]
    col: u8,
}

impl Position {
    /// The number of rows and columns on the board.
    pub const SIZE: i8 = 8;

    /// Constructs [`Position`] from a pair of row and column.
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Result<Self, InvalidPosition> {
        if (0..Self::SIZE).contains(&row) && (0..Self::SIZE).contains(&col) {
            Ok(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(InvalidPosition { row, col })
        }
    }

    /// This position's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This position's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The position displaced by the given number of rows and columns, if still on the board.
    #[inline(always)]
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        Self::new(self.row as i8 + rows, self.col as i8 + cols).ok()
    }

    /// The unit step from this position towards another along a row, column or diagonal.
    ///
    /// Returns `None` if the positions coincide or are not aligned.
    pub fn step_towards(&self, other: Position) -> Option<(i8, i8)> {
        let rows = other.row as i8 - self.row as i8;
        let cols = other.col as i8 - self.col as i8;

        if (rows, cols) != (0, 0) && (rows == 0 || cols == 0 || rows.abs() == cols.abs()) {
            Some((rows.signum(), cols.signum()))
        } else {
            None
        }
    }

    /// Whether this square is light, in which case `a1` is dark.
    #[inline(always)]
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// An iterator over all positions, ordered by row then column.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64u8).map(|i| Position {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char((b'a' + self.col) as char)?;
        f.write_char((b'1' + self.row) as char)?;
        Ok(())
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a file in `a..=h` followed by a rank in `1..=8`")]
pub struct ParsePositionError;

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => Ok(Position {
                row: r - b'1',
                col: f - b'a',
            }),

            _ => Err(ParsePositionError),
        }
    }
}
