use crate::chess::{Color, Position};
use bitflags::bitflags;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

bitflags! {
    /// The castling rights of both sides.
    pub struct Castles: u8 {
        const WHITE_SHORT = 0b0001;
        const WHITE_LONG = 0b0010;
        const BLACK_SHORT = 0b0100;
        const BLACK_LONG = 0b1000;
    }
}

impl Castles {
    /// The kingside right of a side.
    #[inline(always)]
    pub fn short(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_SHORT,
            Color::Black => Castles::BLACK_SHORT,
        }
    }

    /// The queenside right of a side.
    #[inline(always)]
    pub fn long(side: Color) -> Self {
        match side {
            Color::White => Castles::WHITE_LONG,
            Color::Black => Castles::BLACK_LONG,
        }
    }

    /// The rights lost when a piece moves from or onto the given [`Position`].
    pub fn revoked_by(p: Position) -> Self {
        match (p.row(), p.col()) {
            (0, 0) => Castles::WHITE_LONG,
            (0, 7) => Castles::WHITE_SHORT,
            (0, 4) => Castles::WHITE_LONG | Castles::WHITE_SHORT,
            (7, 0) => Castles::BLACK_LONG,
            (7, 7) => Castles::BLACK_SHORT,
            (7, 4) => Castles::BLACK_LONG | Castles::BLACK_SHORT,
            _ => Castles::empty(),
        }
    }
}

impl Default for Castles {
    #[inline(always)]
    fn default() -> Self {
        Castles::all()
    }
}

/// Prints the rights as in [FEN].
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Castles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }

        for (right, symbol) in [
            (Castles::WHITE_SHORT, "K"),
            (Castles::WHITE_LONG, "Q"),
            (Castles::BLACK_SHORT, "k"),
            (Castles::BLACK_LONG, "q"),
        ] {
            if self.contains(right) {
                f.write_str(symbol)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Castles`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse castling rights")]
pub struct ParseCastlesError;

impl FromStr for Castles {
    type Err = ParseCastlesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Castles::empty());
        } else if s.is_empty() {
            return Err(ParseCastlesError);
        }

        let mut castles = Castles::empty();

        for c in s.chars() {
            let right = match c {
                'K' => Castles::WHITE_SHORT,
                'Q' => Castles::WHITE_LONG,
                'k' => Castles::BLACK_SHORT,
                'q' => Castles::BLACK_LONG,
                _ => return Err(ParseCastlesError),
            };

            if castles.contains(right) {
                return Err(ParseCastlesError);
            }

            castles |= right;
        }

        Ok(castles)
    }
}
