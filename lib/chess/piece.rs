use crate::chess::{Color, Position, Role};
use derive_more::{Constructor, Display, Error};
use std::fmt;

/// A chess [piece][`Role`] of a certain [`Color`] standing on a [`Position`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
    position: Position,
}

impl Piece {
    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Position`].
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The same piece standing on another [`Position`].
    #[inline(always)]
    pub(crate) fn relocate(self, position: Position) -> Self {
        Piece { position, ..self }
    }

    /// The same piece with another [`Role`].
    #[inline(always)]
    pub(crate) fn promote(self, role: Role) -> Self {
        Piece { role, ..self }
    }

    /// Whether the other piece belongs to the opponent.
    #[inline(always)]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

/// Prints the piece as in [FEN], upper case for white and lower case for black.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_str(&self.role.to_string().to_ascii_uppercase()),
            Color::Black => fmt::Display::fmt(&self.role, f),
        }
    }
}

/// The reason why parsing a [`Piece`] symbol failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `PNBRQKpnbrqk`")]
pub struct ParsePieceError;

impl Piece {
    /// Parses a piece symbol as in [FEN] and places it on the given [`Position`].
    ///
    /// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_symbol(c: char, position: Position) -> Result<Self, ParsePieceError> {
        let mut buffer = [0; 4];
        let lower = c.to_ascii_lowercase();
        let role = lower
            .encode_utf8(&mut buffer)
            .parse::<Role>()
            .map_err(|_| ParsePieceError)?;

        let color = if c == lower { Color::Black } else { Color::White };
        Ok(Piece::new(role, color, position))
    }
}
