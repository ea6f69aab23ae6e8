use crate::chess::{Color, Piece, Position, Role};
use derive_more::{Display, Error};
use std::fmt;

/// What happens to the board besides the moving piece changing squares.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveKind {
    /// The piece moves onto an empty square.
    Normal,
    /// The piece takes an enemy on the destination square.
    Capture(Piece),
    /// The king moves two squares towards a rook, which jumps over it.
    Castle,
    /// A pawn takes the enemy pawn beside it, which just advanced two squares.
    EnPassant(Piece),
    /// A pawn reaches its last row and is replaced, possibly taking an enemy.
    Promotion(Role, Option<Piece>),
}

/// The type of a [`Move`], stripped of its payload.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveType {
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "capture")]
    Capture,
    #[display(fmt = "castle")]
    Castle,
    #[display(fmt = "en passant")]
    EnPassant,
    #[display(fmt = "promotion")]
    Promotion,
}

/// The reason why a [`Move`] could not be constructed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MalformedMove {
    #[display(fmt = "the piece does not leave its square")]
    Stationary,
    #[display(fmt = "the captured piece is not where the move takes it")]
    MisplacedCapture,
    #[display(fmt = "the captured piece is not an enemy")]
    FriendlyCapture,
    #[display(fmt = "kings are never captured")]
    KingCapture,
    #[display(fmt = "only a king on its home square castles, two squares along its row")]
    InvalidCastle,
    #[display(fmt = "only a pawn takes en passant, diagonally forward onto the skipped square")]
    InvalidEnPassant,
    #[display(fmt = "only a pawn reaching its last row promotes, to a queen, rook, bishop or knight")]
    InvalidPromotion,
    #[display(fmt = "a pawn reaching its last row must promote")]
    MissingPromotion,
}

/// A chess move.
///
/// Holds the [`Piece`] as it stood before moving, where it goes, and what [kind][`MoveKind`]
/// of move it is. Moves are plain values, applying one is up to the [`Board`][`crate::chess::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    piece: Piece,
    to: Position,
    kind: MoveKind,
}

impl Move {
    /// Constructs a [`Move`] if its parts are consistent with each other.
    pub fn new(piece: Piece, to: Position, kind: MoveKind) -> Result<Self, MalformedMove> {
        Self::validate(&piece, to, &kind)?;
        Ok(Move { piece, to, kind })
    }

    /// Constructs a [`Move`] known to be consistent.
    #[inline(always)]
    pub(crate) fn unchecked(piece: Piece, to: Position, kind: MoveKind) -> Self {
        debug_assert_eq!(Self::validate(&piece, to, &kind), Ok(()));
        Move { piece, to, kind }
    }

    fn validate(piece: &Piece, to: Position, kind: &MoveKind) -> Result<(), MalformedMove> {
        let from = piece.position();
        let rows = to.row() as i8 - from.row() as i8;
        let cols = to.col() as i8 - from.col() as i8;
        let is_pawn = piece.role() == Role::Pawn;
        let is_last_row = to.row() == piece.color().promotion_row();

        if from == to {
            return Err(MalformedMove::Stationary);
        }

        let captured = match *kind {
            MoveKind::Normal | MoveKind::Castle => None,
            MoveKind::Capture(c) | MoveKind::Promotion(_, Some(c)) => {
                if c.position() != to {
                    return Err(MalformedMove::MisplacedCapture);
                }

                Some(c)
            }

            MoveKind::EnPassant(c) => {
                if !is_pawn || rows != piece.color().forward() || cols.abs() != 1 {
                    return Err(MalformedMove::InvalidEnPassant);
                } else if c.role() != Role::Pawn {
                    return Err(MalformedMove::InvalidEnPassant);
                } else if (c.position().row(), c.position().col()) != (from.row(), to.col()) {
                    return Err(MalformedMove::MisplacedCapture);
                }

                Some(c)
            }

            MoveKind::Promotion(_, None) => None,
        };

        if let Some(c) = captured {
            if !c.is_enemy_of(piece) {
                return Err(MalformedMove::FriendlyCapture);
            } else if c.role() == Role::King {
                return Err(MalformedMove::KingCapture);
            }
        }

        match *kind {
            MoveKind::Castle => {
                let home = (piece.color().home_row(), 4);
                if piece.role() != Role::King
                    || (from.row(), from.col()) != home
                    || rows != 0
                    || cols.abs() != 2
                {
                    return Err(MalformedMove::InvalidCastle);
                }
            }

            MoveKind::Promotion(r, _) => {
                if !is_pawn || !is_last_row || !r.is_promotion() {
                    return Err(MalformedMove::InvalidPromotion);
                }
            }

            MoveKind::Normal | MoveKind::Capture(_) => {
                if is_pawn && is_last_row {
                    return Err(MalformedMove::MissingPromotion);
                }
            }

            MoveKind::EnPassant(_) => {
                if is_last_row {
                    return Err(MalformedMove::InvalidEnPassant);
                }
            }
        }

        Ok(())
    }

    /// The piece as it stands before the move.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The source [`Position`].
    #[inline(always)]
    pub fn from(&self) -> Position {
        self.piece.position()
    }

    /// The destination [`Position`].
    #[inline(always)]
    pub fn to(&self) -> Position {
        self.to
    }

    /// The [`Color`] of the side making this move.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    /// What this move does besides relocating the piece.
    #[inline(always)]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The [`MoveType`] of this move.
    #[inline(always)]
    pub fn move_type(&self) -> MoveType {
        match self.kind {
            MoveKind::Normal => MoveType::Normal,
            MoveKind::Capture(_) => MoveType::Capture,
            MoveKind::Castle => MoveType::Castle,
            MoveKind::EnPassant(_) => MoveType::EnPassant,
            MoveKind::Promotion(..) => MoveType::Promotion,
        }
    }

    /// The enemy taken by this move, if any.
    #[inline(always)]
    pub fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture(c) | MoveKind::EnPassant(c) | MoveKind::Promotion(_, Some(c)) => {
                Some(c)
            }
            _ => None,
        }
    }

    /// Whether this move takes an enemy.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    /// The [`Role`] the pawn is promoted to, if any.
    #[inline(always)]
    pub fn promotion(&self) -> Option<Role> {
        match self.kind {
            MoveKind::Promotion(r, _) => Some(r),
            _ => None,
        }
    }

    /// Where the rook starts and ends, if this move is castling.
    pub fn castling_rook(&self) -> Option<(Position, Position)> {
        if self.kind != MoveKind::Castle {
            return None;
        }

        let row = self.to.row() as i8;
        if self.to.col() > self.from().col() {
            Some((Position::new(row, 7).ok()?, Position::new(row, 5).ok()?))
        } else {
            Some((Position::new(row, 0).ok()?, Position::new(row, 3).ok()?))
        }
    }

    /// The square the castling king crosses on its way, if this move is castling.
    pub fn castling_path(&self) -> Option<Position> {
        self.castling_rook().map(|(_, rook)| rook)
    }
}

/// Prints the move in [long algebraic notation], as used by UCI.
///
/// [long algebraic notation]: https://en.wikipedia.org/wiki/Algebraic_notation_(chess)#Long_algebraic_notation
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to)?;

        if let Some(r) = self.promotion() {
            write!(f, "{r}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Move {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::chess::{validator, Board};
        use proptest::{prelude::*, sample::Selector};

        (any::<Board>(), any::<Selector>())
            .prop_filter_map("end of the game", |(b, selector)| {
                selector.try_select(validator::all_legal_moves(&b, b.turn()))
            })
            .boxed()
    }
}
