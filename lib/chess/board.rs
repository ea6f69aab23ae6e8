use crate::chess::{Castles, Color, Move, Piece, Position, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The chess board.
///
/// Holds at most one [`Piece`] per square, along with the side to move and the state
/// that the rules of chess carry from one move to the next.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
    castles: Castles,
    en_passant: Option<Position>,
    halfmoves: u16,
    fullmoves: u32,
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        use Role::*;

        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        board.castles = Castles::all();

        for p in Position::iter() {
            for color in Color::iter() {
                if p.row() == color.home_row() {
                    board.put(Piece::new(BACK[p.col() as usize], color, p));
                } else if p.row() == color.pawn_row() {
                    board.put(Piece::new(Pawn, color, p));
                }
            }
        }

        board
    }
}

impl Board {
    /// A board without any pieces, castling rights, or en passant square, white to move.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            turn: Color::White,
            castles: Castles::empty(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The castling rights.
    #[inline(always)]
    pub fn castles(&self) -> Castles {
        self.castles
    }

    /// The square skipped by a pawn that just advanced two rows, if any.
    #[inline(always)]
    pub fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    /// The number of halfmoves since the last capture or pawn advance.
    #[inline(always)]
    pub fn halfmoves(&self) -> u16 {
        self.halfmoves
    }

    /// The current move number, starting at 1 and incremented after every move by black.
    #[inline(always)]
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// The [`Piece`] on the given [`Position`], if any.
    #[inline(always)]
    pub fn piece_at(&self, p: Position) -> Option<Piece> {
        self.squares[p.row() as usize][p.col() as usize]
    }

    /// Places a [`Piece`] on the board, returning the piece it displaced, if any.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let displaced = self.remove(piece.position());
        self.put(piece);
        displaced
    }

    /// Removes the [`Piece`] on the given [`Position`], if any.
    pub fn remove(&mut self, p: Position) -> Option<Piece> {
        self.squares[p.row() as usize][p.col() as usize].take()
    }

    #[inline(always)]
    fn put(&mut self, piece: Piece) {
        let p = piece.position();
        self.squares[p.row() as usize][p.col() as usize] = Some(piece);
    }

    /// An iterator over all pieces on the board, ordered by position.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn pieces_of(&self, side: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == side)
    }

    /// The [`Position`] of the king of a [`Color`], if any.
    pub fn king_position(&self, side: Color) -> Option<Position> {
        self.pieces_of(side)
            .find(|p| p.role() == Role::King)
            .map(|p| p.position())
    }

    /// Whether every square strictly between two positions is empty.
    ///
    /// Returns `None` unless both positions lie on the same row, column or diagonal.
    pub fn is_path_clear(&self, from: Position, to: Position) -> Option<bool> {
        let (rows, cols) = from.step_towards(to)?;
        let mut path = from;

        loop {
            path = path.offset(rows, cols)?;
            if path == to {
                return Some(true);
            } else if self.piece_at(path).is_some() {
                return Some(false);
            }
        }
    }

    /// Plays a [`Move`] on this board.
    ///
    /// The move is executed as given, it is up to the caller to make sure it is legal.
    pub fn apply_move(&mut self, m: &Move) {
        let piece = m.piece();
        let (from, to) = (m.from(), m.to());

        self.remove(from);

        if let Some(captured) = m.captured() {
            self.remove(captured.position());
        }

        if let Some((whence, whither)) = m.castling_rook() {
            if let Some(rook) = self.remove(whence) {
                self.put(rook.relocate(whither));
            }
        }

        let moved = match m.promotion() {
            Some(r) => piece.promote(r),
            None => piece,
        };

        self.put(moved.relocate(to));

        self.castles &= !(Castles::revoked_by(from) | Castles::revoked_by(to));

        let is_pawn = piece.role() == Role::Pawn;
        self.en_passant = match (is_pawn, to.row() as i8 - from.row() as i8) {
            (true, 2 | -2) => from.offset(piece.color().forward(), 0),
            _ => None,
        };

        if is_pawn || m.is_capture() {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }

        if piece.color() == Color::Black {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }

        self.turn = !piece.color();
    }

    /// A copy of this board after a [`Move`] is applied, leaving this board untouched.
    pub fn after(&self, m: &Move) -> Board {
        let mut next = self.clone();
        next.apply_move(m);
        next
    }
}

/// Retrieves the [`Piece`] at a given [`Position`], if any.
impl Index<Position> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, p: Position) -> &Self::Output {
        &self.squares[p.row() as usize][p.col() as usize]
    }
}

/// Prints the board in [FEN].
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate().rev() {
            let mut skip = 0;

            for square in row {
                match square {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{skip}")?;
                            skip = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{skip}")?;
            }

            f.write_char(if i > 0 { '/' } else { ' ' })?;
        }

        match self.turn {
            Color::White => f.write_str("w ")?,
            Color::Black => f.write_str("b ")?,
        }

        write!(f, "{} ", self.castles)?;

        match self.en_passant {
            Some(ep) => write!(f, "{ep} ")?,
            None => f.write_str("- ")?,
        }

        write!(f, "{} {}", self.halfmoves, self.fullmoves)
    }
}

/// The reason why parsing the FEN string failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseFenError {
    #[display(fmt = "failed to parse piece placement")]
    InvalidPlacement,
    #[display(fmt = "failed to parse side to move")]
    InvalidSideToMove,
    #[display(fmt = "failed to parse castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "failed to parse en passant square")]
    InvalidEnPassantSquare,
    #[display(fmt = "failed to parse halfmove clock")]
    InvalidHalfmoveClock,
    #[display(fmt = "failed to parse fullmove number")]
    InvalidFullmoveNumber,
    #[display(fmt = "unspecified syntax error")]
    InvalidSyntax,
}

/// Parses a board in [FEN], the move counters may be omitted.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split(' ').collect();
        let (placement, turn, castles, en_passant, halfmoves, fullmoves) = match &fields[..] {
            [p, t, c, ep] => (*p, *t, *c, *ep, "0", "1"),
            [p, t, c, ep, h, f] => (*p, *t, *c, *ep, *h, *f),
            _ => return Err(ParseFenError::InvalidSyntax),
        };

        let rows: Vec<_> = placement.split('/').rev().collect();
        if rows.len() != 8 {
            return Err(ParseFenError::InvalidPlacement);
        }

        let mut board = Board::empty();
        for (row, segment) in (0i8..).zip(rows) {
            let mut col = 0i8;
            for c in segment.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as i8;
                } else {
                    let p = Position::new(row, col).map_err(|_| ParseFenError::InvalidPlacement)?;
                    let piece =
                        Piece::from_symbol(c, p).map_err(|_| ParseFenError::InvalidPlacement)?;
                    board.put(piece);
                    col += 1;
                }

                if col > Position::SIZE {
                    return Err(ParseFenError::InvalidPlacement);
                }
            }

            if col != Position::SIZE {
                return Err(ParseFenError::InvalidPlacement);
            }
        }

        board.turn = match turn {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(ParseFenError::InvalidSideToMove),
        };

        board.castles = castles
            .parse()
            .map_err(|_| ParseFenError::InvalidCastlingRights)?;

        // The square skipped by the double step of the side that just moved.
        let mover = !board.turn;
        let skipped = mover.pawn_row() as i8 + mover.forward();
        board.en_passant = match en_passant {
            "-" => None,
            ep => match ep.parse::<Position>() {
                Ok(p) if p.row() as i8 == skipped => Some(p),
                _ => return Err(ParseFenError::InvalidEnPassantSquare),
            },
        };

        let Ok(halfmoves) = halfmoves.parse() else {
            return Err(ParseFenError::InvalidHalfmoveClock);
        };

        let Ok(fullmoves) = fullmoves.parse() else {
            return Err(ParseFenError::InvalidFullmoveNumber);
        };

        board.halfmoves = halfmoves;
        board.fullmoves = fullmoves;

        Ok(board)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::chess::validator;
        use proptest::{prelude::*, sample::Selector};

        (0..48usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut board = Board::default();

                for _ in 0..plies {
                    let moves = validator::all_legal_moves(&board, board.turn());
                    match selector.try_select(moves) {
                        None => break,
                        Some(m) => board.apply_move(&m),
                    }
                }

                board
            })
            .boxed()
    }
}
