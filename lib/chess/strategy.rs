use crate::chess::{Board, Move, MoveKind, Piece, Position, Role};
use arrayvec::ArrayVec;

mod king;
mod knight;
mod pawn;
mod slider;

/// The pseudo-legal moves of a single piece.
pub type Moves = ArrayVec<Move, 32>;

/// The moves of a piece that follow its movement pattern and respect the occupancy of the
/// [`Board`], whether or not they leave its own king attacked.
pub fn pseudo_legal_moves(board: &Board, piece: Piece) -> Moves {
    match piece.role() {
        Role::Pawn => pawn::moves(board, piece),
        Role::Knight => knight::moves(board, piece),
        Role::Bishop => slider::moves(board, piece, &slider::DIAGONAL),
        Role::Rook => slider::moves(board, piece, &slider::ORTHOGONAL),
        Role::Queen => slider::moves(board, piece, &slider::OMNIDIRECTIONAL),
        Role::King => king::moves(board, piece),
    }
}

/// Whether some pseudo-legal move takes the piece to the given [`Position`].
pub fn can_move(board: &Board, piece: Piece, to: Position) -> bool {
    pseudo_legal_moves(board, piece)
        .iter()
        .any(|m| m.to() == to)
}

/// Whether the piece could capture on the given [`Position`] if an enemy stood there.
///
/// Unlike [`pseudo_legal_moves`], pawns only attack diagonally and kings never castle,
/// which makes this suitable for detecting checks.
pub fn attacks(board: &Board, piece: Piece, target: Position) -> bool {
    match piece.role() {
        Role::Pawn => pawn::attacks(piece, target),
        Role::Knight => knight::attacks(piece, target),
        Role::Bishop => slider::attacks(board, piece, &slider::DIAGONAL, target),
        Role::Rook => slider::attacks(board, piece, &slider::ORTHOGONAL, target),
        Role::Queen => slider::attacks(board, piece, &slider::OMNIDIRECTIONAL, target),
        Role::King => king::attacks(piece, target),
    }
}

/// The move of a piece onto a square, as long as a friend or a king does not stand there.
fn occupy(board: &Board, piece: Piece, to: Position) -> Option<Move> {
    match board[to] {
        None => Some(Move::unchecked(piece, to, MoveKind::Normal)),
        Some(p) if p.is_enemy_of(&piece) && p.role() != Role::King => {
            Some(Move::unchecked(piece, to, MoveKind::Capture(p)))
        }
        Some(_) => None,
    }
}
