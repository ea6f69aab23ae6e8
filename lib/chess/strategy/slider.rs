use super::{occupy, Moves};
use crate::chess::{Board, Piece, Position};

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const OMNIDIRECTIONAL: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walks every direction until the edge of the board or the first piece in the way.
pub fn moves(board: &Board, piece: Piece, directions: &[(i8, i8)]) -> Moves {
    let mut moves = Moves::new();

    for &(rows, cols) in directions {
        let mut to = piece.position();
        while let Some(next) = to.offset(rows, cols) {
            to = next;
            moves.extend(occupy(board, piece, to));
            if board[to].is_some() {
                break;
            }
        }
    }

    moves
}

pub fn attacks(board: &Board, piece: Piece, directions: &[(i8, i8)], target: Position) -> bool {
    match piece.position().step_towards(target) {
        Some(step) if directions.contains(&step) => {
            board.is_path_clear(piece.position(), target) == Some(true)
        }
        _ => false,
    }
}
