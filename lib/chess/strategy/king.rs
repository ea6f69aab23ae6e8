use super::{occupy, Moves};
use crate::chess::{Board, Castles, Move, MoveKind, Piece, Position, Role};

const STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn moves(board: &Board, piece: Piece) -> Moves {
    let mut moves: Moves = STEPS
        .iter()
        .filter_map(|&(rows, cols)| piece.position().offset(rows, cols))
        .filter_map(|to| occupy(board, piece, to))
        .collect();

    let side = piece.color();
    let from = piece.position();
    let row = side.home_row() as i8;

    if (from.row(), from.col()) != (side.home_row(), 4) {
        return moves;
    }

    for (right, corner, target) in [(Castles::short(side), 7, 6), (Castles::long(side), 0, 2)] {
        if !board.castles().contains(right) {
            continue;
        }

        let (Ok(corner), Ok(to)) = (Position::new(row, corner), Position::new(row, target)) else {
            continue;
        };

        let has_rook = matches!(board[corner], Some(r) if r.role() == Role::Rook && r.color() == side);
        if has_rook && board.is_path_clear(from, corner) == Some(true) {
            moves.push(Move::unchecked(piece, to, MoveKind::Castle));
        }
    }

    moves
}

pub fn attacks(piece: Piece, target: Position) -> bool {
    let rows = (target.row() as i8 - piece.position().row() as i8).abs();
    let cols = (target.col() as i8 - piece.position().col() as i8).abs();
    rows.max(cols) == 1
}
