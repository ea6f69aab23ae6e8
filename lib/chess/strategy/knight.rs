use super::{occupy, Moves};
use crate::chess::{Board, Piece, Position};

const JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn moves(board: &Board, piece: Piece) -> Moves {
    JUMPS
        .iter()
        .filter_map(|&(rows, cols)| piece.position().offset(rows, cols))
        .filter_map(|to| occupy(board, piece, to))
        .collect()
}

pub fn attacks(piece: Piece, target: Position) -> bool {
    let rows = (target.row() as i8 - piece.position().row() as i8).abs();
    let cols = (target.col() as i8 - piece.position().col() as i8).abs();
    matches!((rows, cols), (1, 2) | (2, 1))
}
