use super::Moves;
use crate::chess::{Board, Move, MoveKind, Piece, Position, Role};

pub fn moves(board: &Board, piece: Piece) -> Moves {
    let mut moves = Moves::new();
    let color = piece.color();
    let from = piece.position();

    if let Some(one) = from.offset(color.forward(), 0).filter(|&p| board[p].is_none()) {
        advance(&mut moves, piece, one, None);

        if from.row() == color.pawn_row() {
            if let Some(two) = one.offset(color.forward(), 0).filter(|&p| board[p].is_none()) {
                moves.push(Move::unchecked(piece, two, MoveKind::Normal));
            }
        }
    }

    for cols in [-1, 1] {
        let Some(to) = from.offset(color.forward(), cols) else {
            continue;
        };

        match board[to] {
            Some(p) if p.is_enemy_of(&piece) && p.role() != Role::King => {
                advance(&mut moves, piece, to, Some(p));
            }

            None if board.en_passant() == Some(to) && to.row() != color.promotion_row() => {
                let beside = from.offset(0, cols).and_then(|p| board[p]);
                if let Some(p) = beside.filter(|p| p.is_enemy_of(&piece) && p.role() == Role::Pawn) {
                    moves.push(Move::unchecked(piece, to, MoveKind::EnPassant(p)));
                }
            }

            _ => {}
        }
    }

    moves
}

/// Pushes a pawn move, or all four promotions if it reaches the last row.
fn advance(moves: &mut Moves, piece: Piece, to: Position, captured: Option<Piece>) {
    if to.row() == piece.color().promotion_row() {
        for r in Role::PROMOTIONS {
            moves.push(Move::unchecked(piece, to, MoveKind::Promotion(r, captured)));
        }
    } else if let Some(c) = captured {
        moves.push(Move::unchecked(piece, to, MoveKind::Capture(c)));
    } else {
        moves.push(Move::unchecked(piece, to, MoveKind::Normal));
    }
}

pub fn attacks(piece: Piece, target: Position) -> bool {
    let rows = target.row() as i8 - piece.position().row() as i8;
    let cols = target.col() as i8 - piece.position().col() as i8;
    rows == piece.color().forward() && cols.abs() == 1
}
