use crate::chess::strategy::{attacks, pseudo_legal_moves};
use crate::chess::{Board, Color, Move, MoveType, Piece, Position, Role};

/// Whether any piece of the given [`Color`] attacks the [`Position`].
pub fn is_attacked(board: &Board, square: Position, by: Color) -> bool {
    board.pieces_of(by).any(|p| attacks(board, p, square))
}

/// Whether the king of the given [`Color`] is attacked.
pub fn is_check(board: &Board, side: Color) -> bool {
    match board.king_position(side) {
        Some(king) => is_attacked(board, king, !side),
        None => false,
    }
}

/// Whether playing the [`Move`] would leave the mover's king attacked.
///
/// The move is simulated on a copy of the [`Board`].
pub fn leaves_king_attacked(board: &Board, m: &Move) -> bool {
    is_check(&board.after(m), m.color())
}

/// Whether the [`Move`] castles out of check or across an attacked square.
pub fn castles_through_check(board: &Board, m: &Move) -> bool {
    if m.move_type() != MoveType::Castle {
        return false;
    }

    let enemy = !m.color();
    is_attacked(board, m.from(), enemy)
        || m.castling_path()
            .map_or(true, |p| is_attacked(board, p, enemy))
}

/// Whether a pseudo-legal [`Move`] is legal.
pub fn is_legal(board: &Board, m: &Move) -> bool {
    !castles_through_check(board, m) && !leaves_king_attacked(board, m)
}

/// The legal moves of a [`Piece`].
pub fn legal_moves(board: &Board, piece: Piece) -> Vec<Move> {
    pseudo_legal_moves(board, piece)
        .into_iter()
        .filter(|m| is_legal(board, m))
        .collect()
}

/// The legal moves of every piece of a [`Color`].
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|p| legal_moves(board, p))
        .collect()
}

/// Whether any piece of the given [`Color`] has a legal move.
pub fn has_legal_moves(board: &Board, side: Color) -> bool {
    board.pieces_of(side).any(|p| {
        pseudo_legal_moves(board, p)
            .iter()
            .any(|m| is_legal(board, m))
    })
}

/// Whether the given [`Color`] is in check and has no legal move.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    is_check(board, side) && !has_legal_moves(board, side)
}

/// Whether the given [`Color`] is not in check but has no legal move.
pub fn is_stalemate(board: &Board, side: Color) -> bool {
    !is_check(board, side) && !has_legal_moves(board, side)
}

/// Whether neither side has enough material left to ever deliver mate.
///
/// That is the case for king against king, king and a minor piece against king, and for
/// positions where the only pieces besides kings are bishops all on squares of the same shade.
pub fn is_material_insufficient(board: &Board) -> bool {
    let mut shades = Vec::new();
    let mut minors = 0;

    for p in board.pieces() {
        match p.role() {
            Role::King => {}
            Role::Knight => minors += 1,
            Role::Bishop => {
                minors += 1;
                shades.push(p.position().is_light());
            }
            _ => return false,
        }
    }

    minors <= 1 || (shades.len() == minors && shades.windows(2).all(|w| w[0] == w[1]))
}
