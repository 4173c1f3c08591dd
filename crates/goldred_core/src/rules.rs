use crate::board::Position;
use crate::types::*;
use std::collections::HashSet;

/// Full legality predicate: the mover owns the origin piece, the
/// destination is takeable, the piece geometry allows the move, and the
/// mover's own king is safe afterwards. The king-safety probe runs on a
/// scratch clone; the live position is never touched.
pub fn is_legal_move(pos: &Position, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let piece = match pos.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    if piece.color != pos.side_to_move {
        return false;
    }
    if let Some(target) = pos.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
        // Kings are never capturable; the game ends by checkmate before
        // any position where this could otherwise be reached.
        if target.kind == PieceKind::King {
            return false;
        }
    }
    if !geometry_allows(pos, from, to, piece) {
        return false;
    }

    let mut scratch = pos.clone();
    scratch.apply_move(from, to);
    !scratch.in_check(piece.color)
}

/// Every square `attempt_move` would accept from `from`. Used by
/// frontends to highlight reachable squares.
pub fn legal_destinations(pos: &Position, from: Square) -> HashSet<Square> {
    all_squares()
        .filter(|&to| is_legal_move(pos, from, to))
        .collect()
}

/// Checkmate test for `color`: in check with no legal move that resolves
/// it. Exhaustive over all (from, to) pairs; fine for an 8x8 board.
pub fn is_checkmate(pos: &Position, color: Color) -> bool {
    if !pos.in_check(color) {
        return false;
    }
    let mut scratch = pos.clone();
    scratch.side_to_move = color;
    for from in all_squares() {
        match scratch.piece_at(from) {
            Some(p) if p.color == color => {}
            _ => continue,
        }
        for to in all_squares() {
            if is_legal_move(&scratch, from, to) {
                return false;
            }
        }
    }
    true
}

fn geometry_allows(pos: &Position, from: Square, to: Square, piece: Piece) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move_allowed(pos, from, to, piece.color),
        PieceKind::Rook => rook_move_allowed(pos, from, to),
        PieceKind::Knight => knight_move_allowed(from, to),
        PieceKind::Bishop => bishop_move_allowed(pos, from, to),
        PieceKind::Queen => {
            rook_move_allowed(pos, from, to) || bishop_move_allowed(pos, from, to)
        }
        PieceKind::King => king_move_allowed(from, to),
    }
}

fn pawn_move_allowed(pos: &Position, from: Square, to: Square, color: Color) -> bool {
    let dir: i8 = match color {
        Color::Gold => -1,
        Color::Red => 1,
    };
    let home_row: i8 = match color {
        Color::Gold => 6,
        Color::Red => 1,
    };

    // Forward pushes need empty squares all the way.
    if from.col() == to.col() && pos.piece_at(to).is_none() {
        if to.row() == from.row() + dir {
            return true;
        }
        if from.row() == home_row
            && to.row() == from.row() + 2 * dir
            && let Some(mid) = Square::new(from.row() + dir, from.col())
            && pos.piece_at(mid).is_none()
        {
            return true;
        }
    }

    // Diagonal step: a regular capture, or the en-passant target with the
    // victim pawn sitting level with the origin.
    if (from.col() - to.col()).abs() == 1 && to.row() == from.row() + dir {
        if let Some(target) = pos.piece_at(to) {
            return target.color != color;
        }
        if pos.en_passant == Some(to)
            && let Some(beside) = Square::new(from.row(), to.col())
            && let Some(victim) = pos.piece_at(beside)
        {
            return victim.kind == PieceKind::Pawn && victim.color != color;
        }
    }

    false
}

fn rook_move_allowed(pos: &Position, from: Square, to: Square) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    path_clear(pos, from, to)
}

fn bishop_move_allowed(pos: &Position, from: Square, to: Square) -> bool {
    if (from.row() - to.row()).abs() != (from.col() - to.col()).abs() {
        return false;
    }
    path_clear(pos, from, to)
}

fn knight_move_allowed(from: Square, to: Square) -> bool {
    let dr = (from.row() - to.row()).abs();
    let dc = (from.col() - to.col()).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn king_move_allowed(from: Square, to: Square) -> bool {
    (from.row() - to.row()).abs() <= 1 && (from.col() - to.col()).abs() <= 1
}

/// Walk the unit step vector from just past `from` up to (exclusive) `to`;
/// any occupied intermediate square blocks the move.
fn path_clear(pos: &Position, from: Square, to: Square) -> bool {
    let dr = (to.row() - from.row()).signum();
    let dc = (to.col() - from.col()).signum();
    let mut r = from.row() + dr;
    let mut c = from.col() + dc;
    while (r, c) != (to.row(), to.col()) {
        match Square::new(r, c) {
            Some(s) if pos.piece_at(s).is_none() => {}
            _ => return false,
        }
        r += dr;
        c += dc;
    }
    true
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
