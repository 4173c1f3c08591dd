use crate::types::*;

/// Live board state: piece placement, side to move, and the en-passant
/// target square (the square skipped by the immediately preceding double
/// pawn advance, if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub en_passant: Option<Square>,
}

/// Board side effects of one applied move, reported back to the executor
/// so it can build the move description.
#[derive(Clone, Copy, Debug)]
pub struct MoveEffects {
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub en_passant_capture: bool,
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::Gold,
            en_passant: None,
        }
    }

    /// Standard initial placement: Red's back rank on row 0, pawns on
    /// row 1; Gold's pawns on row 6, back rank on row 7. Gold moves first.
    pub fn start() -> Self {
        let mut p = Position::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            p.set_piece(Square::new(0, col).unwrap(), Some(Piece::new(Color::Red, kind)));
            p.set_piece(Square::new(7, col).unwrap(), Some(Piece::new(Color::Gold, kind)));
            p.set_piece(
                Square::new(1, col).unwrap(),
                Some(Piece::new(Color::Red, PieceKind::Pawn)),
            );
            p.set_piece(
                Square::new(6, col).unwrap(),
                Some(Piece::new(Color::Gold, PieceKind::Pawn)),
            );
        }
        p
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.index()] = pc;
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        all_squares().find(|&sq| {
            self.piece_at(sq) == Some(Piece::new(c, PieceKind::King))
        })
    }

    pub fn in_check(&self, c: Color) -> bool {
        let Some(ksq) = self.king_square(c) else {
            // Unreachable through the public API: no legal destination may
            // hold a king, so one of each color is always on the board.
            return false;
        };
        self.is_square_attacked(ksq, c.opponent())
    }

    /// Does any piece of `by` attack `target`? Pure geometry plus path
    /// clearance, radiating outward from the target square. Pawn attacks
    /// are the forward diagonals regardless of what occupies the target.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let tr = target.row();
        let tc = target.col();

        // Pawns: a Gold pawn attacks toward row 0, so it sits one row
        // below the target in board terms; Red the other way round.
        let pawn_row = match by {
            Color::Gold => tr + 1,
            Color::Red => tr - 1,
        };
        for dc in [-1, 1] {
            if let Some(s) = Square::new(pawn_row, tc + dc)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        let knight = [
            (1, 2),
            (2, 1),
            (-1, 2),
            (-2, 1),
            (1, -2),
            (2, -1),
            (-1, -2),
            (-2, -1),
        ];
        for (dr, dc) in knight {
            if let Some(s) = Square::new(tr + dr, tc + dc)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Knight
            {
                return true;
            }
        }

        let king = [
            (1, 1),
            (1, 0),
            (1, -1),
            (0, 1),
            (0, -1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        for (dr, dc) in king {
            if let Some(s) = Square::new(tr + dr, tc + dc)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::King
            {
                return true;
            }
        }

        // Sliders: walk each ray until the first occupied square.
        let diag = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
        let ortho = [(1, 0), (-1, 0), (0, 1), (0, -1)];

        for (dr, dc) in diag {
            let mut r = tr + dr;
            let mut c = tc + dc;
            while let Some(s) = Square::new(r, c) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by
                        && (pc.kind == PieceKind::Bishop || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }
        for (dr, dc) in ortho {
            let mut r = tr + dr;
            let mut c = tc + dc;
            while let Some(s) = Square::new(r, c) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by
                        && (pc.kind == PieceKind::Rook || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        false
    }

    /// Apply an already-validated move to the board: en-passant victim
    /// removal, the piece move itself (captures by overwrite), and the
    /// en-passant target recomputation. Does NOT advance the side to move;
    /// the executor owns turn advancement so promotion can defer it.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveEffects {
        let piece = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let mut en_passant_capture = false;

        // En-passant capture removes the pawn that sits level with the
        // origin, in the destination column.
        if piece.kind == PieceKind::Pawn
            && self.en_passant == Some(to)
            && let Some(victim_sq) = Square::new(from.row(), to.col())
        {
            captured = self.piece_at(victim_sq);
            self.set_piece(victim_sq, None);
            en_passant_capture = true;
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(piece));

        // A double pawn advance arms the target for exactly one reply;
        // every other move clears it.
        self.en_passant = None;
        if piece.kind == PieceKind::Pawn && (from.row() - to.row()).abs() == 2 {
            self.en_passant = Square::new((from.row() + to.row()) / 2, from.col());
        }

        MoveEffects {
            piece,
            captured,
            en_passant_capture,
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
