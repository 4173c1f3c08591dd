use std::fmt;

/// Side identifier. Gold sits on rows 6-7 and moves toward row 0,
/// Red sits on rows 0-1 and moves toward row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Gold,
    Red,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Gold => Color::Red,
            Color::Red => Color::Gold,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Gold => write!(f, "Gold"),
            Color::Red => write!(f, "Red"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate. Row 0 is Red's home rank (rank 8 in algebraic terms),
/// row 7 is Gold's. Only in-bounds squares are constructible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub(crate) fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    /// Parse "e4"-style input. Anything malformed or out of bounds is None.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        let col = (b[0] - b'a') as i8;
        let row = 7 - (b[1] - b'1') as i8;
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

/// Iterate every square of the board, row 0 first.
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..8).flat_map(|row| (0..8).filter_map(move |col| Square::new(row, col)))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
