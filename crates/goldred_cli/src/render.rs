use crate::settings::DisplaySettings;
use colored::Colorize;
use goldred_core::{Color, Game, Piece, PieceKind, Square};

fn unicode_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Gold, PieceKind::King) => '♔',
        (Color::Gold, PieceKind::Queen) => '♕',
        (Color::Gold, PieceKind::Rook) => '♖',
        (Color::Gold, PieceKind::Bishop) => '♗',
        (Color::Gold, PieceKind::Knight) => '♘',
        (Color::Gold, PieceKind::Pawn) => '♙',
        (Color::Red, PieceKind::King) => '♚',
        (Color::Red, PieceKind::Queen) => '♛',
        (Color::Red, PieceKind::Rook) => '♜',
        (Color::Red, PieceKind::Bishop) => '♝',
        (Color::Red, PieceKind::Knight) => '♞',
        (Color::Red, PieceKind::Pawn) => '♟',
    }
}

fn ascii_glyph(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };
    match piece.color {
        Color::Gold => letter,
        Color::Red => letter.to_ascii_lowercase(),
    }
}

fn tinted(glyph: char, color: Color, settings: &DisplaySettings) -> String {
    let s = glyph.to_string();
    if !settings.colored_output {
        return s;
    }
    match color {
        Color::Gold => s.yellow().bold().to_string(),
        Color::Red => s.red().bold().to_string(),
    }
}

/// Render the board with rank numbers on the left and file letters below,
/// Red's home rank (8) at the top exactly as Gold sees the table.
pub fn render_board(game: &Game, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    for row in 0..8i8 {
        let rank = 8 - row;
        out.push_str(&format!("{rank}  "));
        for col in 0..8i8 {
            let sq = Square::new(row, col).expect("row/col in range");
            let cell = match game.piece_at(sq) {
                Some(piece) => {
                    let glyph = if settings.unicode_pieces {
                        unicode_glyph(piece)
                    } else {
                        ascii_glyph(piece)
                    };
                    tinted(glyph, piece.color, settings)
                }
                None => ".".to_string(),
            };
            out.push_str(&cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}
