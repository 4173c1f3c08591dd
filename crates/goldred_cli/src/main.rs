mod render;
mod settings;

use goldred_core::{Game, MoveOutcome, PieceKind, Square};
use settings::DisplaySettings;
use std::io::{self, Write};

fn main() {
    let mut settings = DisplaySettings::load();
    let mut game = Game::new();

    println!("==============================");
    println!("|     Gold vs Red Chess      |");
    println!("==============================");
    println!("Enter moves like e2e4, or 'help' for commands.");

    loop {
        println!();
        print!("{}", render::render_board(&game, &settings));
        println!("{}", status_line(&game));

        if let Some(sq) = game.promotion_pending() {
            prompt_promotion(&mut game, sq);
            continue;
        }

        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!("\nEnd of input, quitting.");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return;
            }
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "exit" => return,
            "help" => print_help(),
            "reset" => {
                game.reset();
                println!("New game.");
            }
            "undo" => {
                if game.undo_last() {
                    println!("Move taken back.");
                } else {
                    println!("Nothing to undo.");
                }
            }
            "history" => print_history(&game),
            "prev" => match game.navigate_previous() {
                Some(record) => println!("Move {}: {}", record.index + 1, record.text),
                None => println!("No earlier move."),
            },
            "next" => match game.navigate_next() {
                Some(record) => println!("Move {}: {}", record.index + 1, record.text),
                None => println!("No later move."),
            },
            "ascii" => {
                settings.unicode_pieces = false;
                settings.save();
            }
            "unicode" => {
                settings.unicode_pieces = true;
                settings.save();
            }
            "color" => {
                settings.colored_output = !settings.colored_output;
                settings.save();
            }
            input => handle_move(&mut game, input),
        }
    }
}

fn status_line(game: &Game) -> String {
    if game.is_game_over() {
        // The side to move is the side that was mated.
        return format!("Game Over - {} wins!", game.current_side().opponent());
    }
    let side = game.current_side();
    if game.in_check(side) {
        format!("{side} to move (in check)")
    } else {
        format!("{side} to move")
    }
}

fn handle_move(game: &mut Game, input: &str) {
    let Some((from, to)) = parse_move(input) else {
        println!("Unrecognized input '{input}'. Try e2e4, or 'help'.");
        return;
    };
    match game.attempt_move(from, to) {
        MoveOutcome::Applied(record) => println!("{}", record.text),
        MoveOutcome::AwaitingPromotion { .. } => {}
        MoveOutcome::Rejected(err) => println!("Move refused: {err}."),
    }
}

/// Accept "e2e4" and "e2 e4" forms.
fn parse_move(input: &str) -> Option<(Square, Square)> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return None;
    }
    let from = Square::from_algebraic(&compact[0..2])?;
    let to = Square::from_algebraic(&compact[2..4])?;
    Some((from, to))
}

fn prompt_promotion(game: &mut Game, sq: Square) {
    loop {
        print!("Promote the pawn on {sq} to [q]ueen, [r]ook, [b]ishop or k[n]ight: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let kind = match line.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => PieceKind::Queen,
            "r" | "rook" => PieceKind::Rook,
            "b" | "bishop" => PieceKind::Bishop,
            "n" | "knight" => PieceKind::Knight,
            other => {
                println!("'{other}' is not a promotion piece.");
                continue;
            }
        };
        match game.choose_promotion(kind) {
            Ok(record) => {
                println!("{}", record.text);
                return;
            }
            Err(e) => {
                println!("{e}.");
                return;
            }
        }
    }
}

fn print_history(game: &Game) {
    let records = game.history();
    if records.is_empty() {
        println!("No moves yet.");
        return;
    }
    let current = game.current_record().map(|r| r.index);
    for record in records {
        let marker = if Some(record.index) == current { ">" } else { " " };
        println!("{marker} {:>3}. {}", record.index + 1, record.text);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  e2e4       move the piece on e2 to e4");
    println!("  history    list the move history");
    println!("  prev/next  step through the move history");
    println!("  undo       take back the last move");
    println!("  reset      start a new game");
    println!("  ascii      draw pieces as letters");
    println!("  unicode    draw pieces as chess glyphs");
    println!("  color      toggle colored output");
    println!("  quit       leave the game");
}
