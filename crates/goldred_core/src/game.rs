//! Turn/history state machine: applies validated moves, runs the
//! promotion protocol, and keeps the snapshot and record lists.

use crate::board::{MoveEffects, Position};
use crate::errors::{MoveError, PromotionError};
use crate::rules;
use crate::types::*;
use std::collections::HashSet;

/// Human-readable description of one executed move, plus its index in the
/// ordered history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub index: usize,
    pub text: String,
}

/// Result of `Game::attempt_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Input refused; nothing changed.
    Rejected(MoveError),
    /// Move executed and recorded.
    Applied(MoveRecord),
    /// Pawn reached its promotion row. The move is on the board but the
    /// turn does not pass until `choose_promotion` is called.
    AwaitingPromotion { from: Square, to: Square },
}

#[derive(Clone, Copy, Debug)]
struct PendingPromotion {
    to: Square,
    color: Color,
    captured: Option<Piece>,
}

/// One engine instance owning the complete game state. Frontends drive it
/// exclusively through this API; no legality logic leaks outside.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    game_over: bool,
    pending: Option<PendingPromotion>,
    /// Pre-move clones of the position, one per move, newest last.
    snapshots: Vec<Position>,
    records: Vec<MoveRecord>,
    /// Which record the history view is looking at.
    cursor: Option<usize>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            position: Position::start(),
            game_over: false,
            pending: None,
            snapshots: Vec::new(),
            records: Vec::new(),
            cursor: None,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_side(&self) -> Color {
        self.position.side_to_move
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.position.in_check(color)
    }

    /// Destination square of the pawn awaiting its promotion choice.
    pub fn promotion_pending(&self) -> Option<Square> {
        self.pending.map(|p| p.to)
    }

    /// Exactly the squares `attempt_move` would accept from `from`. Empty
    /// while the game is over or a promotion choice is outstanding, since
    /// no move input is accepted then either.
    pub fn legal_destinations(&self, from: Square) -> HashSet<Square> {
        if self.game_over || self.pending.is_some() {
            return HashSet::new();
        }
        rules::legal_destinations(&self.position, from)
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Rejected(MoveError::GameOver);
        }
        if self.pending.is_some() {
            return MoveOutcome::Rejected(MoveError::PromotionPending);
        }
        if !rules::is_legal_move(&self.position, from, to) {
            return MoveOutcome::Rejected(MoveError::InvalidMove);
        }

        self.snapshots.push(self.position.clone());
        let effects = self.position.apply_move(from, to);

        if effects.piece.kind == PieceKind::Pawn
            && to.row() == promotion_row(effects.piece.color)
        {
            self.pending = Some(PendingPromotion {
                to,
                color: effects.piece.color,
                captured: effects.captured,
            });
            return MoveOutcome::AwaitingPromotion { from, to };
        }

        self.position.side_to_move = self.position.side_to_move.opponent();
        MoveOutcome::Applied(self.finish_move(effects, to, None))
    }

    /// Resolve a pending promotion. Only Queen, Rook, Bishop and Knight
    /// are accepted; errors leave the pending state untouched.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<MoveRecord, PromotionError> {
        let Some(pending) = self.pending else {
            return Err(PromotionError::NothingPending);
        };
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        ) {
            return Err(PromotionError::InvalidKind(kind));
        }

        self.pending = None;
        self.position
            .set_piece(pending.to, Some(Piece::new(pending.color, kind)));
        self.position.side_to_move = pending.color.opponent();

        let effects = MoveEffects {
            piece: Piece::new(pending.color, PieceKind::Pawn),
            captured: pending.captured,
            en_passant_capture: false,
        };
        Ok(self.finish_move(effects, pending.to, Some(kind)))
    }

    /// Shared tail of move execution, entered with the side to move
    /// already advanced: build the description, evaluate check/checkmate
    /// for the defender, and append the record.
    fn finish_move(
        &mut self,
        effects: MoveEffects,
        to: Square,
        promoted: Option<PieceKind>,
    ) -> MoveRecord {
        let mut text = format!("{} moved to {}", effects.piece, to);
        if effects.en_passant_capture {
            text.push_str(" and captured a pawn (en passant)");
        } else if let Some(captured) = effects.captured {
            text.push_str(&format!(" and captured {captured}"));
        }
        if let Some(kind) = promoted {
            text.push_str(&format!(" and promoted to {kind}"));
        }

        let defender = self.position.side_to_move;
        if self.position.in_check(defender) {
            if rules::is_checkmate(&self.position, defender) {
                text.push_str(" - Checkmate!");
                self.game_over = true;
            } else {
                text.push_str(" - Check!");
            }
        }

        let record = MoveRecord {
            index: self.records.len(),
            text,
        };
        self.records.push(record.clone());
        self.cursor = Some(record.index);
        record
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The record the history view currently points at.
    pub fn current_record(&self) -> Option<&MoveRecord> {
        self.records.get(self.cursor?)
    }

    /// Step the history view back one record. Pure view change; the board
    /// and turn are untouched.
    pub fn navigate_previous(&mut self) -> Option<&MoveRecord> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.records.get(i - 1)
            }
            _ => None,
        }
    }

    pub fn navigate_next(&mut self) -> Option<&MoveRecord> {
        match self.cursor {
            Some(i) if i + 1 < self.records.len() => {
                self.cursor = Some(i + 1);
                self.records.get(i + 1)
            }
            _ => None,
        }
    }

    pub fn navigate_to(&mut self, index: usize) -> Option<&MoveRecord> {
        if index < self.records.len() {
            self.cursor = Some(index);
        }
        self.records.get(index)
    }

    /// Restore the newest pre-move snapshot, discarding the move that
    /// produced it. A move parked in the promotion dialog has no record
    /// yet, so only the pending slot is dropped for it.
    pub fn undo_last(&mut self) -> bool {
        let Some(prev) = self.snapshots.pop() else {
            return false;
        };
        if self.pending.take().is_none() {
            self.records.pop();
        }
        self.position = prev;
        self.game_over = false;
        self.cursor = self.records.len().checked_sub(1);
        true
    }

    /// Back to the standard starting position with empty history.
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Gold => 0,
        Color::Red => 7,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
