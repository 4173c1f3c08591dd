use crate::types::PieceKind;
use thiserror::Error;

/// Why `attempt_move` rejected the input. Every rejection leaves the game
/// state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("a promotion choice is pending")]
    PromotionPending,
    #[error("illegal move")]
    InvalidMove,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NothingPending,
    #[error("cannot promote a pawn to {0}")]
    InvalidKind(PieceKind),
}
