use crate::card::Card;
use thiserror::Error;

/// Errors from building cards out of raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank ordinal {0} is outside 0..13")]
    RankOutOfRange(u8),
    #[error("suit ordinal {0} is outside 0..4")]
    SuitOutOfRange(u8),
    #[error("deck position {0} is outside 0..52")]
    PositionOutOfRange(u8),
}

/// Errors from manipulating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("card {0} is not held in this hand")]
    CardNotHeld(Card),
}

/// Errors from the play-phase state machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("playing {card} would bring the count to {count}, above 31")]
    CountAbove31 { card: Card, count: u32 },
    #[error("cannot play {card}: all {maximum} cards of the hand have already been played")]
    HandExhausted { card: Card, maximum: usize },
}

/// Errors from dealing and discarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("can only discard from a dealt hand of {expected} cards, not {actual}")]
    WrongHandSize { expected: usize, actual: usize },
}
