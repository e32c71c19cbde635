pub mod card;
pub mod dealing;
pub mod error;
pub mod hand;
pub mod play;
pub mod strategy;

pub use card::{deck, Card, Color, Rank, Suit};
pub use dealing::{deal_all_hands, discard, AllHands, DiscardResult};
pub use error::{CardError, DealError, HandError, PlayError};
pub use hand::Hand;
pub use play::{PlayAction, PlayTo31, ThePlay};
pub use strategy::{PlayFirst, PlaySelector};

/// Pegged points.
pub type Points = u32;

/// Cards dealt to each player before the discard.
pub const DEALT_HAND_SIZE: usize = 6;
/// Cards each player keeps for the play after discarding to the crib.
pub const KEPT_HAND_SIZE: usize = 4;
/// Bonus for playing the final card of the hand.
pub const LAST_CARD_POINTS: Points = 1;

/// The two participants in a hand. Pone is the non-dealer and always leads
/// the play.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Pone,
    Dealer,
}

impl Player {
    /// How many players a hand has.
    pub const TOTAL_COUNT: usize = 2;

    /// The player whose turn follows this player's.
    pub fn next(self) -> Player {
        match self {
            Player::Pone => Player::Dealer,
            Player::Dealer => Player::Pone,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Pone => write!(f, "Pone"),
            Player::Dealer => write!(f, "Dealer"),
        }
    }
}
