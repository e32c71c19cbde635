pub mod play_to_31;

use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::{Player, Points, KEPT_HAND_SIZE, LAST_CARD_POINTS};
pub use play_to_31::{PlayAction, PlayTo31};

/// Most cards the play phase can see: both kept hands in full.
pub const MAXIMUM_PLAYED_CARD_COUNT: usize = Player::TOTAL_COUNT * KEPT_HAND_SIZE;

/// The whole play phase of a hand: a chain of play-to-31 segments plus the
/// bonus for playing the final card. The last segment in the chain is the
/// one being played; completed segments stay behind as history so the final
/// scores can be summed over all of them.
#[derive(Clone, Debug)]
pub struct ThePlay {
    plays_to_31: Vec<PlayTo31>,
    played_card_count: usize,
    last_card_played_by: Option<Player>,
}

impl ThePlay {
    /// A fresh play with Pone to lead.
    pub fn new() -> ThePlay {
        ThePlay {
            plays_to_31: vec![PlayTo31::new(Player::Pone)],
            played_card_count: 0,
            last_card_played_by: None,
        }
    }

    fn current(&self) -> &PlayTo31 {
        self.plays_to_31.last().unwrap()
    }

    fn current_mut(&mut self) -> &mut PlayTo31 {
        self.plays_to_31.last_mut().unwrap()
    }

    /// Whether `card` fits under the current segment's count cap.
    pub fn is_playable(&self, card: Card) -> bool {
        self.current().is_playable(card)
    }

    /// The cards of `hand` playable on the current segment, in hand order.
    pub fn playable_cards(&self, hand: &Hand) -> Vec<Card> {
        self.current().playable_cards(hand)
    }

    /// Whether the player to play may declare a Go against `hand`. Always
    /// false once every card has been played.
    pub fn can_add_go(&self, hand: &Hand) -> bool {
        self.played_card_count < MAXIMUM_PLAYED_CARD_COUNT && self.current().can_add_go(hand)
    }

    /// Plays `card` for the player to play. Rejects the card once all of
    /// both kept hands has been played, leaving every score untouched.
    pub fn add(&mut self, card: Card) -> Result<(), PlayError> {
        if self.played_card_count >= MAXIMUM_PLAYED_CARD_COUNT {
            return Err(PlayError::HandExhausted {
                card,
                maximum: MAXIMUM_PLAYED_CARD_COUNT,
            });
        }
        self.current_mut().add(card)?;
        self.played_card_count += 1;
        if self.played_card_count == MAXIMUM_PLAYED_CARD_COUNT {
            self.last_card_played_by = Some(self.current().last_player_to_play());
        }
        Ok(())
    }

    /// Declares a Go for the player to play; a segment completed by this Go
    /// immediately chains into a fresh one at count zero.
    pub fn add_go(&mut self) {
        let current = self.current_mut();
        current.add_go();
        if !current.is_complete() {
            return;
        }
        let first_player = current.next_player_to_play();
        self.plays_to_31.push(PlayTo31::new(first_player));
    }

    pub fn next_player_to_play(&self) -> Player {
        self.current().next_player_to_play()
    }

    /// The current segment's running count.
    pub fn count(&self) -> u32 {
        self.current().count()
    }

    pub fn played_card_count(&self) -> usize {
        self.played_card_count
    }

    /// The current segment's played cards.
    pub fn played_cards(&self) -> &[Card] {
        self.current().played_cards()
    }

    pub fn pone_score(&self) -> Points {
        self.score(Player::Pone)
    }

    pub fn dealer_score(&self) -> Points {
        self.score(Player::Dealer)
    }

    fn score(&self, player: Player) -> Points {
        let segment_points: Points = self
            .plays_to_31
            .iter()
            .map(|play_to_31| play_to_31.score(player))
            .sum();
        let last_card_points = match self.last_card_played_by {
            Some(last_player) if last_player == player => LAST_CARD_POINTS,
            _ => 0,
        };
        segment_points + last_card_points
    }
}

impl Default for ThePlay {
    fn default() -> ThePlay {
        ThePlay::new()
    }
}
