use crate::card::Card;
use crate::error::HandError;
use std::fmt::Display;

/// The ordered cards a player holds: first as dealt, then shrinking as the
/// play proceeds.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Hand {
        Hand { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes the first card equal to `card`.
    pub fn play(&mut self, card: Card) -> Result<(), HandError> {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                Ok(())
            }
            None => Err(HandError::CardNotHeld(card)),
        }
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(ordinal: u8, suit: Suit) -> Card {
        Card::new(Rank::new(ordinal).unwrap(), suit)
    }

    #[test]
    fn should_remove_only_the_played_card() {
        let mut hand = Hand::new(vec![
            card(0, Suit::Clubs),
            card(5, Suit::Hearts),
            card(12, Suit::Spades),
        ]);
        assert_eq!(hand.play(card(5, Suit::Hearts)), Ok(()));
        assert_eq!(hand.cards(), &[card(0, Suit::Clubs), card(12, Suit::Spades)]);
    }

    #[test]
    fn should_report_a_card_that_is_not_held() {
        let mut hand = Hand::new(vec![card(0, Suit::Clubs)]);
        assert_eq!(
            hand.play(card(0, Suit::Diamonds)),
            Err(HandError::CardNotHeld(card(0, Suit::Diamonds)))
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn should_format_like_a_card_list() {
        let hand = Hand::new(vec![card(0, Suit::Clubs), card(9, Suit::Spades)]);
        assert_eq!(hand.to_string(), "[A♣,T♠]");
    }
}
