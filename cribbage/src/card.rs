use crate::error::CardError;
use std::fmt::Display;
use strum_macros::EnumIter;

/// How many cards a full pack holds.
pub const CARDS_PER_PACK: u8 = Rank::TOTAL_COUNT * Suit::TOTAL_COUNT;

/// A card's rank, from ace (ordinal 0) up to king (ordinal 12).
///
/// Ranks are ordered by ordinal, which is what run detection during the play
/// compares; the pegging value is a separate notion, see
/// [`Rank::counting_value`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Rank(u8);

impl Rank {
    /// How many distinct ranks a suit holds.
    pub const TOTAL_COUNT: u8 = 13;

    const CHARS: [char; 13] = [
        'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
    ];
    const MAXIMUM_COUNTING_VALUE: u8 = 10;

    pub fn new(ordinal: u8) -> Result<Rank, CardError> {
        if ordinal >= Rank::TOTAL_COUNT {
            return Err(CardError::RankOutOfRange(ordinal));
        }
        Ok(Rank(ordinal))
    }

    /// The 0-based ordinal, ace first.
    pub fn ordinal(self) -> u8 {
        self.0
    }

    /// The value this rank adds to the count: aces count 1, ten and every
    /// face card count 10.
    pub fn counting_value(self) -> u8 {
        (self.0 + 1).min(Rank::MAXIMUM_COUNTING_VALUE)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Rank::CHARS[usize::from(self.0)])
    }
}

/// The four suits in deck-position order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// The color of a suit's pips.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    /// How many suits a pack holds.
    pub const TOTAL_COUNT: u8 = 4;

    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit_char = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{}", suit_char)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Suit, CardError> {
        match ordinal {
            0 => Ok(Suit::Clubs),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            _ => Err(CardError::SuitOutOfRange(ordinal)),
        }
    }
}

/// A playing card in the real world, with a rank and a suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn counting_value(self) -> u8 {
        self.rank.counting_value()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    /// Builds the card at a deck position. Positions are suit-major: 0..13
    /// are the clubs from ace to king, then diamonds, hearts and spades.
    fn try_from(position: u8) -> Result<Card, CardError> {
        if position >= CARDS_PER_PACK {
            return Err(CardError::PositionOutOfRange(position));
        }
        Ok(Card {
            rank: Rank::new(position % Rank::TOTAL_COUNT)?,
            suit: Suit::try_from(position / Rank::TOTAL_COUNT)?,
        })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.suit as u8 * Rank::TOTAL_COUNT + card.rank.ordinal()
    }
}

/// The full 52-card pack in position order.
pub fn deck() -> Vec<Card> {
    (0..CARDS_PER_PACK)
        .map(|position| Card::try_from(position).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_reject_out_of_range_ordinals() {
        assert_eq!(Rank::new(13), Err(CardError::RankOutOfRange(13)));
        assert_eq!(Suit::try_from(4), Err(CardError::SuitOutOfRange(4)));
        assert_eq!(Card::try_from(52), Err(CardError::PositionOutOfRange(52)));
    }

    #[test]
    fn should_count_aces_low_and_faces_ten() {
        let counting_values: Vec<u8> = (0..Rank::TOTAL_COUNT)
            .map(|ordinal| Rank::new(ordinal).unwrap().counting_value())
            .collect();
        assert_eq!(
            counting_values,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10]
        );
    }

    #[test]
    fn should_format_cards_as_rank_then_suit() {
        assert_eq!(Card::try_from(0).unwrap().to_string(), "A♣");
        assert_eq!(Card::try_from(22).unwrap().to_string(), "T♦");
        assert_eq!(Card::try_from(51).unwrap().to_string(), "K♠");
    }

    #[test]
    fn should_format_suits_in_position_order() {
        let suit_strings: Vec<String> = Suit::iter().map(|suit| suit.to_string()).collect();
        assert_eq!(suit_strings, vec!["♣", "♦", "♥", "♠"]);
    }

    #[test]
    fn should_color_clubs_and_spades_black() {
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Hearts.color(), Color::Red);
    }

    #[test]
    fn should_build_the_full_pack_in_position_order() {
        let deck = deck();
        assert_eq!(deck.len(), usize::from(CARDS_PER_PACK));
        for (position, card) in deck.iter().enumerate() {
            assert_eq!(usize::from(u8::from(*card)), position);
        }
        assert!(deck[..13].iter().all(|card| card.suit == Suit::Clubs));
    }
}
