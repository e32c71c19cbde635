use crate::card::Card;
use crate::error::DealError;
use crate::hand::Hand;
use crate::{Player, DEALT_HAND_SIZE, KEPT_HAND_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Both freshly dealt hands.
#[derive(Clone, Debug)]
pub struct AllHands {
    pub pone: Hand,
    pub dealer: Hand,
}

/// A hand after discarding: the four kept cards plus the two sent to the
/// crib.
#[derive(Clone, Debug)]
pub struct DiscardResult {
    pub kept: Hand,
    pub discarded: [Card; 2],
}

/// Deals both hands from `deck` without replacement.
pub fn deal_all_hands<R: Rng>(rng: &mut R, deck: &[Card]) -> AllHands {
    let deal_size = DEALT_HAND_SIZE * Player::TOTAL_COUNT;
    let mut cards: Vec<Card> = deck.choose_multiple(rng, deal_size).copied().collect();
    // choose_multiple leaves the draw in an unspecified order, so the split
    // between the two hands has to be randomized separately
    cards.shuffle(rng);
    let dealer_cards = cards.split_off(DEALT_HAND_SIZE);
    AllHands {
        pone: Hand::new(cards),
        dealer: Hand::new(dealer_cards),
    }
}

/// Keeps the first four dealt cards and sends the last two to the crib.
pub fn discard(hand: &Hand) -> Result<DiscardResult, DealError> {
    if hand.len() != DEALT_HAND_SIZE {
        return Err(DealError::WrongHandSize {
            expected: DEALT_HAND_SIZE,
            actual: hand.len(),
        });
    }
    let cards = hand.cards();
    Ok(DiscardResult {
        kept: Hand::new(cards[..KEPT_HAND_SIZE].to_vec()),
        discarded: [cards[KEPT_HAND_SIZE], cards[KEPT_HAND_SIZE + 1]],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::deck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn should_deal_six_distinct_cards_to_each_player() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(42);
        let all_hands = deal_all_hands(&mut rng, &deck);
        assert_eq!(all_hands.pone.len(), DEALT_HAND_SIZE);
        assert_eq!(all_hands.dealer.len(), DEALT_HAND_SIZE);
        let positions: HashSet<u8> = all_hands
            .pone
            .cards()
            .iter()
            .chain(all_hands.dealer.cards())
            .map(|&card| u8::from(card))
            .collect();
        assert_eq!(positions.len(), DEALT_HAND_SIZE * Player::TOTAL_COUNT);
    }

    #[test]
    fn should_keep_the_first_four_cards_and_discard_the_last_two() {
        let deck = deck();
        let hand = Hand::new(deck[..DEALT_HAND_SIZE].to_vec());
        let result = discard(&hand).unwrap();
        assert_eq!(result.kept.cards(), &deck[..KEPT_HAND_SIZE]);
        assert_eq!(result.discarded, [deck[4], deck[5]]);
    }

    #[test]
    fn should_reject_discarding_from_a_wrong_size_hand() {
        let deck = deck();
        let hand = Hand::new(deck[..KEPT_HAND_SIZE].to_vec());
        assert_eq!(
            discard(&hand).unwrap_err(),
            DealError::WrongHandSize {
                expected: DEALT_HAND_SIZE,
                actual: KEPT_HAND_SIZE,
            }
        );
    }
}
