use crate::card::Card;

/// Chooses which of the currently playable cards to play.
pub trait PlaySelector {
    /// Picks an index into `playable_cards`, which is never empty.
    fn select_play(&mut self, playable_cards: &[Card]) -> usize;
}

/// Always plays the first playable card in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayFirst;

impl PlaySelector for PlayFirst {
    fn select_play(&mut self, _playable_cards: &[Card]) -> usize {
        0
    }
}
