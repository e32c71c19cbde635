use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::{Player, Points};

const FIFTEEN_COUNT: u32 = 15;
const THIRTY_ONE_COUNT: u32 = 31;
/// The hard cap on a segment's running count.
pub const MAXIMUM_PLAY_COUNT: u32 = THIRTY_ONE_COUNT;

/// Points for a streak of equal-rank cards, indexed by streak length.
const PAIRS_POINTS: [Points; 5] = [0, 0, 2, 6, 12];
const FIFTEENS_POINTS: Points = 2;
const THIRTY_ONE_POINTS: Points = 1;
const GO_POINTS: Points = 1;

/// One action in a play-to-31 segment: a played card or a declared Go.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayAction {
    Play(Card),
    Go,
}

/// A single segment of the play. Cards accumulate onto a running count that
/// may never pass 31; once both players declare Go back to back the segment
/// is complete and a new one starts from zero.
#[derive(Clone, Debug)]
pub struct PlayTo31 {
    next_player_to_play: Player,
    play_actions: Vec<PlayAction>,
    played_cards: Vec<Card>,
    count: u32,
    most_recently_played_rank_count: usize,
    consecutive_go_count: usize,
    scores: [Points; Player::TOTAL_COUNT],
}

impl PlayTo31 {
    /// An empty segment with `first_player` to play.
    pub fn new(first_player: Player) -> PlayTo31 {
        PlayTo31 {
            next_player_to_play: first_player,
            play_actions: Vec::new(),
            played_cards: Vec::new(),
            count: 0,
            most_recently_played_rank_count: 0,
            consecutive_go_count: 0,
            scores: [0; Player::TOTAL_COUNT],
        }
    }

    /// Whether `card` fits under the count cap.
    pub fn is_playable(&self, card: Card) -> bool {
        self.count + u32::from(card.counting_value()) <= MAXIMUM_PLAY_COUNT
    }

    /// The cards of `hand` that can legally be played, in hand order.
    pub fn playable_cards(&self, hand: &Hand) -> Vec<Card> {
        hand.cards()
            .iter()
            .copied()
            .filter(|&card| self.is_playable(card))
            .collect()
    }

    /// Plays `card` for the player to play, scoring pairs, runs, fifteens
    /// and thirty-ones as it lands. Rejects a card that would push the count
    /// past 31 without touching any state.
    pub fn add(&mut self, card: Card) -> Result<(), PlayError> {
        let new_count = self.count + u32::from(card.counting_value());
        if new_count > MAXIMUM_PLAY_COUNT {
            return Err(PlayError::CountAbove31 {
                card,
                count: new_count,
            });
        }

        let player = self.next_player_to_play;
        self.played_cards.push(card);
        self.most_recently_played_rank_count = self.updated_rank_streak();
        self.count = new_count;

        let mut play_points = PAIRS_POINTS[self.most_recently_played_rank_count];
        play_points += self.runs_points();
        if new_count == FIFTEEN_COUNT {
            play_points += FIFTEENS_POINTS;
        }
        if new_count == THIRTY_ONE_COUNT {
            play_points += THIRTY_ONE_POINTS;
        }
        self.scores[player as usize] += play_points;

        self.play_actions.push(PlayAction::Play(card));
        self.consecutive_go_count = 0;
        self.next_player_to_play = player.next();
        Ok(())
    }

    fn updated_rank_streak(&self) -> usize {
        let played = &self.played_cards;
        if played.len() >= 2 && played[played.len() - 1].rank == played[played.len() - 2].rank {
            self.most_recently_played_rank_count + 1
        } else {
            1
        }
    }

    /// Points for the longest run ending at the most recent card, if any.
    /// Arrival order does not matter; a duplicated rank disqualifies the
    /// candidate.
    fn runs_points(&self) -> Points {
        for run_length in (3..=self.played_cards.len()).rev() {
            let suffix = &self.played_cards[self.played_cards.len() - run_length..];
            let mut ordinals: Vec<u8> = suffix.iter().map(|card| card.rank.ordinal()).collect();
            ordinals.sort_unstable();
            if ordinals.windows(2).all(|pair| pair[1] == pair[0] + 1) {
                return run_length as Points;
            }
        }
        0
    }

    /// Whether the player to play may declare a Go against `hand`.
    pub fn can_add_go(&self, hand: &Hand) -> bool {
        !hand.cards().iter().any(|&card| self.is_playable(card))
            && self.consecutive_go_count < Player::TOTAL_COUNT
    }

    /// Declares a Go for the player to play. The second consecutive Go pegs
    /// one point for the player declaring it and completes the segment.
    pub fn add_go(&mut self) {
        let player = self.next_player_to_play;
        if self.consecutive_go_count == Player::TOTAL_COUNT - 1 {
            self.scores[player as usize] += GO_POINTS;
        }
        self.play_actions.push(PlayAction::Go);
        self.consecutive_go_count += 1;
        self.next_player_to_play = player.next();
    }

    /// Whether both players have declared Go back to back.
    pub fn is_complete(&self) -> bool {
        self.consecutive_go_count == Player::TOTAL_COUNT
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn next_player_to_play(&self) -> Player {
        self.next_player_to_play
    }

    /// The opponent of the player to play, i.e. whoever acted most recently.
    pub fn last_player_to_play(&self) -> Player {
        self.next_player_to_play.next()
    }

    pub fn score(&self, player: Player) -> Points {
        self.scores[player as usize]
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    pub fn play_actions(&self) -> &[PlayAction] {
        &self.play_actions
    }
}
