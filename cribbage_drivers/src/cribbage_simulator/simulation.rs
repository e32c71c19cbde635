use cribbage::dealing::{deal_all_hands, discard};
use cribbage::{deck, PlayFirst, PlaySelector, Player, ThePlay};
use cribbage_drivers::Settings;
use rand::Rng;
use std::time::Instant;

/// Both players' summed scores over many hands, Pone first.
pub type TotalScore = [u64; 2];

/// Runs the whole simulation described by `settings` and prints the average
/// scores at the end.
pub fn simulate_hands(settings: &Settings) -> anyhow::Result<()> {
    if settings.worker_count == 1 {
        let total_score = play_hands(
            &mut rand::thread_rng(),
            settings.hand_count,
            settings.hide_pone_hand,
            settings.hide_dealer_hand,
            None,
        )?;
        print_average_score("Average score", &total_score, settings.hand_count);
        return Ok(());
    }

    let worker_count = settings.worker_count;
    let even_hand_count = even_hand_count(settings.hand_count, worker_count as u64);
    let hands_per_worker = even_hand_count / worker_count as u64;
    println!(
        "Simulating {} hands across {} worker threads",
        even_hand_count, worker_count
    );

    let start = Instant::now();
    let total_score = std::thread::scope(|scope| {
        let mut worker_handles = Vec::with_capacity(worker_count);
        for worker_number in 1..=worker_count {
            worker_handles.push(scope.spawn(move || {
                play_hands(
                    &mut rand::thread_rng(),
                    hands_per_worker,
                    settings.hide_pone_hand,
                    settings.hide_dealer_hand,
                    Some(worker_number),
                )
            }));
        }

        let mut total_score: TotalScore = [0; 2];
        for worker_handle in worker_handles {
            let worker_score = worker_handle.join().expect("worker thread panicked")?;
            total_score[0] += worker_score[0];
            total_score[1] += worker_score[1];
        }
        Ok::<TotalScore, anyhow::Error>(total_score)
    })?;
    let elapsed_nanoseconds = start.elapsed().as_nanos();
    println!(
        "Simulated {} total hands with {} workers in {} ns for {} ns per hand",
        even_hand_count,
        worker_count,
        elapsed_nanoseconds,
        elapsed_nanoseconds / u128::from(even_hand_count)
    );
    print_average_score("Overall average score", &total_score, even_hand_count);
    Ok(())
}

/// Deals, discards and plays out `hand_count` hands, printing each player's
/// cards unless hidden, and returns both players' summed scores.
pub fn play_hands<R: Rng>(
    rng: &mut R,
    hand_count: u64,
    hide_pone_hand: bool,
    hide_dealer_hand: bool,
    worker_number: Option<usize>,
) -> anyhow::Result<TotalScore> {
    let deck = deck();
    let mut selector = PlayFirst;
    let prefix = match worker_number {
        Some(worker_number) => format!("[worker {}] ", worker_number),
        None => String::new(),
    };

    let mut total_score: TotalScore = [0; 2];
    let start = Instant::now();
    for _ in 0..hand_count {
        let all_hands = deal_all_hands(rng, &deck);
        if !hide_pone_hand {
            println!("{}Pone   dealt {}", prefix, all_hands.pone);
        }
        if !hide_dealer_hand {
            println!("{}Dealer dealt {}", prefix, all_hands.dealer);
        }

        let pone_discard = discard(&all_hands.pone)?;
        let dealer_discard = discard(&all_hands.dealer)?;
        if !hide_pone_hand {
            println!(
                "{}Pone   kept {} discarded [{},{}]",
                prefix, pone_discard.kept, pone_discard.discarded[0], pone_discard.discarded[1]
            );
        }
        if !hide_dealer_hand {
            println!(
                "{}Dealer kept {} discarded [{},{}]",
                prefix,
                dealer_discard.kept,
                dealer_discard.discarded[0],
                dealer_discard.discarded[1]
            );
        }

        let mut pone_hand = pone_discard.kept;
        let mut dealer_hand = dealer_discard.kept;
        let mut the_play = ThePlay::new();
        while !pone_hand.is_empty() || !dealer_hand.is_empty() {
            let hand = match the_play.next_player_to_play() {
                Player::Pone => &mut pone_hand,
                Player::Dealer => &mut dealer_hand,
            };
            let playable_cards = the_play.playable_cards(hand);
            if playable_cards.is_empty() {
                the_play.add_go();
            } else {
                let played = playable_cards[selector.select_play(&playable_cards)];
                hand.play(played)?;
                the_play.add(played)?;
            }
        }
        total_score[0] += u64::from(the_play.pone_score());
        total_score[1] += u64::from(the_play.dealer_score());
    }
    let elapsed_nanoseconds = start.elapsed().as_nanos();
    println!(
        "{}Simulated {} hands in {} ns for {} ns per hand",
        prefix,
        hand_count,
        elapsed_nanoseconds,
        elapsed_nanoseconds / u128::from(hand_count)
    );
    Ok(total_score)
}

fn print_average_score(label: &str, total_score: &TotalScore, hand_count: u64) {
    println!(
        "{}: [{},{}]",
        label,
        total_score[0] as f64 / hand_count as f64,
        total_score[1] as f64 / hand_count as f64
    );
}

/// The requested hand count rounded up so every worker gets the same share.
fn even_hand_count(hand_count: u64, worker_count: u64) -> u64 {
    (hand_count + worker_count - 1) / worker_count * worker_count
}
