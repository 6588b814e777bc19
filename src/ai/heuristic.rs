//! Weighted heuristic opponent.
//!
//! The play-or-fold choice scores the hand on four weighted factors (high
//! cards, trump cards, pot odds, table size), clamps to a 0-100 percentage,
//! and rolls against it. Card play is deterministic: lead from the middle of
//! the trump holding, follow with the weakest winning card, otherwise shed
//! the lowest card.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Decider, DecisionError, DiscardChoice, PlayOrFold};
use super::view::SeatView;
use crate::domain::{card_beats, is_weak, strength_sort, Card, Suit};

/// Computer opponent with thread-safe, optionally seeded randomness.
///
/// The RNG sits behind a `Mutex` because [`Decider`] methods take `&self`.
/// Seed it in tests for reproducible fold decisions.
pub struct HeuristicOpponent {
    rng: Mutex<StdRng>,
}

impl HeuristicOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// The 0-100 play percentage for this seat's situation.
    pub fn play_score(view: &SeatView) -> u8 {
        let total = view.hand.len();
        let high = view
            .hand
            .iter()
            .filter(|c| c.rank.value() >= 11)
            .count();
        let trumps = view.hand.iter().filter(|c| c.suit == view.trump).count();

        let weight = high_cards_weight(high, total)
            + trump_cards_weight(trumps, total)
            + pot_odds_weight(view.pot, view.chips)
            + table_size_weight(total, view.active_players);

        (25 + weight).clamp(0, 100) as u8
    }

    fn choose_lead(legal: &[Card], trump: Suit) -> Card {
        let mut trumps: Vec<Card> = legal.iter().copied().filter(|c| c.suit == trump).collect();
        if !trumps.is_empty() {
            if trumps.len() == 1 {
                return trumps[0];
            }
            // Lead an upper-middle trump, saving the top for later tricks.
            trumps.sort_by_key(|c| c.rank.value());
            let idx = (trumps.len() * 6 / 10).min(trumps.len() - 1);
            return trumps[idx];
        }
        let mut sorted = legal.to_vec();
        strength_sort(&mut sorted, trump);
        if sorted.len() >= 3 {
            sorted[sorted.len() * 7 / 10]
        } else {
            sorted[0]
        }
    }

    fn choose_follow(legal: &[Card], best: Card, lead: Suit, trump: Suit) -> Card {
        let winning: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| card_beats(c, best, lead, trump))
            .collect();
        if let Some(&first) = winning.first() {
            // Cheapest card that still takes the trick: non-trump before
            // trump, then lowest rank.
            return winning.iter().copied().fold(first, |weakest, c| {
                if (c.suit == trump, c.rank.value()) < (weakest.suit == trump, weakest.rank.value())
                {
                    c
                } else {
                    weakest
                }
            });
        }
        // Cannot win: shed the lowest rank outright.
        legal.iter().copied().fold(legal[0], |lowest, c| {
            if c.rank.value() < lowest.rank.value() {
                c
            } else {
                lowest
            }
        })
    }
}

impl Decider for HeuristicOpponent {
    fn decide_play_or_fold(&self, view: &SeatView) -> Result<PlayOrFold, DecisionError> {
        let score = Self::play_score(view);
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| DecisionError::Internal(format!("RNG lock poisoned: {e}")))?;
        let roll: u8 = rng.random_range(0..=100);
        if roll <= score {
            Ok(PlayOrFold::Play)
        } else {
            Ok(PlayOrFold::Fold)
        }
    }

    fn choose_discards(&self, view: &SeatView) -> Result<DiscardChoice, DecisionError> {
        let weak: Vec<usize> = view
            .hand
            .iter()
            .enumerate()
            .filter(|(_, &c)| is_weak(c, view.trump))
            .map(|(i, _)| i)
            .collect();
        if weak.is_empty() {
            Ok(DiscardChoice::Skip)
        } else {
            Ok(DiscardChoice::Discard(weak))
        }
    }

    fn choose_card(&self, view: &SeatView) -> Result<Card, DecisionError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(DecisionError::InvalidMove(
                "no legal plays available".into(),
            ));
        }
        if legal.len() == 1 {
            return Ok(legal[0]);
        }
        match (view.lead, view.best_card) {
            (Some(lead), Some(best)) => Ok(Self::choose_follow(&legal, best, lead, view.trump)),
            _ => Ok(Self::choose_lead(&legal, view.trump)),
        }
    }
}

fn high_cards_weight(high: usize, total: usize) -> i32 {
    let ratio = percent(high, total);
    if ratio == 0.0 {
        0
    } else if ratio <= 35.0 {
        10
    } else if ratio <= 45.0 {
        20
    } else if ratio <= 70.0 {
        40
    } else {
        50
    }
}

fn trump_cards_weight(trumps: usize, total: usize) -> i32 {
    let ratio = percent(trumps, total);
    if ratio == 0.0 {
        -20
    } else if ratio <= 35.0 {
        25
    } else if ratio <= 45.0 {
        50
    } else if ratio <= 70.0 {
        100
    } else {
        // Hand is mostly trump: always play.
        1000
    }
}

fn pot_odds_weight(pot: u32, chips: u32) -> i32 {
    if chips == 0 {
        return 1000;
    }
    let ratio = percent(pot as usize, chips as usize);
    if ratio >= 100.0 {
        -15
    } else if ratio >= 80.0 {
        -10
    } else if ratio >= 50.0 {
        -5
    } else if ratio >= 30.0 {
        0
    } else if ratio >= 20.0 {
        25
    } else if ratio >= 15.0 {
        50
    } else if ratio >= 10.0 {
        75
    } else if ratio >= 5.0 {
        90
    } else {
        100
    }
}

fn table_size_weight(cards_in_hand: usize, active_players: usize) -> i32 {
    let ratio = percent(cards_in_hand, active_players);
    if ratio <= 73.0 {
        -10
    } else if ratio <= 85.0 {
        0
    } else if ratio <= 100.0 {
        20
    } else {
        50
    }
}

fn percent(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64 * 100.0
    }
}
