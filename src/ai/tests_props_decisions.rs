//! Property tests for the heuristic opponent.
//!
//! Properties tested:
//! - The play score is always within 0-100
//! - Chosen cards and discards always come from the legal set

use proptest::prelude::*;

use super::{Decider, DiscardChoice, HeuristicOpponent, SeatView};
use crate::domain::rules::RulesMode;
use crate::domain::test_gens::{suit, unique_cards};
use crate::domain::test_prelude::proptest_config;
use crate::domain::{is_weak, Card};

fn view(hand: Vec<Card>, trump: crate::domain::Suit, pot: u32, chips: u32) -> SeatView {
    SeatView {
        seat: 1,
        hand,
        chips,
        pot,
        ante: 5,
        trump,
        mode: RulesMode::Normal,
        active_players: 8,
        lead: None,
        best_card: None,
        trick_plays: Vec::new(),
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_play_score_is_a_percentage(
        hand in (1usize..=5).prop_flat_map(unique_cards),
        trump in suit(),
        pot in 0u32..2000,
        chips in 0u32..2000,
    ) {
        let v = view(hand, trump, pot, chips);
        prop_assert!(HeuristicOpponent::play_score(&v) <= 100);
    }

    #[test]
    fn prop_chosen_card_is_always_legal(
        cards in (2usize..=6).prop_flat_map(unique_cards),
        trump in suit(),
    ) {
        let hand = cards[1..].to_vec();
        let table_card = cards[0];
        let ai = HeuristicOpponent::new(Some(3));

        // Leading.
        let v = view(hand.clone(), trump, 50, 500);
        let card = ai.choose_card(&v).unwrap();
        prop_assert!(v.legal_plays().contains(&card));

        // Following a play.
        let mut v = view(hand, trump, 50, 500);
        v.lead = Some(table_card.suit);
        v.best_card = Some(table_card);
        v.trick_plays = vec![(0, table_card)];
        let card = ai.choose_card(&v).unwrap();
        prop_assert!(v.legal_plays().contains(&card));
    }

    #[test]
    fn prop_discards_are_exactly_the_weak_cards(
        hand in (1usize..=5).prop_flat_map(unique_cards),
        trump in suit(),
    ) {
        let ai = HeuristicOpponent::new(Some(9));
        let v = view(hand.clone(), trump, 50, 500);
        match ai.choose_discards(&v).unwrap() {
            DiscardChoice::Skip => {
                prop_assert!(hand.iter().all(|&c| !is_weak(c, trump)));
            }
            DiscardChoice::Discard(indices) => {
                prop_assert!(!indices.is_empty());
                for (i, &c) in hand.iter().enumerate() {
                    prop_assert_eq!(indices.contains(&i), is_weak(c, trump));
                }
            }
        }
    }
}
