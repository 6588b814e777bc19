//! Property tests for trick resolution.
//!
//! Properties tested:
//! - The first play establishes the lead suit
//! - The running best only changes to a strictly stronger card
//! - A trick containing trump is won by a trump card
//! - Without trump, the highest lead-suit card wins

use proptest::prelude::*;

use crate::domain::cards_logic::card_beats;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::rules::RulesMode;
use crate::domain::state::GameState;
use crate::domain::tricks::{play_card, TrickState};
use crate::domain::{test_gens, test_prelude, Card};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One-card hands, no-rules mode so every card is playable.
fn trick_state(cards: &[Card], trump_card: Card) -> GameState {
    GameState {
        mode: RulesMode::NoRules,
        players: cards
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut p = Player::new(format!("p{i}"), 500);
                p.hand = vec![c];
                p
            })
            .collect(),
        dealer: 0,
        rotation_marker: 0,
        trump_card: Some(trump_card),
        pot: 0,
        ante: 5,
        rounds_completed: 0,
        deck: Deck::standard(),
        rng: ChaCha8Rng::seed_from_u64(0),
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_first_play_establishes_lead(cards in test_gens::unique_cards(2)) {
        let mut state = trick_state(&cards[..1], cards[1]);
        let mut trick = TrickState::new();
        let out = play_card(&mut state, &mut trick, 0, cards[0]).unwrap();

        prop_assert!(out.took_lead);
        prop_assert_eq!(trick.lead, Some(cards[0].suit));
        prop_assert_eq!(trick.best, Some((0, cards[0])));
        prop_assert!(state.players[0].hand.is_empty());
    }

    /// The best play after each card matches a left fold of `card_beats`
    /// over the plays, so the best only ever moves to a stronger card.
    #[test]
    fn prop_best_is_fold_of_card_beats(cards in (2usize..=8).prop_flat_map(|n| test_gens::unique_cards(n + 1))) {
        let trump_card = cards[cards.len() - 1];
        let plays = &cards[..cards.len() - 1];
        let mut state = trick_state(plays, trump_card);
        let mut trick = TrickState::new();

        let lead = plays[0].suit;
        let trump = trump_card.suit;
        let mut expected_best = plays[0];
        for (seat, &card) in plays.iter().enumerate() {
            let out = play_card(&mut state, &mut trick, seat as u8, card).unwrap();
            let stronger = seat == 0 || card_beats(card, expected_best, lead, trump);
            prop_assert_eq!(out.took_lead, stronger);
            if stronger {
                expected_best = card;
            }
            prop_assert_eq!(trick.best.map(|(_, c)| c), Some(expected_best));
        }
        prop_assert_eq!(trick.plays.len(), plays.len());
    }

    #[test]
    fn prop_trump_in_trick_wins(cards in test_gens::unique_cards(5)) {
        let trump_card = cards[4];
        let plays = &cards[..4];
        prop_assume!(plays.iter().any(|c| c.suit == trump_card.suit));

        let mut state = trick_state(plays, trump_card);
        let mut trick = TrickState::new();
        for (seat, &card) in plays.iter().enumerate() {
            play_card(&mut state, &mut trick, seat as u8, card).unwrap();
        }

        let (_, best) = trick.best.unwrap();
        prop_assert_eq!(best.suit, trump_card.suit);
        let top_trump = plays
            .iter()
            .filter(|c| c.suit == trump_card.suit)
            .max_by_key(|c| c.rank.value())
            .copied()
            .unwrap();
        prop_assert_eq!(best, top_trump);
    }

    #[test]
    fn prop_without_trump_highest_lead_suit_wins(cards in test_gens::unique_cards(5)) {
        let trump_card = cards[4];
        let plays = &cards[..4];
        prop_assume!(plays.iter().all(|c| c.suit != trump_card.suit));

        let mut state = trick_state(plays, trump_card);
        let mut trick = TrickState::new();
        for (seat, &card) in plays.iter().enumerate() {
            play_card(&mut state, &mut trick, seat as u8, card).unwrap();
        }

        let lead = plays[0].suit;
        let (_, best) = trick.best.unwrap();
        let top_lead = plays
            .iter()
            .filter(|c| c.suit == lead)
            .max_by_key(|c| c.rank.value())
            .copied()
            .unwrap();
        prop_assert_eq!(best, top_lead);
    }
}
