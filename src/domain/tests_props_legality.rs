//! Property-based tests for follow-suit and trump legality.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::rules::{legal_plays, RulesMode};
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// If a hand contains cards of the lead suit, every legal play is of
    /// that suit and every lead-suit card is legal.
    #[test]
    fn prop_follow_suit_legality(
        (lead, lead_card, others, trump) in (test_gens::suit(), test_gens::rank()).prop_flat_map(|(lead, rank)| {
            (
                Just(lead),
                Just(Card { suit: lead, rank }),
                test_gens::unique_cards(4),
                test_gens::suit(),
            )
        }),
    ) {
        let mut hand = vec![lead_card];
        hand.extend(others.into_iter().filter(|c| *c != lead_card));

        let legal = legal_plays(&hand, Some(lead), trump, RulesMode::Normal);

        for card in &legal {
            prop_assert_eq!(card.suit, lead);
        }
        let lead_count = hand.iter().filter(|c| c.suit == lead).count();
        prop_assert_eq!(legal.len(), lead_count);
    }

    /// Void in the lead suit: legal plays are the trump cards if any are
    /// held, otherwise the whole hand.
    #[test]
    fn prop_void_in_lead_must_trump_or_anything(
        (lead, hand, trump) in test_gens::suit().prop_flat_map(|lead| {
            (Just(lead), test_gens::hand_without_suit(lead), test_gens::suit())
        }),
    ) {
        prop_assume!(trump != lead);
        let legal = legal_plays(&hand, Some(lead), trump, RulesMode::Normal);

        let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == trump).collect();
        if trumps.is_empty() {
            prop_assert_eq!(legal, hand);
        } else {
            prop_assert_eq!(legal, trumps);
        }
    }

    /// Legal plays are always a non-empty duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_nonempty_subset(
        hand in test_gens::hand(),
        lead in proptest::option::of(test_gens::suit()),
        trump in test_gens::suit(),
    ) {
        let legal = legal_plays(&hand, lead, trump, RulesMode::Normal);

        prop_assert!(!legal.is_empty());
        let unique: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(unique.len(), legal.len());
        for card in &legal {
            prop_assert!(hand.contains(card));
        }
    }

    /// NoRules mode always offers the whole hand.
    #[test]
    fn prop_no_rules_offers_whole_hand(
        hand in test_gens::hand(),
        lead in proptest::option::of(test_gens::suit()),
        trump in test_gens::suit(),
    ) {
        let legal = legal_plays(&hand, lead, trump, RulesMode::NoRules);
        prop_assert_eq!(legal, hand);
    }
}
