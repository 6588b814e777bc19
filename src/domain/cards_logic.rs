//! Card game logic: checking suits in hands, comparing card strength.
//!
//! `card_beats` is the single comparison used for trick resolution and as a
//! building block for the heuristic's strategic sorts. Within one trick's
//! context (fixed lead and trump suit) it is transitive: trump > lead suit >
//! off-suit, ranks deciding inside a tier, and an off-suit challenger never
//! beats an off-suit incumbent.

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Does `a` beat `b`, with `b` the incumbent (already on the table)?
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    // Same trump status: within one suit, rank value decides.
    if a.suit == b.suit {
        return a.rank.value() > b.rank.value();
    }
    // Both non-trump, different suits: only the lead suit can win.
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    // Two off-suit cards: the incumbent keeps the trick.
    false
}

/// Stable ascending strength sort: non-trump cards first, then trump, each
/// group ascending by rank value.
pub fn strength_sort(cards: &mut [Card], trump: Suit) {
    cards.sort_by_key(|c| (c.suit == trump, c.rank.value()));
}

/// A "weak" card for the discard heuristic: non-trump with value 7 or below.
pub fn is_weak(card: Card, trump: Suit) -> bool {
    card.suit != trump && card.rank.value() <= 7
}
