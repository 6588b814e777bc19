//! Table constants and play legality.

use serde::{Deserialize, Serialize};

use super::cards_logic::hand_has_suit;
use super::cards_types::{Card, Suit};

/// One human seat plus seven opponents.
pub const MAX_SEATS: usize = 8;
pub const STARTING_CHIPS: u32 = 500;
pub const STARTING_ANTE: u32 = 5;

/// The only supported rule variant besides the normal game: `NoRules`
/// disables suit-following and trump legality entirely.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesMode {
    #[default]
    Normal,
    NoRules,
}

/// Cards dealt per player: 3 with fewer than 5 active players, else 5.
pub fn hand_size_for_active(active_count: usize) -> u8 {
    if active_count < 5 {
        3
    } else {
        5
    }
}

/// Compute the cards a player may legally play.
///
/// Leading (no lead suit yet) or `NoRules` mode: the whole hand. Otherwise:
/// must follow the lead suit when holding it, must trump when void in the
/// lead suit but holding trump, else anything. Never empty for a non-empty
/// hand.
pub fn legal_plays(hand: &[Card], lead: Option<Suit>, trump: Suit, mode: RulesMode) -> Vec<Card> {
    if mode == RulesMode::NoRules {
        return hand.to_vec();
    }
    let Some(lead) = lead else {
        return hand.to_vec();
    };
    if hand_has_suit(hand, lead) {
        return hand.iter().copied().filter(|c| c.suit == lead).collect();
    }
    if hand_has_suit(hand, trump) {
        return hand.iter().copied().filter(|c| c.suit == trump).collect();
    }
    hand.to_vec()
}
