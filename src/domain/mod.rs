//! Domain layer: pure game rules over the table aggregate.

pub mod ante;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod player;
pub mod rules;
pub mod settlement;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use ante::{collect_antes, reset_players_for_round};
pub use cards_logic::{card_beats, hand_has_suit, is_weak, strength_sort};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::deal_round;
pub use deck::Deck;
pub use player::{Player, Seat};
pub use rules::{hand_size_for_active, legal_plays, RulesMode, MAX_SEATS, STARTING_ANTE, STARTING_CHIPS};
pub use settlement::{
    advance_dealer, apply_ante_exemptions, apply_eliminations, apply_payments, determine_winner,
    Outcome, RoundResult,
};
pub use state::GameState;
pub use tricks::{play_card, PlayCardOutcome, TrickState};
