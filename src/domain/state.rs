//! The mutable table aggregate and its invariant checks.

use std::collections::HashSet;

use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Suit};
use super::deck::Deck;
use super::player::{Player, Seat};
use super::rules::RulesMode;
use crate::errors::{DomainError, InvariantKind};

/// Everything the rules need to run one game: players, chips, the deck, the
/// revealed trump card, the pot, and the table RNG. All phase logic operates
/// on this aggregate through free functions in the sibling modules.
#[derive(Debug)]
pub struct GameState {
    pub mode: RulesMode,
    pub players: Vec<Player>,
    /// Seat of the current dealer.
    pub dealer: Seat,
    /// Seat that, when the deal returns to it, completes a full rotation and
    /// doubles the ante. Inherited by the next dealer if its owner drops out.
    pub rotation_marker: Seat,
    pub trump_card: Option<Card>,
    pub pot: u32,
    pub ante: u32,
    pub rounds_completed: u32,
    pub deck: Deck,
    pub rng: ChaCha8Rng,
}

impl GameState {
    /// Seats still in the game, in table order.
    pub fn active_seats(&self) -> Vec<Seat> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i as Seat)
            .collect()
    }

    /// Seats still in this round (active and not folded), in table order.
    pub fn playing_seats(&self) -> Vec<Seat> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_playing())
            .map(|(i, _)| i as Seat)
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.active).count()
    }

    pub fn playing_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_playing()).count()
    }

    /// First active seat strictly after `seat`, wrapping around the table.
    /// Falls back to seat 0 if no one is active (callers check first).
    pub fn next_active_seat(&self, seat: Seat) -> Seat {
        self.next_seat_where(seat, |p| p.active)
    }

    /// First seat still in the round strictly after `seat`, wrapping.
    pub fn next_playing_seat(&self, seat: Seat) -> Seat {
        self.next_seat_where(seat, |p| p.is_playing())
    }

    fn next_seat_where(&self, seat: Seat, pred: impl Fn(&Player) -> bool) -> Seat {
        let n = self.players.len();
        (1..=n)
            .map(|off| (seat as usize + off) % n)
            .find(|&i| pred(&self.players[i]))
            .map(|i| i as Seat)
            .unwrap_or(0)
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card.map(|c| c.suit)
    }

    /// Trump must be revealed for decision, discard and trick phases.
    pub fn require_trump(&self, ctx: &str) -> Result<Suit, DomainError> {
        self.trump_suit().ok_or_else(|| {
            DomainError::invariant(InvariantKind::Other, format!("no trump card during {ctx}"))
        })
    }

    /// Audit that the full 52-card deck is accounted for exactly once across
    /// the draw pile, discards, hands, and the revealed trump card. Run at
    /// phase boundaries; a failure means a dealing or discard bug.
    pub fn check_conservation(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(52);
        let all = self
            .deck
            .held_cards()
            .chain(self.players.iter().flat_map(|p| p.hand.iter().copied()))
            .chain(self.trump_card);
        let mut count = 0usize;
        for card in all {
            count += 1;
            if !seen.insert(card) {
                return Err(DomainError::invariant(
                    InvariantKind::DuplicateCard,
                    format!("card {card} appears more than once"),
                ));
            }
        }
        if count != 52 {
            return Err(DomainError::invariant(
                InvariantKind::Conservation,
                format!("{count} cards in play, expected 52"),
            ));
        }
        Ok(())
    }
}
