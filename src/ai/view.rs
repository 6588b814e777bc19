//! The game state visible to one seat.

use crate::domain::player::Seat;
use crate::domain::rules::{legal_plays, RulesMode};
use crate::domain::{Card, Suit};

/// Snapshot handed to a [`Decider`](super::Decider): the seat's own hand and
/// stack plus the public table state. Built fresh for every decision, so
/// deciders never see stale data and cannot see other hands.
#[derive(Debug, Clone)]
pub struct SeatView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub chips: u32,
    pub pot: u32,
    pub ante: u32,
    pub trump: Suit,
    pub mode: RulesMode,
    /// Seats still in the game (not this round).
    pub active_players: usize,
    /// Lead suit of the trick in progress, if any card has been played.
    pub lead: Option<Suit>,
    /// Strongest card on the table so far.
    pub best_card: Option<Card>,
    /// Plays so far this trick, in order.
    pub trick_plays: Vec<(Seat, Card)>,
}

impl SeatView {
    /// Cards this seat may legally play into the current trick.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays(&self.hand, self.lead, self.trump, self.mode)
    }
}
