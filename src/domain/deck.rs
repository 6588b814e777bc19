//! Deck and discard pile management.
//!
//! The deck owns both the draw pile and the round's discard pile so that
//! recycling can never lose or duplicate a card: `recycle_discards` moves the
//! exact multiset back into the draw pile. (The conservation property in
//! `state::check_conservation` audits this at phase boundaries.)

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::{DomainError, InvariantKind};

#[derive(Debug, Clone)]
pub struct Deck {
    /// Draw pile; the top of the deck is the end of the vec.
    draw: Vec<Card>,
    /// Cards removed from play this round.
    discards: Vec<Card>,
}

impl Deck {
    /// A fresh 52-card deck in standard order: grouped by suit, then rank.
    pub fn standard() -> Self {
        let mut draw = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card { suit, rank });
            }
        }
        Self {
            draw,
            discards: Vec::new(),
        }
    }

    /// Fisher-Yates shuffle of the draw pile.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.draw.shuffle(rng);
    }

    /// Deal one card from the top.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discards.extend(cards);
    }

    pub fn discard_count(&self) -> usize {
        self.discards.len()
    }

    /// All cards currently held by the deck (draw pile and discards), for
    /// conservation audits.
    pub fn held_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw.iter().chain(self.discards.iter()).copied()
    }

    /// Return every discarded card to the draw pile and reshuffle.
    ///
    /// The exact multiset is preserved; duplicate physical cards would be a
    /// bug upstream and are caught by the conservation audit, not silently
    /// collapsed here.
    pub fn recycle_discards(&mut self, rng: &mut impl Rng) {
        if self.discards.is_empty() {
            return;
        }
        self.draw.append(&mut self.discards);
        self.shuffle(rng);
    }

    /// Make at least `needed` cards drawable, recycling discards if the draw
    /// pile is short. Deck exhaustion past that point is unrecoverable.
    pub fn ensure_available(
        &mut self,
        needed: usize,
        rng: &mut impl Rng,
    ) -> Result<(), DomainError> {
        if self.draw.len() < needed {
            self.recycle_discards(rng);
        }
        if self.draw.len() < needed {
            return Err(DomainError::invariant(
                InvariantKind::DeckExhausted,
                format!(
                    "need {needed} cards but only {} remain after recycling discards",
                    self.draw.len()
                ),
            ));
        }
        Ok(())
    }
}
