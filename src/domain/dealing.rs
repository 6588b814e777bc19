//! Dealing hands and revealing the trump card.

use super::rules::hand_size_for_active;
use super::state::GameState;
use crate::errors::DomainError;

/// Deal a fresh round: clear hands, deal `hand_size` cards round-robin
/// starting left of the dealer, then turn the next card as trump.
///
/// Discards are recycled first if the draw pile is short; running out past
/// that is an invariant failure. Returns the hand size dealt.
pub fn deal_round(state: &mut GameState) -> Result<u8, DomainError> {
    for p in state.players.iter_mut() {
        p.hand.clear();
    }
    let seats = state.active_seats();
    let hand_size = hand_size_for_active(seats.len());
    let needed = hand_size as usize * seats.len() + 1;
    state.deck.ensure_available(needed, &mut state.rng)?;

    // Rotate so dealing starts with the seat after the dealer.
    let start = seats
        .iter()
        .position(|&s| s > state.dealer)
        .unwrap_or(0);
    for i in 0..hand_size as usize * seats.len() {
        let seat = seats[(start + i) % seats.len()];
        if let Some(card) = state.deck.draw() {
            state.players[seat as usize].hand.push(card);
        }
    }
    state.trump_card = state.deck.draw();
    Ok(hand_size)
}
