//! Round setup: flag resets and ante collection.

use super::player::{Player, Seat};
use super::state::GameState;

/// Reset every player's per-round flags; see [`Player::reset_for_round`].
pub fn reset_players_for_round(players: &mut [Player]) {
    for p in players.iter_mut() {
        p.reset_for_round();
    }
}

/// Collect the ante from every active player and return who posted what.
///
/// Ante-exempt players (last round's Booray or draw participants) keep their
/// chips; anyone whose balance already stood at zero is marked all-in so the
/// decision phase commits them automatically. Non-exempt players pay at most
/// their balance and go all-in if it empties.
pub fn collect_antes(state: &mut GameState) -> Vec<(Seat, u32)> {
    let ante = state.ante;
    let mut posted = Vec::new();
    for (seat, p) in state.players.iter_mut().enumerate() {
        if !p.active {
            continue;
        }
        if p.ante_exempt {
            if p.chips == 0 {
                p.all_in = true;
            }
            posted.push((seat as Seat, 0));
            continue;
        }
        let paid = ante.min(p.chips);
        p.chips -= paid;
        state.pot += paid;
        if p.chips == 0 {
            p.all_in = true;
        }
        posted.push((seat as Seat, paid));
    }
    posted
}
