//! End-of-round settlement: winner determination, Booray penalties, pot
//! payout, eliminations, and the dealer rotation with its ante doubling.

use super::player::{Player, Seat};
use super::state::GameState;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// One seat took the most tricks and wins the pot.
    Winner(Seat),
    /// Two or more seats tied for most tricks; the pot carries over.
    Split(Vec<Seat>),
}

/// Result of one played-out round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: Outcome,
    /// Seats that stayed in but took zero tricks ("Booray"): they repay the
    /// pot-before-payments amount, capped at their balance.
    pub booray: Vec<Seat>,
    /// Tricks won per seat that played the round out, in table order.
    pub tricks: Vec<(Seat, u8)>,
}

impl RoundResult {
    fn tied(&self) -> &[Seat] {
        match &self.outcome {
            Outcome::Split(seats) => seats,
            Outcome::Winner(_) => &[],
        }
    }
}

/// Tally a round from the per-seat trick counts of the seats that played.
pub fn determine_winner(tricks: &[(Seat, u8)]) -> RoundResult {
    let max = tricks.iter().map(|&(_, t)| t).max().unwrap_or(0);
    let top: Vec<Seat> = tricks
        .iter()
        .filter(|&&(_, t)| t == max)
        .map(|&(s, _)| s)
        .collect();
    let booray = tricks
        .iter()
        .filter(|&&(_, t)| t == 0)
        .map(|&(s, _)| s)
        .collect();
    let outcome = if top.len() == 1 {
        Outcome::Winner(top[0])
    } else {
        Outcome::Split(top)
    };
    RoundResult {
        outcome,
        booray,
        tricks: tricks.to_vec(),
    }
}

/// Reassign ante exemptions: last round's grants expire, then Booray seats
/// and draw participants earn next round's exemption.
pub fn apply_ante_exemptions(players: &mut [Player], result: &RoundResult) {
    for p in players.iter_mut() {
        p.ante_exempt = false;
    }
    for &seat in result.booray.iter().chain(result.tied()) {
        players[seat as usize].ante_exempt = true;
    }
}

/// Move chips for the round result and return the pot before payments.
///
/// Booray seats each pay the pre-payment pot total (capped at their balance)
/// into the pot. A sole winner then collects that same pre-payment amount;
/// the penalties stay behind for the next round. On a split nobody collects.
pub fn apply_payments(state: &mut GameState, result: &RoundResult) -> u32 {
    let pot_before = state.pot;
    for &seat in &result.booray {
        let p = &mut state.players[seat as usize];
        let penalty = pot_before.min(p.chips);
        p.chips -= penalty;
        state.pot += penalty;
    }
    if let Outcome::Winner(seat) = result.outcome {
        state.players[seat as usize].chips += pot_before;
        state.pot = state.pot.saturating_sub(pot_before);
    }
    pot_before
}

/// Knock out broke seats at the end of the round and return who fell.
///
/// Draw participants survive even with an empty balance (their exemption
/// carries them into the next round); everyone else at zero goes out unless
/// they hold an ante exemption and were not all-in.
pub fn apply_eliminations(players: &mut [Player], result: Option<&RoundResult>) -> Vec<Seat> {
    let tied = result.map(RoundResult::tied).unwrap_or(&[]);
    let mut eliminated = Vec::new();
    for (seat, p) in players.iter_mut().enumerate() {
        let seat = seat as Seat;
        if !p.active || p.chips > 0 {
            continue;
        }
        if tied.contains(&seat) {
            continue;
        }
        if p.all_in || !p.ante_exempt {
            p.active = false;
            eliminated.push(seat);
        }
    }
    eliminated
}

/// Rotate the deal to the next active seat and double the ante when the deal
/// comes back around to the rotation marker. Returns true if the ante
/// doubled.
///
/// If the previous dealer was eliminated, the deal restarts at the first
/// active seat in table order. An eliminated marker owner passes the marker
/// to the incoming dealer, which by definition completes the rotation.
pub fn advance_dealer(state: &mut GameState) -> bool {
    let new_dealer = if state.players[state.dealer as usize].active {
        state.next_active_seat(state.dealer)
    } else {
        state.active_seats().first().copied().unwrap_or(0)
    };
    state.dealer = new_dealer;
    if !state.players[state.rotation_marker as usize].active {
        state.rotation_marker = new_dealer;
    }
    if new_dealer == state.rotation_marker {
        state.rounds_completed += 1;
        state.ante = state.ante.saturating_mul(2);
        true
    } else {
        false
    }
}
