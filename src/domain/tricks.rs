//! Trick bookkeeping and the play-card transition.

use super::cards_logic::{card_beats, hand_has_suit};
use super::cards_types::{Card, Suit};
use super::player::Seat;
use super::rules::RulesMode;
use super::state::GameState;
use crate::errors::{DomainError, InvariantKind, ValidationKind};

/// One trick in progress. The lead suit is set by the first play; the best
/// play only ever changes to a strictly stronger card.
#[derive(Debug, Default, Clone)]
pub struct TrickState {
    pub lead: Option<Suit>,
    pub best: Option<(Seat, Card)>,
    pub plays: Vec<(Seat, Card)>,
}

impl TrickState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Winner of the trick once everyone has played.
    pub fn winner(&self) -> Option<Seat> {
        self.best.map(|(seat, _)| seat)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PlayCardOutcome {
    pub card: Card,
    /// This play took over as the strongest so far.
    pub took_lead: bool,
}

/// Play `card` from `seat` into the trick.
///
/// Validates turn state and suit legality, removes the card from the hand,
/// records the play, and updates the running best. A card the player does
/// not hold is an invariant failure (the engine only offers cards from the
/// hand); legality mistakes are validation errors the caller can surface.
pub fn play_card(
    state: &mut GameState,
    trick: &mut TrickState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardOutcome, DomainError> {
    let trump = state.require_trump("trick play")?;
    let player = &state.players[seat as usize];
    if !player.is_playing() {
        return Err(DomainError::validation(
            ValidationKind::NotPlaying,
            format!("seat {seat} is not in this round"),
        ));
    }
    let Some(pos) = player.hand.iter().position(|&c| c == card) else {
        return Err(DomainError::invariant(
            InvariantKind::Other,
            format!("seat {seat} does not hold {card}"),
        ));
    };
    if state.mode == RulesMode::Normal {
        if let Some(lead) = trick.lead {
            if card.suit != lead && hand_has_suit(&player.hand, lead) {
                return Err(DomainError::validation(
                    ValidationKind::MustFollowSuit,
                    format!("must follow {lead:?}, played {card}"),
                ));
            }
            if card.suit != lead
                && card.suit != trump
                && hand_has_suit(&player.hand, trump)
            {
                return Err(DomainError::validation(
                    ValidationKind::MustPlayTrump,
                    format!("void in {lead:?} and holding trump, played {card}"),
                ));
            }
        }
    }

    state.players[seat as usize].hand.remove(pos);
    let lead = *trick.lead.get_or_insert(card.suit);
    trick.plays.push((seat, card));
    let took_lead = match trick.best {
        None => true,
        Some((_, incumbent)) => card_beats(card, incumbent, lead, trump),
    };
    if took_lead {
        trick.best = Some((seat, card));
    }
    Ok(PlayCardOutcome { card, took_lead })
}
