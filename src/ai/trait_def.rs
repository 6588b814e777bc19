//! Decision provider trait.
//!
//! Human and computer seats go through the same interface: the engine hands
//! a [`SeatView`] to the seat's [`Decider`] and applies whatever comes back
//! (after legality normalization). Implementations must not mutate game
//! state; they only observe the view.

use std::fmt;
use std::io;

use super::view::SeatView;
use crate::domain::Card;

/// Errors that can occur while obtaining a decision.
#[derive(Debug)]
pub enum DecisionError {
    /// Decider encountered an internal error
    Internal(String),
    /// Decider produced or was offered an impossible move
    InvalidMove(String),
    /// Reading or writing the player's terminal failed
    Io(io::Error),
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionError::Internal(msg) => write!(f, "decision internal error: {msg}"),
            DecisionError::InvalidMove(msg) => write!(f, "invalid move: {msg}"),
            DecisionError::Io(err) => write!(f, "decision I/O error: {err}"),
        }
    }
}

impl std::error::Error for DecisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecisionError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecisionError {
    fn from(err: io::Error) -> Self {
        DecisionError::Io(err)
    }
}

/// Commit to the round or fold and sit it out.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayOrFold {
    Play,
    Fold,
}

/// Which cards (by hand index) to exchange in the discard phase.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DiscardChoice {
    /// Keep the hand as dealt.
    Skip,
    /// Replace the cards at these hand indices.
    Discard(Vec<usize>),
}

/// A seat's decision provider.
///
/// The engine treats every seat uniformly; only the implementation differs
/// (interactive prompts for the human, the weighted heuristic for
/// opponents). Implementations should choose from `view.legal_plays()`;
/// the engine normalizes illegal answers rather than failing the game.
pub trait Decider: Send + Sync {
    /// Stay in for the round, or fold. Not called for all-in seats, which
    /// are committed automatically.
    fn decide_play_or_fold(&self, view: &SeatView) -> Result<PlayOrFold, DecisionError>;

    /// Pick cards to exchange before trick play.
    fn choose_discards(&self, view: &SeatView) -> Result<DiscardChoice, DecisionError>;

    /// Pick a card for the current trick.
    fn choose_card(&self, view: &SeatView) -> Result<Card, DecisionError>;
}
