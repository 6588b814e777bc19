//! Table events emitted while a game runs.
//!
//! The engine is presentation-agnostic: it pushes [`TableEvent`]s at a
//! [`Notifier`] and never prints. Events carry owned data so sinks can
//! buffer them without borrowing game state.

use crate::domain::player::Seat;
use crate::domain::settlement::RoundResult;
use crate::domain::Card;

#[derive(Debug, Clone)]
pub enum TableEvent {
    RoundStarted {
        round: u32,
        dealer: Seat,
        ante: u32,
    },
    AntesPosted {
        posted: Vec<(Seat, u32)>,
        pot: u32,
    },
    HandsDealt {
        hand_size: u8,
    },
    TrumpRevealed {
        card: Card,
    },
    /// A seat committed to the round or folded. All-in seats are committed
    /// without being asked.
    DecisionMade {
        seat: Seat,
        played: bool,
        all_in: bool,
    },
    /// Every seat folded; the pot carries over untouched.
    AllFolded,
    /// Exactly one seat stayed in and takes the whole pot without play.
    SinglePlayerWin {
        seat: Seat,
        amount: u32,
    },
    DiscardsMade {
        seat: Seat,
        count: usize,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
        /// This card became the strongest on the table.
        took_lead: bool,
    },
    TrickWon {
        seat: Seat,
        trick: u8,
        of: u8,
    },
    /// A played-out round settled: outcome, Booray seats, and the pot value
    /// the payments were based on.
    RoundSettled {
        result: RoundResult,
        pot_before: u32,
    },
    AnteDoubled {
        ante: u32,
    },
    PlayerEliminated {
        seat: Seat,
    },
    GameOver {
        seat: Seat,
        chips: u32,
    },
}

/// Sink for table events.
pub trait Notifier {
    fn notify(&mut self, event: &TableEvent);
}

/// Discards every event. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: &TableEvent) {}
}
