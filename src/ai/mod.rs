//! Decision providers for table seats.
//!
//! This module provides:
//! - The [`Decider`] trait shared by human and computer seats
//! - [`SeatView`], the per-decision snapshot deciders observe
//! - [`HeuristicOpponent`]: the weighted computer opponent (seedable for
//!   tests)

mod heuristic;
mod trait_def;
mod view;

#[cfg(test)]
mod tests_props_decisions;

pub use heuristic::HeuristicOpponent;
pub use trait_def::{Decider, DecisionError, DiscardChoice, PlayOrFold};
pub use view::SeatView;
