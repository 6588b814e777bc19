//! Game orchestration: the round driver, the game loop, and table events.

mod game_loop;
mod notifier;
mod round_flow;

#[cfg(test)]
mod tests_rounds;

pub use game_loop::{Game, GameSummary};
pub use notifier::{Notifier, NullNotifier, TableEvent};
pub use round_flow::{RoundDriver, RoundOutcome};
