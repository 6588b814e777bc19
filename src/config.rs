//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{RulesMode, STARTING_ANTE, STARTING_CHIPS};

/// Names used for the computer seats when none are configured.
pub const DEFAULT_OPPONENTS: [&str; 7] = [
    "Mary", "James", "Barbara", "John", "Emma", "Michael", "Robert",
];

/// Table setup for one game. Seat 0 is the human; opponents fill the seats
/// after it in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub human_name: String,
    pub opponents: Vec<String>,
    pub mode: RulesMode,
    pub starting_chips: u32,
    pub starting_ante: u32,
    /// Seeds the table RNG (shuffles, initial dealer) for reproducible
    /// games. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: "Player".to_string(),
            opponents: DEFAULT_OPPONENTS.iter().map(|s| s.to_string()).collect(),
            mode: RulesMode::Normal,
            starting_chips: STARTING_CHIPS,
            starting_ante: STARTING_ANTE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Number of seats at the table.
    pub fn seat_count(&self) -> usize {
        1 + self.opponents.len()
    }
}
