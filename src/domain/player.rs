//! Player records and per-round status flags.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;

/// Table seat index. Seat 0 is the human by convention; opponents follow.
pub type Seat = u8;

/// One player record, created at game start and kept (for display) after
/// elimination. Human and computer players share this type; they differ only
/// in which decision provider the engine routes their choices through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Current hand. Order is not significant to the rules.
    pub hand: Vec<Card>,
    /// Chip balance; never negative, payments are capped at the balance.
    pub chips: u32,
    /// Still in the game. Permanently false once eliminated.
    pub active: bool,
    /// Folded this round.
    pub passed: bool,
    /// Chip balance exhausted this round.
    pub all_in: bool,
    /// Protected from ante and elimination this round (previous round's
    /// Booray or draw).
    pub ante_exempt: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            chips,
            active: true,
            passed: false,
            all_in: false,
            ante_exempt: false,
        }
    }

    /// In the round: active and has not folded.
    pub fn is_playing(&self) -> bool {
        self.active && !self.passed
    }

    /// Round-boundary flag reset. A broke player keeps their seat only while
    /// ante-exempt; eliminated players stay out (their balance is zero, so
    /// the first arm can never revive them).
    pub fn reset_for_round(&mut self) {
        if self.chips > 0 {
            self.active = true;
        } else if !self.ante_exempt {
            self.active = false;
        }
        self.passed = false;
        self.all_in = false;
    }
}
