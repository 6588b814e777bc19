//! The full game loop: rounds until one seat holds all the chips.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::notifier::{Notifier, TableEvent};
use super::round_flow::RoundDriver;
use crate::ai::Decider;
use crate::config::GameConfig;
use crate::domain::player::Seat;
use crate::domain::{
    advance_dealer, reset_players_for_round, Deck, GameState, Player, MAX_SEATS,
};
use crate::error::EngineError;
use crate::errors::{DomainError, InvariantKind};

/// Final standing of a finished game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub winner: Seat,
    pub winner_name: String,
    pub chips: u32,
    pub rounds_played: u32,
}

/// One table: the game state plus a decider per seat, in seat order.
pub struct Game {
    state: GameState,
    deciders: Vec<Box<dyn Decider>>,
}

impl Game {
    /// Set up a table from the configuration. `deciders` must hold one
    /// entry per seat: the human's at index 0, then one per opponent.
    pub fn new(config: &GameConfig, deciders: Vec<Box<dyn Decider>>) -> Result<Self, EngineError> {
        let seats = config.seat_count();
        if !(2..=MAX_SEATS).contains(&seats) {
            return Err(EngineError::config(format!(
                "{seats} seats configured, need between 2 and {MAX_SEATS}"
            )));
        }
        if deciders.len() != seats {
            return Err(EngineError::config(format!(
                "{} deciders for {seats} seats",
                deciders.len()
            )));
        }
        if config.starting_chips == 0 {
            return Err(EngineError::config("starting chips must be positive"));
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let mut players = Vec::with_capacity(seats);
        players.push(Player::new(config.human_name.clone(), config.starting_chips));
        for name in &config.opponents {
            players.push(Player::new(name.clone(), config.starting_chips));
        }

        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        let dealer = rng.random_range(0..seats) as Seat;

        Ok(Self {
            state: GameState {
                mode: config.mode,
                players,
                dealer,
                rotation_marker: dealer,
                trump_card: None,
                pot: 0,
                ante: config.starting_ante,
                rounds_completed: 0,
                deck,
                rng,
            },
            deciders,
        })
    }

    /// Play rounds until a single seat remains, then pay out any leftover
    /// pot to the survivor.
    pub fn run(&mut self, notifier: &mut dyn Notifier) -> Result<GameSummary, EngineError> {
        let mut round = 0u32;
        loop {
            reset_players_for_round(&mut self.state.players);
            if self.state.active_count() <= 1 {
                break;
            }
            round += 1;
            let mut driver = RoundDriver {
                state: &mut self.state,
                deciders: &self.deciders,
                notifier: &mut *notifier,
            };
            driver.run_round(round)?;

            if self.state.active_count() <= 1 {
                break;
            }
            self.advance_round(notifier);
        }

        let winner = self.state.active_seats().first().copied().ok_or_else(|| {
            DomainError::invariant(InvariantKind::Other, "game ended with no active seat")
        })?;
        let leftover = self.state.pot;
        self.state.players[winner as usize].chips += leftover;
        self.state.pot = 0;

        let winner_player = &self.state.players[winner as usize];
        let summary = GameSummary {
            winner,
            winner_name: winner_player.name.clone(),
            chips: winner_player.chips,
            rounds_played: round,
        };
        info!(
            winner = %summary.winner_name,
            chips = summary.chips,
            rounds = summary.rounds_played,
            "game over"
        );
        notifier.notify(&TableEvent::GameOver {
            seat: winner,
            chips: summary.chips,
        });
        Ok(summary)
    }

    /// Between rounds: clear all-in flags, rotate the deal (doubling the
    /// ante on a completed rotation), and rebuild a fresh shuffled deck.
    fn advance_round(&mut self, notifier: &mut dyn Notifier) {
        for p in self.state.players.iter_mut().filter(|p| p.active) {
            p.all_in = false;
        }
        if advance_dealer(&mut self.state) {
            notifier.notify(&TableEvent::AnteDoubled {
                ante: self.state.ante,
            });
        }
        self.state.deck = Deck::standard();
        self.state.deck.shuffle(&mut self.state.rng);
        self.state.trump_card = None;
    }

    /// Read access for tests and summaries.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
