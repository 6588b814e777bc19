//! Booray rules engine.
//!
//! A multi-round trick-taking gambling card game: one human seat and up to
//! seven computer opponents ante into a shared pot, decide each round whether
//! to play or fold, discard and redraw, then play out tricks under
//! trump/lead-suit legality. Players who play a round and win no tricks go
//! "Booray" and repay the pot; the last player with chips wins the game.
//!
//! Layering:
//! - [`domain`]: pure game logic (cards, deck, legality, tricks, settlement)
//! - [`ai`]: decision providers (the weighted heuristic opponent, plus the
//!   trait the human input channel implements)
//! - [`engine`]: the round state machine, game loop, and the notification
//!   interface the presentation layer subscribes to
//! - [`cli`]: thin console front end

pub mod ai;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;

pub use config::GameConfig;
pub use error::EngineError;
