//! Engine tests with scripted deciders.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::notifier::{Notifier, NullNotifier, TableEvent};
use super::round_flow::{RoundDriver, RoundOutcome};
use super::{Game, GameSummary};
use crate::ai::{Decider, DecisionError, DiscardChoice, HeuristicOpponent, PlayOrFold, SeatView};
use crate::config::GameConfig;
use crate::domain::{Card, Deck, GameState, Outcome, Player, RulesMode};
use crate::error::EngineError;

/// Decider with a fixed fold decision that skips discards and plays the
/// first legal card.
struct Scripted {
    decision: PlayOrFold,
}

impl Scripted {
    fn playing() -> Box<dyn Decider> {
        Box::new(Scripted {
            decision: PlayOrFold::Play,
        })
    }

    fn folding() -> Box<dyn Decider> {
        Box::new(Scripted {
            decision: PlayOrFold::Fold,
        })
    }
}

impl Decider for Scripted {
    fn decide_play_or_fold(&self, _view: &SeatView) -> Result<PlayOrFold, DecisionError> {
        Ok(self.decision)
    }

    fn choose_discards(&self, _view: &SeatView) -> Result<DiscardChoice, DecisionError> {
        Ok(DiscardChoice::Skip)
    }

    fn choose_card(&self, view: &SeatView) -> Result<Card, DecisionError> {
        view.legal_plays()
            .first()
            .copied()
            .ok_or_else(|| DecisionError::InvalidMove("empty hand".into()))
    }
}

/// Always answers with a card it probably does not hold; the engine must
/// normalize it to a legal play.
struct Stubborn;

impl Decider for Stubborn {
    fn decide_play_or_fold(&self, _view: &SeatView) -> Result<PlayOrFold, DecisionError> {
        Ok(PlayOrFold::Play)
    }

    fn choose_discards(&self, _view: &SeatView) -> Result<DiscardChoice, DecisionError> {
        // Indices far past any hand size.
        Ok(DiscardChoice::Discard(vec![40, 41]))
    }

    fn choose_card(&self, _view: &SeatView) -> Result<Card, DecisionError> {
        "AS".parse().map_err(|_| DecisionError::Internal("parse".into()))
    }
}

/// Buffers every event for assertions.
#[derive(Default)]
struct Recording {
    events: Vec<TableEvent>,
}

impl Notifier for Recording {
    fn notify(&mut self, event: &TableEvent) {
        self.events.push(event.clone());
    }
}

fn test_state(chips: u32, count: usize, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng);
    GameState {
        mode: RulesMode::Normal,
        players: (0..count)
            .map(|i| Player::new(format!("p{i}"), chips))
            .collect(),
        dealer: 0,
        rotation_marker: 0,
        trump_card: None,
        pot: 0,
        ante: 5,
        rounds_completed: 0,
        deck,
        rng,
    }
}

fn run_one_round(
    state: &mut GameState,
    deciders: &[Box<dyn Decider>],
) -> Result<RoundOutcome, EngineError> {
    let mut notifier = NullNotifier;
    let mut driver = RoundDriver {
        state,
        deciders,
        notifier: &mut notifier,
    };
    driver.run_round(1)
}

#[test]
fn all_folded_round_keeps_the_pot() {
    let mut state = test_state(100, 3, 1);
    let deciders = vec![Scripted::folding(), Scripted::folding(), Scripted::folding()];

    let outcome = run_one_round(&mut state, &deciders).unwrap();
    assert!(matches!(outcome, RoundOutcome::AllFolded));
    assert_eq!(state.pot, 15);
    assert!(state.players.iter().all(|p| p.chips == 95));
}

#[test]
fn lone_player_takes_the_whole_pot() {
    let mut state = test_state(100, 3, 2);
    let deciders = vec![Scripted::playing(), Scripted::folding(), Scripted::folding()];

    let outcome = run_one_round(&mut state, &deciders).unwrap();
    assert!(matches!(outcome, RoundOutcome::SingleWinner(0)));
    assert_eq!(state.pot, 0);
    assert_eq!(state.players[0].chips, 110);
}

#[test]
fn played_round_settles_and_conserves_chips() {
    let mut state = test_state(100, 4, 3);
    let deciders: Vec<Box<dyn Decider>> = (0..4).map(|_| Scripted::playing()).collect();

    let outcome = run_one_round(&mut state, &deciders).unwrap();
    let RoundOutcome::Played(result) = outcome else {
        panic!("expected a played round");
    };

    // Four players: three tricks each tallied exactly once.
    let total_tricks: u8 = result.tricks.iter().map(|&(_, t)| t).sum();
    assert_eq!(total_tricks, 3);
    match &result.outcome {
        Outcome::Winner(seat) => {
            let (_, winner_tricks) = result.tricks.iter().find(|(s, _)| s == seat).unwrap();
            assert!(result.tricks.iter().all(|(_, t)| t <= winner_tricks));
        }
        Outcome::Split(seats) => assert!(seats.len() >= 2),
    }

    let chips: u32 = state.players.iter().map(|p| p.chips).sum();
    assert_eq!(chips + state.pot, 400);
}

#[test]
fn illegal_answers_are_normalized_not_fatal() {
    let mut state = test_state(100, 3, 4);
    let deciders: Vec<Box<dyn Decider>> =
        (0..3).map(|_| Box::new(Stubborn) as Box<dyn Decider>).collect();

    let outcome = run_one_round(&mut state, &deciders).unwrap();
    assert!(matches!(outcome, RoundOutcome::Played(_)));
    state.check_conservation().unwrap();
}

#[test]
fn all_in_seats_are_committed_without_being_asked() {
    let mut state = test_state(100, 3, 5);
    state.players[1].chips = 3;
    let deciders = vec![Scripted::playing(), Scripted::folding(), Scripted::playing()];

    run_one_round(&mut state, &deciders).unwrap();
    // Seat 1 could only post a short ante and had to stay in.
    assert!(state.players[1].all_in);
    assert!(!state.players[1].passed);
}

#[test]
fn game_rejects_bad_configurations() {
    let cfg = GameConfig {
        opponents: Vec::new(),
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(&cfg, vec![Scripted::playing()]),
        Err(EngineError::Config { .. })
    ));

    let cfg = GameConfig::default();
    assert!(matches!(
        Game::new(&cfg, vec![Scripted::playing()]),
        Err(EngineError::Config { .. })
    ));
}

#[test]
fn seeded_game_runs_to_a_single_winner() {
    let cfg = GameConfig {
        opponents: vec!["Mary".into(), "James".into(), "Barbara".into()],
        seed: Some(42),
        ..GameConfig::default()
    };
    let deciders: Vec<Box<dyn Decider>> = (0..4u64)
        .map(|i| Box::new(HeuristicOpponent::new(Some(42 + i))) as Box<dyn Decider>)
        .collect();

    let mut game = Game::new(&cfg, deciders).unwrap();
    let mut recording = Recording::default();
    let GameSummary { winner, chips, .. } = game.run(&mut recording).unwrap();

    // All chips end with the last seat standing.
    assert_eq!(chips, 4 * 500);
    assert_eq!(game.state().pot, 0);
    let actives = game.state().active_seats();
    assert_eq!(actives, vec![winner]);
    assert!(matches!(
        recording.events.last(),
        Some(TableEvent::GameOver { .. })
    ));
}

#[test]
fn seeded_games_are_reproducible() {
    let run = || {
        let cfg = GameConfig {
            opponents: vec!["Mary".into(), "James".into()],
            seed: Some(7),
            ..GameConfig::default()
        };
        let deciders: Vec<Box<dyn Decider>> = (0..3u64)
            .map(|i| Box::new(HeuristicOpponent::new(Some(100 + i))) as Box<dyn Decider>)
            .collect();
        let mut game = Game::new(&cfg, deciders).unwrap();
        game.run(&mut NullNotifier).unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.rounds_played, b.rounds_played);
    assert_eq!(a.chips, b.chips);
}
