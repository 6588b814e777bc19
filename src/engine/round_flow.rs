//! One round of play: antes, deal, decisions, discards, tricks, settlement.

use tracing::{debug, warn};

use super::notifier::{Notifier, TableEvent};
use crate::ai::{Decider, DiscardChoice, PlayOrFold, SeatView};
use crate::domain::player::Seat;
use crate::domain::settlement::RoundResult;
use crate::domain::tricks::TrickState;
use crate::domain::{
    apply_ante_exemptions, apply_eliminations, apply_payments, collect_antes, deal_round,
    determine_winner, play_card, Card, GameState,
};
use crate::error::EngineError;

/// How a round ended, for the game loop.
#[derive(Debug, Clone)]
pub enum RoundOutcome {
    /// Every seat folded; the pot carries over.
    AllFolded,
    /// One seat stayed in and took the pot without trick play.
    SingleWinner(Seat),
    /// The round was played out and settled.
    Played(RoundResult),
}

/// Drives one round over the shared state. The driver owns no state itself;
/// it borrows the table, one decider per seat, and the event sink.
pub struct RoundDriver<'a> {
    pub state: &'a mut GameState,
    pub deciders: &'a [Box<dyn Decider>],
    pub notifier: &'a mut dyn Notifier,
}

impl<'a> RoundDriver<'a> {
    /// Run one full round. Assumes per-round flags were reset and at least
    /// two seats are active.
    pub fn run_round(&mut self, round: u32) -> Result<RoundOutcome, EngineError> {
        self.notifier.notify(&TableEvent::RoundStarted {
            round,
            dealer: self.state.dealer,
            ante: self.state.ante,
        });

        let posted = collect_antes(self.state);
        self.notifier.notify(&TableEvent::AntesPosted {
            posted,
            pot: self.state.pot,
        });

        let hand_size = deal_round(self.state)?;
        self.notifier.notify(&TableEvent::HandsDealt { hand_size });
        if let Some(card) = self.state.trump_card {
            self.notifier.notify(&TableEvent::TrumpRevealed { card });
        }
        self.state.check_conservation()?;

        self.decision_phase()?;

        if self.state.playing_count() == 0 {
            self.notifier.notify(&TableEvent::AllFolded);
            return Ok(RoundOutcome::AllFolded);
        }
        if let Some(seat) = self.single_playing_seat() {
            self.award_single_winner(seat);
            return Ok(RoundOutcome::SingleWinner(seat));
        }

        self.discard_phase()?;
        self.state.check_conservation()?;

        let tricks = self.trick_phase()?;
        self.state.check_conservation()?;
        let result = determine_winner(&tricks);
        apply_ante_exemptions(&mut self.state.players, &result);
        let pot_before = apply_payments(self.state, &result);
        self.notifier.notify(&TableEvent::RoundSettled {
            result: result.clone(),
            pot_before,
        });
        for seat in apply_eliminations(&mut self.state.players, Some(&result)) {
            self.notifier.notify(&TableEvent::PlayerEliminated { seat });
        }
        Ok(RoundOutcome::Played(result))
    }

    /// Ask every active seat to commit or fold. All-in seats are committed
    /// without being asked.
    fn decision_phase(&mut self) -> Result<(), EngineError> {
        for seat in self.state.active_seats() {
            let player = &self.state.players[seat as usize];
            if player.all_in {
                self.state.players[seat as usize].passed = false;
                self.notifier.notify(&TableEvent::DecisionMade {
                    seat,
                    played: true,
                    all_in: true,
                });
                continue;
            }
            let view = self.seat_view(seat, None)?;
            let decision = self.deciders[seat as usize]
                .decide_play_or_fold(&view)
                .map_err(|e| EngineError::decision(seat, "play decision", e))?;
            let played = decision == PlayOrFold::Play;
            self.state.players[seat as usize].passed = !played;
            debug!(seat, played, "play decision");
            self.notifier.notify(&TableEvent::DecisionMade {
                seat,
                played,
                all_in: false,
            });
        }
        Ok(())
    }

    fn single_playing_seat(&self) -> Option<Seat> {
        let playing = self.state.playing_seats();
        match playing.as_slice() {
            [seat] => Some(*seat),
            _ => None,
        }
    }

    /// Sole remaining seat takes the whole pot; broke seats fall out and
    /// all-in flags clear for the survivors.
    fn award_single_winner(&mut self, seat: Seat) {
        let amount = self.state.pot;
        self.state.players[seat as usize].chips += amount;
        self.state.pot = 0;
        self.notifier
            .notify(&TableEvent::SinglePlayerWin { seat, amount });
        for fallen in apply_eliminations(&mut self.state.players, None) {
            self.notifier
                .notify(&TableEvent::PlayerEliminated { seat: fallen });
        }
        for p in self.state.players.iter_mut().filter(|p| p.active) {
            p.all_in = false;
        }
    }

    /// Folded hands go to the discard pile, then each seat still in may
    /// exchange cards one-for-one from the deck.
    fn discard_phase(&mut self) -> Result<(), EngineError> {
        let mut folded: Vec<Card> = Vec::new();
        for p in self.state.players.iter_mut().filter(|p| p.passed) {
            folded.extend(p.hand.drain(..));
        }
        self.state.deck.discard_all(folded);

        for seat in self.state.playing_seats() {
            if self.state.deck.len() <= 5 && self.state.deck.discard_count() > 0 {
                self.state.deck.recycle_discards(&mut self.state.rng);
            }

            let view = self.seat_view(seat, None)?;
            let choice = self.deciders[seat as usize]
                .choose_discards(&view)
                .map_err(|e| EngineError::decision(seat, "discard", e))?;
            let indices = match self.normalize_discards(seat, choice) {
                Some(indices) => indices,
                None => continue,
            };

            // Replacements are drawn before the old cards hit the pile, so
            // a seat can never draw back what it just let go.
            let mut removed = Vec::with_capacity(indices.len());
            for &i in &indices {
                removed.push(self.state.players[seat as usize].hand.remove(i));
            }
            for _ in 0..removed.len() {
                if self.state.deck.is_empty() {
                    self.state.deck.recycle_discards(&mut self.state.rng);
                }
                if let Some(card) = self.state.deck.draw() {
                    self.state.players[seat as usize].hand.push(card);
                }
            }
            let count = removed.len();
            self.state.deck.discard_all(removed);
            self.notifier.notify(&TableEvent::DiscardsMade { seat, count });
        }
        Ok(())
    }

    /// Validate a discard choice against the seat's hand. Returns indices
    /// sorted descending (safe for sequential removal), or `None` to skip.
    fn normalize_discards(&self, seat: Seat, choice: DiscardChoice) -> Option<Vec<usize>> {
        let mut indices = match choice {
            DiscardChoice::Skip => return None,
            DiscardChoice::Discard(indices) if indices.is_empty() => return None,
            DiscardChoice::Discard(indices) => indices,
        };
        let hand_len = self.state.players[seat as usize].hand.len();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();
        if indices.iter().any(|&i| i >= hand_len) {
            warn!(seat, ?indices, hand_len, "discard indices out of range, keeping hand");
            return None;
        }
        Some(indices)
    }

    /// Play out every trick; the winner of one trick leads the next.
    /// Returns the per-seat trick tally in table order.
    fn trick_phase(&mut self) -> Result<Vec<(Seat, u8)>, EngineError> {
        let playing = self.state.playing_seats();
        let mut tricks: Vec<(Seat, u8)> = playing.iter().map(|&s| (s, 0)).collect();

        let mut lead_seat = self.state.next_playing_seat(self.state.dealer);
        let total = playing
            .first()
            .map(|&s| self.state.players[s as usize].hand.len() as u8)
            .unwrap_or(0);

        for trick_no in 1..=total {
            let mut trick = TrickState::new();
            let mut seat = lead_seat;
            for _ in 0..playing.len() {
                if !self.state.players[seat as usize].hand.is_empty() {
                    self.play_one_card(seat, &mut trick)?;
                }
                seat = self.state.next_playing_seat(seat);
            }
            // Played cards go to the pile so the full deck stays accounted
            // for between phases.
            self.state
                .deck
                .discard_all(trick.plays.iter().map(|&(_, c)| c));
            if let Some(winner) = trick.winner() {
                if let Some(entry) = tricks.iter_mut().find(|(s, _)| *s == winner) {
                    entry.1 += 1;
                }
                self.notifier.notify(&TableEvent::TrickWon {
                    seat: winner,
                    trick: trick_no,
                    of: total,
                });
                lead_seat = winner;
            }
        }
        Ok(tricks)
    }

    /// Obtain one card from the seat's decider, normalizing an illegal
    /// answer to the first legal card, and play it into the trick.
    fn play_one_card(&mut self, seat: Seat, trick: &mut TrickState) -> Result<(), EngineError> {
        let view = self.seat_view(seat, Some(trick))?;
        let legal = view.legal_plays();
        let chosen = self.deciders[seat as usize]
            .choose_card(&view)
            .map_err(|e| EngineError::decision(seat, "card play", e))?;
        let card = if legal.contains(&chosen) {
            chosen
        } else {
            warn!(seat, %chosen, "illegal card choice, playing first legal card");
            legal[0]
        };
        let outcome = play_card(self.state, trick, seat, card)?;
        self.notifier.notify(&TableEvent::CardPlayed {
            seat,
            card: outcome.card,
            took_lead: outcome.took_lead,
        });
        Ok(())
    }

    fn seat_view(&self, seat: Seat, trick: Option<&TrickState>) -> Result<SeatView, EngineError> {
        let trump = self.state.require_trump("seat view")?;
        let player = &self.state.players[seat as usize];
        Ok(SeatView {
            seat,
            hand: player.hand.clone(),
            chips: player.chips,
            pot: self.state.pot,
            ante: self.state.ante,
            trump,
            mode: self.state.mode,
            active_players: self.state.active_count(),
            lead: trick.and_then(|t| t.lead),
            best_card: trick.and_then(|t| t.best.map(|(_, c)| c)),
            trick_plays: trick.map(|t| t.plays.clone()).unwrap_or_default(),
        })
    }
}
