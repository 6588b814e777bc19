//! Terminal front end: event rendering and interactive prompts.

use std::io::{self, BufRead, Write};

use crate::ai::{Decider, DecisionError, DiscardChoice, PlayOrFold, SeatView};
use crate::domain::player::Seat;
use crate::domain::{Card, Outcome};
use crate::engine::{Notifier, TableEvent};

/// Renders table events as plain text, resolving seats to player names.
pub struct ConsoleNotifier {
    names: Vec<String>,
}

impl ConsoleNotifier {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    fn name(&self, seat: Seat) -> &str {
        self.names
            .get(seat as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    fn name_list(&self, seats: &[Seat]) -> String {
        seats
            .iter()
            .map(|&s| self.name(s).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, event: &TableEvent) {
        match event {
            TableEvent::RoundStarted {
                round,
                dealer,
                ante,
            } => {
                println!();
                println!(
                    "=== Round {round}: {} deals, ante {ante} ===",
                    self.name(*dealer)
                );
            }
            TableEvent::AntesPosted { pot, .. } => {
                println!("Antes posted. Pot: {pot}");
            }
            TableEvent::HandsDealt { hand_size } => {
                println!("Dealt {hand_size} cards to each player.");
            }
            TableEvent::TrumpRevealed { card } => {
                println!("Trump card: {card} ({:?} are trump)", card.suit);
            }
            TableEvent::DecisionMade {
                seat,
                played,
                all_in,
            } => {
                let name = self.name(*seat);
                if *all_in {
                    println!("{name} is all-in and must play.");
                } else if *played {
                    println!("{name} plays.");
                } else {
                    println!("{name} folds.");
                }
            }
            TableEvent::AllFolded => {
                println!("Everyone folded. The pot carries over.");
            }
            TableEvent::SinglePlayerWin { seat, amount } => {
                println!(
                    "{} is the only player left in and takes the pot ({amount} chips).",
                    self.name(*seat)
                );
            }
            TableEvent::DiscardsMade { seat, count } => {
                println!("{} exchanges {count} card(s).", self.name(*seat));
            }
            TableEvent::CardPlayed {
                seat,
                card,
                took_lead,
            } => {
                let marker = if *took_lead { "  (best so far)" } else { "" };
                println!("{} plays {card}{marker}", self.name(*seat));
            }
            TableEvent::TrickWon { seat, trick, of } => {
                println!("{} wins trick {trick} of {of}.", self.name(*seat));
            }
            TableEvent::RoundSettled { result, pot_before } => {
                for &(seat, tricks) in &result.tricks {
                    println!("  {}: {tricks} trick(s)", self.name(seat));
                }
                match &result.outcome {
                    Outcome::Winner(seat) => {
                        println!(
                            "{} wins the round and collects {pot_before} chips.",
                            self.name(*seat)
                        );
                    }
                    Outcome::Split(seats) => {
                        println!(
                            "Draw between {}. The pot carries over.",
                            self.name_list(seats)
                        );
                    }
                }
                if !result.booray.is_empty() {
                    println!(
                        "Booray! {} took no tricks and must match the pot ({pot_before} chips).",
                        self.name_list(&result.booray)
                    );
                }
            }
            TableEvent::AnteDoubled { ante } => {
                println!("The deal has come around: ante doubles to {ante}.");
            }
            TableEvent::PlayerEliminated { seat } => {
                println!("{} is out of chips and eliminated.", self.name(*seat));
            }
            TableEvent::GameOver { seat, chips } => {
                println!();
                println!("Game over: {} wins with {chips} chips!", self.name(*seat));
            }
        }
    }
}

/// Interactive decider reading from stdin. Malformed or illegal answers
/// fall back to the safe choice (fold prompts excepted: anything but "y"
/// folds), matching how the engine normalizes decider output.
pub struct PromptDecider;

impl PromptDecider {
    fn read_line(prompt: &str) -> Result<String, DecisionError> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(DecisionError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn show_hand(hand: &[Card]) {
        let cards = hand
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}:{c}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        println!("Your hand: {cards}");
    }
}

impl Decider for PromptDecider {
    fn decide_play_or_fold(&self, view: &SeatView) -> Result<PlayOrFold, DecisionError> {
        println!();
        Self::show_hand(&view.hand);
        println!(
            "Trump: {:?}  Pot: {}  Ante: {}  Your chips: {}",
            view.trump, view.pot, view.ante, view.chips
        );
        let answer = Self::read_line("Play this round? [y/N] ")?;
        if answer.eq_ignore_ascii_case("y") {
            Ok(PlayOrFold::Play)
        } else {
            Ok(PlayOrFold::Fold)
        }
    }

    fn choose_discards(&self, view: &SeatView) -> Result<DiscardChoice, DecisionError> {
        println!();
        Self::show_hand(&view.hand);
        let answer =
            Self::read_line("Cards to exchange (e.g. \"1 3\"), or press Enter to keep all: ")?;
        if answer.is_empty() {
            return Ok(DiscardChoice::Skip);
        }
        let mut indices = Vec::new();
        for token in answer.split_whitespace() {
            match token.parse::<usize>() {
                Ok(n) if (1..=view.hand.len()).contains(&n) => indices.push(n - 1),
                _ => {
                    println!("Could not read \"{token}\"; keeping your hand.");
                    return Ok(DiscardChoice::Skip);
                }
            }
        }
        Ok(DiscardChoice::Discard(indices))
    }

    fn choose_card(&self, view: &SeatView) -> Result<Card, DecisionError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(DecisionError::InvalidMove(
                "no legal plays available".into(),
            ));
        }
        println!();
        Self::show_hand(&view.hand);
        if let (Some(lead), Some(best)) = (view.lead, view.best_card) {
            println!("Lead suit: {lead:?}  Best on table: {best}");
        } else {
            println!("You lead this trick.");
        }
        let playable = legal
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        println!("Playable: {playable}");

        let answer = Self::read_line("Card to play (number from your hand): ")?;
        let choice = answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=view.hand.len()).contains(n))
            .map(|n| view.hand[n - 1]);
        match choice {
            Some(card) if legal.contains(&card) => Ok(card),
            Some(card) => {
                println!("{card} is not playable here; playing {} instead.", legal[0]);
                Ok(legal[0])
            }
            None => {
                println!("Could not read that; playing {}.", legal[0]);
                Ok(legal[0])
            }
        }
    }
}
