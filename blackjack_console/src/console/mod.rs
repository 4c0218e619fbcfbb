//! Terminal front end: reads the player's choices from a line based reader and draws the table as
//! ASCII art.

pub mod input;
pub mod render;

pub use input::ConsolePrompt;

use blackjack_lib::{
    BlackjackGameError, HandSettlement, Money, PlayerAction, TableDisplay, TableView,
};
use log::warn;
use std::io::Write;

/// Writes the state of the table to `writer`.
pub struct ConsoleDisplay<W> {
    writer: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(writer: W) -> Self {
        ConsoleDisplay { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush()) {
            warn!("failed to write to the console: {}", e);
        }
    }
}

impl<W: Write> TableDisplay for ConsoleDisplay<W> {
    fn show_table(&mut self, view: &TableView<'_>) {
        let table = render::render_table(view);
        self.line(&format!("\n{}", table));
    }

    fn show_shuffle(&mut self) {
        self.line("Shuffling deck");
    }

    fn show_bet_raised(&mut self, action: PlayerAction, bet: u32) {
        let verb = match action {
            PlayerAction::Split => "Splitting!",
            _ => "Doubling down!",
        };
        self.line(&format!("{} Your current bet is now {}.", verb, bet));
    }

    fn show_settlement(&mut self, settlement: &HandSettlement, dealer_total: u8) {
        let payment = if settlement.amount.is_positive() {
            format!("Dealer pays you {}.", settlement.amount)
        } else if settlement.amount.is_negative() {
            format!("You pay the dealer {}.", settlement.amount.abs())
        } else {
            "No money changes hands.".to_string()
        };
        self.line(&format!(
            "Hand {}: {} against the dealer's {}. {} {}",
            settlement.hand_index + 1,
            settlement.players_hand,
            dealer_total,
            settlement.outcome,
            payment
        ));
    }

    fn show_balance(&mut self, balance: Money) {
        self.line(&format!("You now have {} currency.", balance));
    }

    fn show_error(&mut self, error: &BlackjackGameError) {
        self.line(&format!("{}, try again.", error));
    }
}
