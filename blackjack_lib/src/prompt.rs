//! The seams between the game and the outside world. The game asks a [`BetPrompt`] for a bet,
//! an [`ActionPrompt`] for the option to play on each hand and tells a [`TableDisplay`] what is
//! happening at the table. None of the game's rules depend on what the display does.

use crate::card::Card;
use crate::money::Money;
use crate::player::PlayerAction;
use crate::settlement::HandSettlement;
use crate::BlackjackGameError;
use std::collections::BTreeSet;

/// The answer to a request for a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetDecision {
    Bet(u32),
    Quit,
}

/// Checks that `bet` is at least `min_bet` and no more than the player's `balance`.
pub fn validate_bet(bet: u32, min_bet: u32, balance: Money) -> Result<u32, BlackjackGameError> {
    if bet < min_bet {
        Err(BlackjackGameError::InvalidBet(format!(
            "{} is less than the minimum bet of {}",
            bet, min_bet
        )))
    } else if Money::from(bet) > balance {
        Err(BlackjackGameError::InvalidBet(format!(
            "{} is more than your balance of {}",
            bet, balance
        )))
    } else {
        Ok(bet)
    }
}

/// A snapshot of the table handed to the collaborators, purely for presentation and decisions.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub dealers_cards: &'a [Card],
    /// When true the dealer's first card is face down.
    pub hide_hole_card: bool,
    /// The dealer's total, `None` while a card is face down.
    pub dealer_total: Option<u8>,
    pub players_cards: &'a [Card],
    pub player_total: u8,
    pub hand_index: usize,
    pub hand_count: usize,
    pub bet: u32,
}

/// Trait for anything that can collect a bet from the player. Implementers re-prompt on their own
/// until they hold a valid bet (see [`validate_bet`]) or the player quits.
pub trait BetPrompt {
    fn request_bet(
        &mut self,
        min_bet: u32,
        balance: Money,
    ) -> Result<BetDecision, BlackjackGameError>;
}

/// Trait for anything that can choose how to play the current hand.
pub trait ActionPrompt {
    /// Takes the current state of the table and the set of legal `options` and returns the option
    /// to play. Input that cannot be understood is returned as a recoverable error, the game
    /// reports it and asks again for the same hand.
    fn decide_option(
        &mut self,
        view: &TableView<'_>,
        options: &BTreeSet<PlayerAction>,
    ) -> Result<PlayerAction, BlackjackGameError>;
}

/// Trait for presenting the table to the player.
pub trait TableDisplay {
    fn show_table(&mut self, view: &TableView<'_>);

    fn show_shuffle(&mut self) {}

    /// Called after a double down or a split raised the bet.
    fn show_bet_raised(&mut self, _action: PlayerAction, _bet: u32) {}

    fn show_settlement(&mut self, _settlement: &HandSettlement, _dealer_total: u8) {}

    fn show_balance(&mut self, _balance: Money) {}

    fn show_error(&mut self, _error: &BlackjackGameError) {}
}
