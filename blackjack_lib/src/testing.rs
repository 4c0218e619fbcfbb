//! Scripted collaborators for driving rounds and sessions in tests.

use crate::card::Card;
use crate::money::Money;
use crate::player::PlayerAction;
use crate::prompt::{ActionPrompt, BetDecision, BetPrompt, TableDisplay, TableView};
use crate::settlement::{HandSettlement, Outcome};
use crate::BlackjackGameError;
use std::collections::{BTreeSet, VecDeque};

/// Plays back a fixed list of bets and actions. Once the script runs out the player quits.
#[derive(Default)]
pub struct ScriptedInput {
    bets: VecDeque<BetDecision>,
    actions: VecDeque<Result<PlayerAction, BlackjackGameError>>,
    pub prompts: usize,
    pub offered: Vec<BTreeSet<PlayerAction>>,
}

impl ScriptedInput {
    pub fn new(actions: Vec<Result<PlayerAction, BlackjackGameError>>) -> ScriptedInput {
        ScriptedInput {
            actions: actions.into(),
            ..Default::default()
        }
    }

    pub fn actions(actions: &[PlayerAction]) -> ScriptedInput {
        ScriptedInput::new(actions.iter().map(|&a| Ok(a)).collect())
    }

    pub fn with_bets(mut self, bets: &[BetDecision]) -> ScriptedInput {
        self.bets = bets.iter().copied().collect();
        self
    }
}

impl BetPrompt for ScriptedInput {
    fn request_bet(
        &mut self,
        _min_bet: u32,
        _balance: Money,
    ) -> Result<BetDecision, BlackjackGameError> {
        Ok(self.bets.pop_front().unwrap_or(BetDecision::Quit))
    }
}

impl ActionPrompt for ScriptedInput {
    fn decide_option(
        &mut self,
        _view: &TableView<'_>,
        options: &BTreeSet<PlayerAction>,
    ) -> Result<PlayerAction, BlackjackGameError> {
        self.prompts += 1;
        self.offered.push(options.clone());
        self.actions.pop_front().unwrap_or(Ok(PlayerAction::Quit))
    }
}

/// An owned copy of a [`TableView`].
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    pub hide_hole_card: bool,
    pub dealer_total: Option<u8>,
    pub players_cards: Vec<Card>,
    pub player_total: u8,
    pub hand_index: usize,
    pub bet: u32,
}

/// Records everything the game shows.
#[derive(Default)]
pub struct RecordingDisplay {
    pub tables: Vec<TableSnapshot>,
    pub shuffles: usize,
    pub raised: Vec<(PlayerAction, u32)>,
    pub settlements: Vec<(Outcome, Money)>,
    pub balances: Vec<Money>,
    pub errors: Vec<String>,
}

impl TableDisplay for RecordingDisplay {
    fn show_table(&mut self, view: &TableView<'_>) {
        self.tables.push(TableSnapshot {
            hide_hole_card: view.hide_hole_card,
            dealer_total: view.dealer_total,
            players_cards: view.players_cards.to_vec(),
            player_total: view.player_total,
            hand_index: view.hand_index,
            bet: view.bet,
        });
    }

    fn show_shuffle(&mut self) {
        self.shuffles += 1;
    }

    fn show_bet_raised(&mut self, action: PlayerAction, bet: u32) {
        self.raised.push((action, bet));
    }

    fn show_settlement(&mut self, settlement: &HandSettlement, _dealer_total: u8) {
        self.settlements.push((settlement.outcome, settlement.amount));
    }

    fn show_balance(&mut self, balance: Money) {
        self.balances.push(balance);
    }

    fn show_error(&mut self, error: &BlackjackGameError) {
        self.errors.push(error.to_string());
    }
}
