//! Module that runs a whole session of blackjack, one round after another, until the player quits
//! or no longer has more than the minimum bet.

use crate::config::GameConfig;
use crate::deck::Deck;
use crate::money::Money;
use crate::prompt::{validate_bet, ActionPrompt, BetDecision, BetPrompt, TableDisplay};
use crate::stats::{SessionEnd, SessionSummary};
use crate::table::{BlackjackTable, RoundResult};
use crate::BlackjackGameError;
use log::{debug, info};

/// Struct that provides the functionality to play a session of blackjack.
/// This struct saves all of the necessary data for reporting the stats of the session as well.
pub struct BlackjackGame<P, D>
where
    P: BetPrompt + ActionPrompt,
    D: TableDisplay,
{
    config: GameConfig,
    table: BlackjackTable,
    input: P,
    display: D,
    balance: Money,
    rounds_played: u32,
    total_wins: i32,
    total_pushes: i32,
    total_losses: i32,
    total_winnings: Money,
    num_player_blackjacks: i32,
    ended_by: Option<SessionEnd>,
}

impl<P, D> BlackjackGame<P, D>
where
    P: BetPrompt + ActionPrompt,
    D: TableDisplay,
{
    /// Associated method for building a new blackjack game with a freshly shuffled shoe.
    /// `input` collects bets and decisions from the player, `display` presents the table.
    pub fn new(config: GameConfig, input: P, display: D) -> Result<Self, BlackjackGameError> {
        let table = BlackjackTable::new(Deck::new(config.num_decks, config.seed));
        BlackjackGame::with_table(config, table, input, display)
    }

    /// Associated method for building a new blackjack game played at `table`.
    pub fn with_table(
        config: GameConfig,
        table: BlackjackTable,
        input: P,
        display: D,
    ) -> Result<Self, BlackjackGameError> {
        config.validate()?;
        Ok(BlackjackGame {
            config,
            table,
            input,
            display,
            balance: config.starting_balance,
            rounds_played: 0,
            total_wins: 0,
            total_pushes: 0,
            total_losses: 0,
            total_winnings: Money::ZERO,
            num_player_blackjacks: 0,
            ended_by: None,
        })
    }

    /// Getter method for the players current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Method for determining whether the player can continue to play or not
    pub fn continue_play(&self) -> bool {
        self.balance > Money::from(self.config.min_bet)
    }

    /// Method that runs rounds until the player quits or runs out of funds.
    pub fn run(&mut self) -> Result<SessionSummary, BlackjackGameError> {
        while self.ended_by.is_none() {
            if !self.continue_play() {
                info!(
                    "balance of {} is at or below the minimum bet of {}",
                    self.balance, self.config.min_bet
                );
                self.ended_by = Some(SessionEnd::OutOfFunds);
                break;
            }
            self.play_round()?;
        }
        Ok(self.summary())
    }

    /// Plays a single round: shuffles when needed, takes the bet, plays the hands and settles them.
    /// A bet outside the limits is reported and asked for again.
    fn play_round(&mut self) -> Result<(), BlackjackGameError> {
        if self.table.prepare_deck() {
            self.display.show_shuffle();
        }

        let bet = loop {
            let decision = match self.input.request_bet(self.config.min_bet, self.balance) {
                Ok(decision) => decision,
                Err(e) if e.is_recoverable() => {
                    self.display.show_error(&e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            match decision {
                BetDecision::Bet(b) => match validate_bet(b, self.config.min_bet, self.balance) {
                    Ok(bet) => break bet,
                    Err(e) => {
                        debug!("rejected bet: {}", e);
                        self.display.show_error(&e);
                    }
                },
                BetDecision::Quit => {
                    self.ended_by = Some(SessionEnd::Quit);
                    return Ok(());
                }
            }
        };
        info!("round {} for a bet of {}", self.rounds_played + 1, bet);

        let report = match self
            .table
            .play_round(bet, self.balance, &mut self.input, &mut self.display)?
        {
            RoundResult::Settled(report) => report,
            RoundResult::Quit => {
                self.ended_by = Some(SessionEnd::Quit);
                return Ok(());
            }
        };

        self.rounds_played += 1;
        for settlement in report.settlements.iter() {
            if settlement.outcome.is_win() {
                self.total_wins += 1;
            } else if settlement.outcome.is_loss() {
                self.total_losses += 1;
            } else {
                self.total_pushes += 1;
            }
        }
        self.num_player_blackjacks += report.player_blackjacks as i32;
        let net = report.net();
        self.total_winnings += net;
        self.balance += net;
        self.display.show_balance(self.balance);
        Ok(())
    }

    /// Method to get a `SessionSummary` object derived from the current data recorded in `self`.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rounds_played: self.rounds_played,
            wins: self.total_wins,
            pushes: self.total_pushes,
            losses: self.total_losses,
            player_blackjacks: self.num_player_blackjacks,
            winnings: self.total_winnings,
            starting_balance: self.config.starting_balance,
            final_balance: self.balance,
            ended_by: self.ended_by.unwrap_or(SessionEnd::Quit),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::player::PlayerAction;
    use crate::settlement::Outcome;
    use crate::testing::{RecordingDisplay, ScriptedInput};

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn stacked_table(ranks: &[Rank]) -> BlackjackTable {
        BlackjackTable::new(Deck::stacked(
            1,
            ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect(),
        ))
    }

    #[test]
    fn losing_round_then_quit() {
        let table = stacked_table(&[
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Nine,
            Rank::Eight,
            Rank::Four,
        ]);
        let input = ScriptedInput::actions(&[PlayerAction::Hit, PlayerAction::Stand])
            .with_bets(&[BetDecision::Bet(10)]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        let summary = game.run().unwrap();
        assert_eq!(game.balance(), units(90));
        assert_eq!(summary.final_balance, units(90));
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.winnings, -units(10));
        assert_eq!(summary.ended_by, SessionEnd::Quit);
        assert_eq!(game.display.balances, vec![units(90)]);
        assert_eq!(game.display.settlements, vec![(Outcome::DealerHigher, -units(10))]);
    }

    #[test]
    fn natural_pays_one_and_a_half_times_the_bet() {
        let table = stacked_table(&[Rank::Ace, Rank::King, Rank::Ten, Rank::Five]);
        let input = ScriptedInput::default().with_bets(&[BetDecision::Bet(10)]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.final_balance, units(115));
        assert_eq!(summary.player_blackjacks, 1);
        assert_eq!(summary.wins, 1);
    }

    #[test]
    fn quit_mid_round_leaves_balance_unchanged() {
        let table = stacked_table(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Nine]);
        let input =
            ScriptedInput::actions(&[PlayerAction::Quit]).with_bets(&[BetDecision::Bet(50)]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.final_balance, units(100));
        assert_eq!(summary.rounds_played, 0);
        assert_eq!(summary.ended_by, SessionEnd::Quit);
        assert!(game.display.settlements.is_empty());
    }

    #[test]
    fn session_ends_at_the_minimum_bet() {
        // player 10 9, dealer 10 Q: the player loses 5 and is left with exactly the minimum bet
        let table = stacked_table(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Queen]);
        let config = GameConfig::new().starting_balance(units(10)).min_bet(5).build();
        let input = ScriptedInput::actions(&[PlayerAction::Stand])
            .with_bets(&[BetDecision::Bet(5), BetDecision::Bet(5)]);
        let mut game =
            BlackjackGame::with_table(config, table, input, RecordingDisplay::default()).unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.final_balance, units(5));
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.ended_by, SessionEnd::OutOfFunds);
    }

    #[test]
    fn shoe_is_reshuffled_before_the_next_deal() {
        let table = stacked_table(&[
            Rank::Ten,
            Rank::Nine,
            Rank::Ten,
            Rank::Eight,
            Rank::Two,
        ]);
        let input = ScriptedInput::actions(&[PlayerAction::Stand])
            .with_bets(&[BetDecision::Bet(10)]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        game.run().unwrap();
        // one card left after the first round, the second round reshuffles before asking for a bet
        assert_eq!(game.display.shuffles, 1);
        assert_eq!(game.table.deck().remaining(), 52);
        assert_eq!(game.balance(), units(110));
    }

    #[test]
    fn bet_outside_the_limits_is_asked_again() {
        let table = stacked_table(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Eight]);
        let input = ScriptedInput::actions(&[PlayerAction::Stand]).with_bets(&[
            BetDecision::Bet(1000),
            BetDecision::Bet(2),
            BetDecision::Bet(10),
        ]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        let summary = game.run().unwrap();
        assert_eq!(game.display.errors.len(), 2);
        assert!(game.display.errors[0].starts_with("invalid bet"));
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.final_balance, units(110));
    }

    #[test]
    fn large_balances_settle_exactly() {
        // player 10 9 stands against the dealer's 10 8
        let table = stacked_table(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Eight]);
        let config = GameConfig::new()
            .starting_balance(units(20_000_001))
            .build();
        let input = ScriptedInput::actions(&[PlayerAction::Stand])
            .with_bets(&[BetDecision::Bet(5)]);
        let mut game =
            BlackjackGame::with_table(config, table, input, RecordingDisplay::default()).unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.starting_balance, units(20_000_001));
        assert_eq!(summary.winnings, units(5));
        assert_eq!(summary.final_balance, units(20_000_006));
        assert_eq!(summary.final_balance.to_string(), "20000006.00");
    }

    #[test]
    fn natural_pays_exactly_on_a_large_odd_bet() {
        let table = stacked_table(&[Rank::Ace, Rank::King, Rank::Ten, Rank::Five]);
        let config = GameConfig::new()
            .starting_balance(units(40_000_000))
            .build();
        let input = ScriptedInput::default().with_bets(&[BetDecision::Bet(16_777_217)]);
        let mut game =
            BlackjackGame::with_table(config, table, input, RecordingDisplay::default()).unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.winnings, Money::from_cents(2_516_582_550));
        assert_eq!(summary.final_balance.to_string(), "65165825.50");
    }

    #[test]
    fn both_naturals_count_the_players_blackjack() {
        let table = stacked_table(&[Rank::Ace, Rank::King, Rank::Ace, Rank::Queen]);
        let input = ScriptedInput::default().with_bets(&[BetDecision::Bet(10)]);
        let mut game = BlackjackGame::with_table(
            GameConfig::default(),
            table,
            input,
            RecordingDisplay::default(),
        )
        .unwrap();

        let summary = game.run().unwrap();
        assert_eq!(summary.player_blackjacks, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.final_balance, units(90));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::new().num_decks(0).build();
        let result = BlackjackGame::new(
            config,
            ScriptedInput::default(),
            RecordingDisplay::default(),
        );
        assert!(result.is_err());
    }
}
