use crate::money::Money;
use crate::BlackjackGameError;

/// Struct for configuring a game of blackjack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub starting_balance: Money,
    pub min_bet: u32,
    pub num_decks: usize,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Associated method for returning a new `GameConfigBuilder` object. Allows customization of
    /// the game i.e. the player's starting balance, the minimum bet per hand, how many decks are
    /// used and the seed for shuffling the shoe.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder {
            starting_balance: None,
            min_bet: None,
            num_decks: None,
            seed: None,
        }
    }

    /// Checks that a game can be played with this configuration.
    pub fn validate(&self) -> Result<(), BlackjackGameError> {
        if self.num_decks == 0 {
            return Err(BlackjackGameError::Config(
                "at least one deck is required".to_string(),
            ));
        }
        if self.min_bet == 0 {
            return Err(BlackjackGameError::Config(
                "the minimum bet must be positive".to_string(),
            ));
        }
        if self.starting_balance <= Money::from(self.min_bet) {
            return Err(BlackjackGameError::Config(format!(
                "a starting balance of {} leaves no room for a minimum bet of {}",
                self.starting_balance, self.min_bet
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// Returns the standard configuration: 100 to start with, a minimum bet of 5 and a single deck.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// Struct to implement builder pattern for `GameConfig`
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfigBuilder {
    starting_balance: Option<Money>,
    min_bet: Option<u32>,
    num_decks: Option<usize>,
    seed: Option<u64>,
}

impl GameConfigBuilder {
    /// Method for changing the starting balance of the player.
    pub fn starting_balance(&mut self, balance: Money) -> &mut Self {
        self.starting_balance = Some(balance);
        self
    }

    /// Method for setting the minimum bet for the game
    pub fn min_bet(&mut self, bet: u32) -> &mut Self {
        self.min_bet = Some(bet);
        self
    }

    /// Method for choosing the number of decks used in the game
    pub fn num_decks(&mut self, decks: usize) -> &mut Self {
        self.num_decks = Some(decks);
        self
    }

    /// Method for seeding the shuffles, a game with a seed deals the same cards every time.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `GameConfig` object from the given `GameConfigBuilder` object.
    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            starting_balance: self.starting_balance.unwrap_or(Money::from_units(100)),
            min_bet: self.min_bet.unwrap_or(5),
            num_decks: self.num_decks.unwrap_or(1),
            seed: self.seed,
        }
    }
}
