//! Core library for a single player game of blackjack against a scripted dealer.
//!
//! The library owns every rule of the game: building and dealing the shoe, evaluating hands,
//! resolving the player's options (hit, stand, double down, split), playing the dealer's fixed
//! policy and settling each wager. Collecting input and rendering the table are left to the
//! implementers of the traits in [`prompt`].

pub mod card;
pub mod config;
pub mod deck;
pub mod game;
pub mod hand;
pub mod money;
pub mod player;
pub mod prompt;
pub mod settlement;
pub mod stats;
pub mod table;
#[cfg(test)]
mod testing;

use thiserror::Error;

pub use card::{Card, Rank, Suit};
pub use config::{GameConfig, GameConfigBuilder};
pub use deck::Deck;
pub use game::BlackjackGame;
pub use hand::{can_split_cards, is_busted, is_natural, sum_cards, Hand};
pub use money::Money;
pub use player::{HandStatus, PlayerAction, PlayerHand, RoundState};
pub use prompt::{validate_bet, ActionPrompt, BetDecision, BetPrompt, TableDisplay, TableView};
pub use settlement::{HandSettlement, Outcome, RoundReport};
pub use stats::{SessionEnd, SessionSummary};
pub use table::{BlackjackTable, RoundResult};

pub mod prelude {
    pub use super::{
        ActionPrompt, BetDecision, BetPrompt, BlackjackGame, BlackjackGameError, BlackjackTable,
        Card, Deck, GameConfig, Hand, Money, Outcome, PlayerAction, Rank, SessionSummary, Suit,
        TableDisplay, TableView,
    };
}

/// Error type shared by every fallible operation of the game.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    #[error("invalid bet: {0}")]
    InvalidBet(String),
    #[error("unrecognized option: {0}")]
    UnrecognizedOption(String),
    #[error("option not available: {0}")]
    OptionUnavailable(PlayerAction),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlackjackGameError {
    /// Returns true for errors caused by bad player input. These are reported and the player is
    /// prompted again, they never end the game.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BlackjackGameError::InvalidBet(_)
                | BlackjackGameError::UnrecognizedOption(_)
                | BlackjackGameError::OptionUnavailable(_)
        )
    }
}
