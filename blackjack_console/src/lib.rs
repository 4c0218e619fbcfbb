//! Terminal front end for `blackjack_lib`: reads bets and decisions from a line based input,
//! renders the table as ASCII cards and loads the game configuration.

pub mod config;
pub mod console;

pub use config::{Cli, ConfigFile};
pub use console::{ConsoleDisplay, ConsolePrompt};
