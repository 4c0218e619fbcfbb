use blackjack_lib::{
    validate_bet, ActionPrompt, BetDecision, BetPrompt, BlackjackGameError, Money, PlayerAction,
    TableView,
};
use log::debug;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

/// Reads the player's bets and decisions line by line from `reader`, writing the prompts to
/// `writer`. Reaching the end of the input counts as quitting.
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsolePrompt { reader, writer }
    }

    /// Writes `prompt` and reads one line of input. Returns `None` at the end of the input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, BlackjackGameError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Parses a line typed in answer to the bet prompt.
pub fn parse_bet(
    line: &str,
    min_bet: u32,
    balance: Money,
) -> Result<BetDecision, BlackjackGameError> {
    if line.eq_ignore_ascii_case("q") {
        return Ok(BetDecision::Quit);
    }
    let bet = line
        .parse::<u32>()
        .map_err(|_| BlackjackGameError::InvalidBet(format!("{:?} is not a number", line)))?;
    validate_bet(bet, min_bet, balance).map(BetDecision::Bet)
}

/// Parses a line typed in answer to the action prompt, a single key such as `H` or `s`.
pub fn parse_action(line: &str) -> Result<PlayerAction, BlackjackGameError> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => PlayerAction::from_key(key)
            .ok_or_else(|| BlackjackGameError::UnrecognizedOption(line.to_string())),
        _ => Err(BlackjackGameError::UnrecognizedOption(line.to_string())),
    }
}

/// Formats the available options, e.g. `[H] hit, [S] stand, [Q] quit`.
pub fn format_options(options: &BTreeSet<PlayerAction>) -> String {
    options
        .iter()
        .map(|o| format!("[{}] {}", o.key(), o))
        .collect::<Vec<String>>()
        .join(", ")
}

impl<R: BufRead, W: Write> BetPrompt for ConsolePrompt<R, W> {
    fn request_bet(
        &mut self,
        min_bet: u32,
        balance: Money,
    ) -> Result<BetDecision, BlackjackGameError> {
        let prompt = format!("Place a bet ({} min, {} max, q to quit): ", min_bet, balance);
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(BetDecision::Quit);
            };
            match parse_bet(&line, min_bet, balance) {
                Ok(decision) => return Ok(decision),
                Err(e) => {
                    debug!("rejected bet: {}", e);
                    writeln!(self.writer, "Invalid bet, try again.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> ActionPrompt for ConsolePrompt<R, W> {
    fn decide_option(
        &mut self,
        _view: &TableView<'_>,
        options: &BTreeSet<PlayerAction>,
    ) -> Result<PlayerAction, BlackjackGameError> {
        let prompt = format!("Choose an action: {}: ", format_options(options));
        match self.ask(&prompt)? {
            Some(line) => parse_action(&line),
            None => Ok(PlayerAction::Quit),
        }
    }
}
