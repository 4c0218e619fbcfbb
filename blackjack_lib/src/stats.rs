use crate::money::Money;
use serde::Serialize;
use std::fmt::Display;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    Quit,
    OutOfFunds,
}

/// Simple struct for recording all of the interesting data points accumulated during a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub wins: i32,
    pub pushes: i32,
    pub losses: i32,
    pub player_blackjacks: i32,
    pub winnings: Money,
    pub starting_balance: Money,
    pub final_balance: Money,
    pub ended_by: SessionEnd,
}

impl Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 80;
        const TEXT_WIDTH: usize = "number of player blackjacks".len() + 20;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        let ended_by = match self.ended_by {
            SessionEnd::Quit => "quit",
            SessionEnd::OutOfFunds => "out of funds",
        };
        writeln!(f, "{:-^WIDTH$}", "stats")?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "rounds played", self.rounds_played)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "hands won", self.wins)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "hands pushed", self.pushes)?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "hands lost", self.losses)?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "number of player blackjacks", self.player_blackjacks
        )?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "winnings", self.winnings)?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "starting balance", self.starting_balance
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "final balance", self.final_balance
        )?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "ended by", ended_by)?;
        write!(f, "{}", "-".repeat(WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SessionSummary {
        SessionSummary {
            rounds_played: 3,
            wins: 2,
            pushes: 0,
            losses: 1,
            player_blackjacks: 1,
            winnings: Money::from_units(15),
            starting_balance: Money::from_units(100),
            final_balance: Money::from_units(115),
            ended_by: SessionEnd::Quit,
        }
    }

    #[test]
    fn display_is_a_fixed_width_table() {
        let text = summary().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
        assert!(lines[7].starts_with("starting balance"));
        assert!(lines[8].ends_with("115.00"));
        assert!(lines[9].ends_with("quit"));
    }

    #[test]
    fn serializes_amounts_as_numbers() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["final_balance"], serde_json::json!(115.0));
        assert_eq!(json["ended_by"], serde_json::json!("quit"));
    }
}
