use anyhow::Context;
use blackjack_console::{Cli, ConsoleDisplay, ConsolePrompt};
use blackjack_lib::BlackjackGame;
use clap::Parser;
use log::info;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!("starting a session with {:?}", config);

    let stdin = io::stdin();
    let input = ConsolePrompt::new(stdin.lock(), io::stdout());
    let display = ConsoleDisplay::new(io::stdout());
    let mut game =
        BlackjackGame::new(config, input, display).context("could not start the game")?;
    let summary = game.run().context("the game stopped unexpectedly")?;

    println!("\nThanks for playing Blackjack!");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
