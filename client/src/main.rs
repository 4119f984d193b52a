mod config;
mod render;
mod state;

use clap::Parser;
use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionState};
use common::{log, logger};
use std::io::BufRead;
use tokio::sync::mpsc;

use config::get_config_manager;
use render::{TerminalBroadcaster, render_history};
use state::{ClientCommand, HELP_TEXT, parse_command, parse_play_mode};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent: `bot` or `human`
    #[arg(long)]
    mode: Option<String>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut settings = config.tictactoe.to_session_settings();
    if let Some(mode) = args.mode.as_deref() {
        settings.play_mode = parse_play_mode(mode)?;
    }
    if let Some(bot_delay_ms) = args.bot_delay_ms {
        settings.bot_delay_ms = bot_delay_ms;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log!("Starting game with seed {}", seed);

    let session_state = TicTacToeSessionState::create("terminal", &settings, seed)?;
    let broadcaster = TerminalBroadcaster;

    println!("{}", HELP_TEXT);
    TicTacToeSession::start(&session_state, &broadcaster).await;

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => {
                    if command_tx.send(command).is_err() {
                        return;
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        let _ = command_tx.send(ClientCommand::Quit);
    });

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Game(game_command) => {
                let result =
                    TicTacToeSession::handle_command(&session_state, game_command, &broadcaster).await;
                if let Err(e) = result {
                    println!("{}", e);
                }
            }
            ClientCommand::ShowHistory => {
                let snapshot = TicTacToeSession::snapshot(&session_state).await;
                println!("{}", render_history(&snapshot));
            }
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => break,
        }
    }

    log!("Game closed");
    Ok(())
}
