use common::games::tictactoe::{PlayMode, PlayerNames, Position, SessionCommand};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    Game(SessionCommand),
    ShowHistory,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8                 place your mark (cells are numbered row by row)
  jump <n>            view the board after move n (0 = game start)
  back | forward      step through the move history
  history             list the recorded moves
  mode bot | human    play against the bot or another human
  names <x> <o>       set player names (human vs human only)
  help                show this text
  quit                leave the game";

/// Parses one line of terminal input.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    let command = match (keyword.to_ascii_lowercase().as_str(), args.as_slice()) {
        (cell, []) if cell.parse::<Position>().is_ok() => {
            ClientCommand::Game(SessionCommand::PlaceMark(parse_index(cell)?))
        }
        ("jump", [index]) => ClientCommand::Game(SessionCommand::JumpTo(parse_index(index)?)),
        ("back", []) => ClientCommand::Game(SessionCommand::StepBack),
        ("forward", []) => ClientCommand::Game(SessionCommand::StepForward),
        ("mode", [mode]) => ClientCommand::Game(SessionCommand::SetPlayMode(parse_play_mode(mode)?)),
        ("names", [player_x, player_o]) => {
            ClientCommand::Game(SessionCommand::SetPlayerNames(PlayerNames::new(*player_x, *player_o)))
        }
        ("history", []) => ClientCommand::ShowHistory,
        ("help", []) => ClientCommand::Help,
        ("quit" | "exit", []) => ClientCommand::Quit,
        _ => return Err(format!("Unknown command '{}', type 'help'", line.trim())),
    };

    Ok(command)
}

fn parse_index(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid number", value))
}

pub fn parse_play_mode(value: &str) -> Result<PlayMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "bot" => Ok(PlayMode::HumanVsBot),
        "human" => Ok(PlayMode::HumanVsHuman),
        _ => Err(format!("Unknown mode '{}', expected 'bot' or 'human'", value)),
    }
}
