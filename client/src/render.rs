use common::games::GameBroadcaster;
use common::games::tictactoe::{BOARD_SIZE, GameSnapshot, GameStatus, PlayMode};

/// Draws the board as three rows; empty cells show their index.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let cells: Vec<String> = (0..BOARD_SIZE)
        .map(|position| {
            let mark = snapshot.board.cells()[position];
            let highlighted = snapshot
                .winning_line
                .is_some_and(|line| line.contains(position));
            match (mark.is_empty(), highlighted) {
                (true, _) => position.to_string(),
                (false, true) => mark.symbol().to_lowercase(),
                (false, false) => mark.symbol().to_string(),
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| format!(" {} ", row.join(" | ")))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn render_history(snapshot: &GameSnapshot) -> String {
    snapshot
        .move_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let marker = if index == snapshot.current_move { ">" } else { " " };
            format!("{} {:>2}: {}", marker, index, label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mode = match snapshot.play_mode {
        PlayMode::HumanVsBot => "vs bot",
        PlayMode::HumanVsHuman => "vs human",
    };
    let mut lines = vec![
        render_board(snapshot),
        String::new(),
        snapshot.labelled_status_text.clone(),
        format!(
            "Move {}/{} ({})",
            snapshot.current_move,
            snapshot.history_len - 1,
            mode
        ),
    ];
    if snapshot.time_travel {
        lines.push("Viewing history: make a move to continue from here".to_string());
    }
    if snapshot.bot_to_move {
        lines.push("Bot is thinking...".to_string());
    }
    lines.join("\n")
}

pub fn render_game_over(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        GameStatus::Draw => "Game over: draw".to_string(),
        _ => format!("Game over. {}", snapshot.labelled_status_text),
    }
}

#[derive(Clone, Default)]
pub struct TerminalBroadcaster;

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        println!("\n{}", render_snapshot(&snapshot));
    }

    async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
        println!("{}", render_game_over(&snapshot));
    }
}
