mod board;
mod bot_controller;
mod fork_detector;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{get_available_moves, is_valid_move};
pub use bot_controller::{BOT_MARK, HUMAN_MARK, fork_safe_moves, select_move};
pub use fork_detector::can_fork;
pub use game_state::{GameSnapshot, TicTacToeGameState};
pub use session::{SessionCommand, TicTacToeSession, TicTacToeSessionState};
pub use settings::{DEFAULT_BOT_DELAY_MS, MAX_BOT_DELAY_MS, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, Board, CENTER, GameStatus, LINES, MAX_PLAYER_NAME_LEN, Mark, PlayMode,
    PlayerNames, Position, WinningLine, validate_player_name,
};
pub use win_detector::{
    check_win, check_win_with_line, game_status, is_terminal, labelled_status_text,
    matching_lines, status_text, threat_lines,
};
