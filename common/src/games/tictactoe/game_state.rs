use super::board::{get_available_moves, is_valid_move};
use super::bot_controller::BOT_MARK;
use super::types::{Board, GameStatus, Mark, PlayMode, PlayerNames, Position, WinningLine};
use super::win_detector::{check_win_with_line, game_status, labelled_status_text, status_text};

/// Everything a front end needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub status_text: String,
    pub labelled_status_text: String,
    pub winning_line: Option<WinningLine>,
    pub x_is_next: bool,
    pub current_move: usize,
    pub history_len: usize,
    pub move_labels: Vec<String>,
    pub play_mode: PlayMode,
    pub player_names: PlayerNames,
    pub time_travel: bool,
    pub bot_to_move: bool,
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    history: Vec<Board>,
    current_move: usize,
    time_travel: bool,
    play_mode: PlayMode,
    player_names: PlayerNames,
}

impl TicTacToeGameState {
    pub fn new(play_mode: PlayMode, player_names: PlayerNames) -> Self {
        let player_names = if play_mode.has_bot() {
            PlayerNames::default()
        } else {
            player_names
        };

        Self {
            history: vec![Board::new()],
            current_move: 0,
            time_travel: false,
            play_mode,
            player_names,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn is_time_travelling(&self) -> bool {
        self.time_travel
    }

    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    pub fn player_names(&self) -> &PlayerNames {
        &self.player_names
    }

    pub fn x_is_next(&self) -> bool {
        self.current_board().x_is_next()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_board().next_mark()
    }

    pub fn status(&self) -> GameStatus {
        game_status(self.current_board())
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn bot_to_move(&self) -> bool {
        self.play_mode.has_bot()
            && self.current_mark() == BOT_MARK
            && !self.is_game_over()
            && !self.time_travel
    }

    pub fn player_to_move(&self) -> bool {
        (!self.play_mode.has_bot() || self.current_mark() != BOT_MARK) && !self.is_game_over()
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is already over".to_string());
        }

        if !self.player_to_move() {
            return Err("Not your turn".to_string());
        }

        self.push_move(position)
    }

    pub fn place_bot_mark(&mut self, position: Position) -> Result<(), String> {
        if !self.bot_to_move() {
            return Err("Bot is not allowed to move now".to_string());
        }

        self.push_move(position)
    }

    /// Drops any boards after the current one, then appends the move.
    fn push_move(&mut self, position: Position) -> Result<(), String> {
        let board = *self.current_board();
        if position >= board.cells().len() {
            return Err(format!("Position {} is out of bounds", position));
        }
        if !is_valid_move(&board, position) {
            return Err(format!("Cell {} is already marked", position));
        }

        let next = board.with_mark(position, board.next_mark());
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        self.time_travel = false;
        Ok(())
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), String> {
        if index >= self.history.len() {
            return Err(format!(
                "Move #{} does not exist, history has {} entries",
                index,
                self.history.len()
            ));
        }

        self.current_move = index;
        self.time_travel = true;
        Ok(())
    }

    pub fn step_back(&mut self) -> Result<(), String> {
        if self.current_move == 0 {
            return Err("Already at game start".to_string());
        }
        self.jump_to(self.current_move - 1)
    }

    pub fn step_forward(&mut self) -> Result<(), String> {
        self.jump_to(self.current_move + 1)
    }

    /// Switching to bot play restores the default names.
    pub fn set_play_mode(&mut self, play_mode: PlayMode) {
        if self.play_mode == play_mode {
            return;
        }
        self.play_mode = play_mode;
        if play_mode.has_bot() {
            self.player_names = PlayerNames::default();
        }
    }

    pub fn set_player_names(&mut self, player_names: PlayerNames) -> Result<(), String> {
        if self.play_mode.has_bot() {
            return Err("Player names can only be changed in human vs human mode".to_string());
        }
        player_names.validate()?;
        self.player_names = player_names;
        Ok(())
    }

    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|index| {
                if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                }
            })
            .collect()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        get_available_moves(self.current_board())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let board = *self.current_board();
        let x_is_next = self.x_is_next();

        GameSnapshot {
            board,
            status: self.status(),
            status_text: status_text(&board, x_is_next),
            labelled_status_text: labelled_status_text(&board, x_is_next, &self.player_names),
            winning_line: check_win_with_line(&board),
            x_is_next,
            current_move: self.current_move,
            history_len: self.history.len(),
            move_labels: self.move_labels(),
            play_mode: self.play_mode,
            player_names: self.player_names.clone(),
            time_travel: self.time_travel,
            bot_to_move: self.bot_to_move(),
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(PlayMode::default(), PlayerNames::default())
    }
}
