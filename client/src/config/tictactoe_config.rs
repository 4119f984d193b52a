use common::config::Validate;
use common::games::tictactoe::{
    DEFAULT_BOT_DELAY_MS, MAX_BOT_DELAY_MS, PlayMode, PlayerNames, TicTacToeSessionSettings,
    validate_player_name,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub play_mode: PlayMode,
    pub bot_delay_ms: u64,
    pub player_x_name: String,
    pub player_o_name: String,
}

impl TicTacToeConfig {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            play_mode: self.play_mode,
            bot_delay_ms: self.bot_delay_ms,
            player_names: PlayerNames::new(&self.player_x_name, &self.player_o_name),
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        validate_player_name(&self.player_x_name)?;
        validate_player_name(&self.player_o_name)?;
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        let names = PlayerNames::default();
        Self {
            play_mode: PlayMode::HumanVsBot,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            player_x_name: names.player_x,
            player_o_name: names.player_o,
        }
    }
}
