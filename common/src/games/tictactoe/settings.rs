use std::time::Duration;

use super::types::{PlayMode, PlayerNames};

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeSessionSettings {
    pub play_mode: PlayMode,
    pub bot_delay_ms: u64,
    pub player_names: PlayerNames,
}

impl TicTacToeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay ({} ms) cannot exceed {} ms",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        self.player_names.validate()
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            play_mode: PlayMode::HumanVsBot,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            player_names: PlayerNames::default(),
        }
    }
}
