use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::TicTacToeConfig;

pub const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::PlayMode;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_round_trip() {
        let mut config = Config::default();
        config.tictactoe.play_mode = PlayMode::HumanVsHuman;
        config.tictactoe.player_x_name = "Ann".to_string();
        config.log_prefix = Some("Client".to_string());

        let manager = get_config_manager(Some(&get_temp_file_path()));
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              play_mode: HumanVsBot
              bot_delay_ms: 500
              player_x_name: ThisNameIsTooLong
              player_o_name: Bot
        "#;

        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(&file_path));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_missing_field_cant_be_read() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("tictactoe:\n  play_mode: HumanVsBot\n")
            .unwrap();

        let manager = get_config_manager(Some(&file_path));
        assert!(manager.get_config().is_err());
    }
}
