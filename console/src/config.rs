use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::FirstMoveMode;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";
const CONFIG_HEADER: &str = "tictactoe_console configuration";
const MAX_GRID_DIM: usize = 20;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::new(
        FileContentConfigProvider::new(file_path.to_string()),
        YamlConfigSerializer::with_header(CONFIG_HEADER),
    )
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BoardConfig {
    /// Reject initial boards containing anything other than X, O or _.
    pub strict_cells: bool,
    pub max_grid_dim: usize,
    pub first_move: FirstMoveMode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            strict_cells: false,
            max_grid_dim: MAX_GRID_DIM,
            first_move: FirstMoveMode::AlwaysX,
        }
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_grid_dim == 0 {
            return Err("max_grid_dim must be greater than 0".to_string());
        }
        if self.max_grid_dim > MAX_GRID_DIM {
            return Err(format!("max_grid_dim must not exceed {}", MAX_GRID_DIM));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref prefix) = self.prefix
            && prefix.trim().is_empty()
        {
            return Err("logging prefix must not be blank".to_string());
        }
        Ok(())
    }
}
