//! Move catalog loading

use super::ConfigError;
use crate::moves::CombatMove;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for move configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovesConfig {
    #[serde(rename = "moves")]
    pub moves: Vec<CombatMove>,
}

/// Load move configurations from a TOML file
pub fn load_move_configs(path: &Path) -> Result<HashMap<String, CombatMove>, ConfigError> {
    let config: MovesConfig = super::load_toml(path)?;
    build_catalog(config)
}

/// Load move configurations from a TOML string
pub fn parse_move_configs(content: &str) -> Result<HashMap<String, CombatMove>, ConfigError> {
    let config: MovesConfig = super::parse_toml(content)?;
    build_catalog(config)
}

fn build_catalog(config: MovesConfig) -> Result<HashMap<String, CombatMove>, ConfigError> {
    let mut map = HashMap::new();
    for mv in config.moves {
        if mv.is_calculated && mv.is_desperate {
            return Err(ConfigError::ValidationError(format!(
                "move '{}' is flagged both calculated and desperate",
                mv.id
            )));
        }
        if mv.base_damage < 0 {
            return Err(ConfigError::ValidationError(format!(
                "move '{}' has negative base damage",
                mv.id
            )));
        }
        map.insert(mv.id.clone(), mv);
    }
    Ok(map)
}

/// Get the default move catalog
pub fn default_moves() -> HashMap<String, CombatMove> {
    let toml = include_str!("../../config/moves.toml");
    parse_move_configs(toml).unwrap_or_else(|_| {
        let mut map = HashMap::new();
        map.insert("strike".to_string(), CombatMove::basic_strike());
        map
    })
}
