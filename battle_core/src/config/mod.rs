//! Configuration loading for engine tunables
//!
//! Every balance number the resolvers use lives in [`BattleConstants`],
//! loadable from TOML with per-field defaults. Concrete part and medal
//! stat tables are content, not engine configuration, and do not belong
//! here.

mod constants;

pub use constants::{
    AccuracyConstants, AiConstants, BattleConstants, ChargeConstants, DamageConstants,
    TurnConstants,
};

use std::path::Path;
use thiserror::Error;

/// Errors from loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Load a TOML file into any deserializable type
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Parse a TOML string into any deserializable type
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
