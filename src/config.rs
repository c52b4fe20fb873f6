//! Configuration for the preparation pipeline.
//!
//! Every knob a stage needs arrives through [`PipelineConfig`]; the
//! stages themselves hardcode nothing. The defaults mirror the study
//! setup: 5-second windows at 10 samples per second, slid by 1 second.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters for the preparation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Rows per window
    pub window_size: usize,

    /// Row advance between consecutive window starts
    pub step: usize,

    /// Feature columns fed to the classifier, in order
    pub feature_names: Vec<String>,

    /// Binary flag column aggregated into window labels
    pub target_column: String,

    /// Collections used for fitting
    pub train_ids: Vec<i64>,

    /// Collections held out for evaluation
    pub test_ids: Vec<i64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            step: 10,
            feature_names: vec![
                "roll".to_string(),
                "pitch".to_string(),
                "yaw".to_string(),
                "magnitude".to_string(),
            ],
            target_column: "tremor".to_string(),
            train_ids: vec![1, 2, 3, 4, 5, 6, 7, 8],
            test_ids: vec![9, 10],
        }
    }
}

impl PipelineConfig {
    /// Load configuration from the default location, or the defaults when
    /// no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: PipelineConfig = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tremor-seq")
            .join("config.json")
    }
}

/// Parse a comma-separated list of collection ids, as given on the CLI.
pub fn parse_id_list(s: &str) -> Result<Vec<i64>, ConfigError> {
    s.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .map_err(|_| ConfigError::ParseError(format!("not a collection id: {part:?}")))
        })
        .collect()
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.window_size, 50);
        assert_eq!(config.step, 10);
        assert_eq!(config.feature_names.len(), 4);
        assert_eq!(config.target_column, "tremor");
        assert_eq!(config.train_ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(config.test_ids, vec![9, 10]);
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 9 , 10 ").unwrap(), vec![9, 10]);
        assert!(parse_id_list("").unwrap().is_empty());
        assert!(parse_id_list("1,x").is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
