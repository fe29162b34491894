use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::GridGeometry;

pub const DEFAULT_CONFIG_PATH: &str = "snake_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window and board settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub cell_size: i32,
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 600,
            window_height: 600,
            cell_size: 25,
            window_title: "Snake".to_owned(),
        }
    }
}

impl GameConfig {
    /// Reads `path`, falling back to the defaults when the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry().map(|_| ())
    }

    pub fn geometry(&self) -> Result<GridGeometry, ConfigError> {
        GridGeometry::new(self.window_width, self.window_height, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Board;

    #[test]
    fn defaults_match_classic_window() {
        let config = GameConfig::default();
        assert_eq!(config.geometry().unwrap().board(), Board::new(24, 23));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "cell_size": 20 }"#).unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.window_width, 600);
        assert_eq!(config.window_title, "Snake");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ cell_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn tiny_window_is_invalid() {
        let err = GameConfig::from_json(r#"{ "window_height": 30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn one_cell_board_is_invalid() {
        // one column and one playable row above the score bar
        let err = GameConfig::from_json(r#"{ "window_width": 25, "window_height": 50 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = GameConfig::load(Path::new("definitely/not/here.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
