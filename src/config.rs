//! Startup configuration loaded from a TOML file.
//!
//! Every field has a default, so a missing file or a partial table is fine:
//!
//! ```toml
//! [board]
//! width = 120
//! height = 80
//!
//! [simulation]
//! interval_ms = 150
//! start_evolving = true
//! algorithm = "parallel"
//!
//! [render]
//! cell_size = 8
//! shape = "circles"
//! color = "black"
//! clear = "fade-white"
//! grid_visible = false
//! ```

use crate::application::{CELL_SIZES, RenderStyle};
use crate::domain::{Algorithm, GridError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "LIFE_CANVAS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "life_canvas.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid board: {0}")]
    Board(#[from] GridError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Minimum wall-clock time between generations
    pub interval_ms: u64,
    pub start_evolving: bool,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 150,
            start_evolving: true,
            algorithm: Algorithm::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub render: RenderStyle,
}

impl LifeConfig {
    /// Location from `LIFE_CANVAS_CONFIG`, else `life_canvas.toml` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load and validate the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { width, height } = self.board;
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height }.into());
        }
        if !CELL_SIZES.contains(&self.render.cell_size) {
            return Err(ConfigError::Invalid(format!(
                "cell_size {} is not one of {:?}",
                self.render.cell_size, CELL_SIZES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{CellColor, CellShape, ClearMode};

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = LifeConfig::from_toml("").unwrap();
        assert_eq!(config, LifeConfig::default());
        assert_eq!(config.simulation.interval_ms, 150);
        assert!(config.simulation.start_evolving);
    }

    #[test]
    fn test_partial_tables_fill_defaults() {
        let config = LifeConfig::from_toml(
            r#"
            [board]
            width = 40

            [simulation]
            start_evolving = false
            algorithm = "serial"

            [render]
            shape = "lines2"
            clear = "fade-black"
            "#,
        )
        .unwrap();

        assert_eq!(config.board, BoardConfig { width: 40, height: 100 });
        assert!(!config.simulation.start_evolving);
        assert_eq!(config.simulation.algorithm, Algorithm::Serial);
        assert_eq!(config.render.shape, CellShape::Lines2);
        assert_eq!(config.render.clear, ClearMode::FadeBlack);
        assert_eq!(config.render.color, CellColor::Black);
    }

    #[test]
    fn test_zero_board_rejected() {
        let err = LifeConfig::from_toml("[board]\nwidth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Board(GridError::ZeroDimension { .. })));
    }

    #[test]
    fn test_odd_cell_size_rejected() {
        let err = LifeConfig::from_toml("[render]\ncell_size = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = LifeConfig::from_toml("[board\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = LifeConfig::load(Path::new("definitely/not/here/life_canvas.toml")).unwrap();
        assert_eq!(config, LifeConfig::default());
    }
}
