//! Configuration loading utilities

use crate::Config;
use fnplot_common::Result as PlotResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for fnplot_common::PlotError {
    fn from(err: ConfigError) -> Self {
        fnplot_common::PlotError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> PlotResult<Config> {
        // Try to load from default config file first, fall back to defaults
        let config = if let Ok(config_path) = env::var("FNPLOT_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PlotResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        // Server configuration overrides
        if let Ok(host) = env::var("FNPLOT_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("FNPLOT_PORT") {
            config.server.port = port.parse().map_err(|e| ConfigError::EnvParseError {
                var: "FNPLOT_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        // Output configuration overrides
        if let Ok(dir) = env::var("FNPLOT_OUTPUT_DIR") {
            config.output.directory = dir;
        }

        // Graph configuration overrides
        if let Ok(width) = env::var("GRAPH_WIDTH") {
            config.graph.width = width.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(height) = env::var("GRAPH_HEIGHT") {
            config.graph.height = height.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(width) = env::var("GRAPH_PANEL_WIDTH") {
            config.graph.panel_width = width.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_PANEL_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(height) = env::var("GRAPH_PANEL_HEIGHT") {
            config.graph.panel_height = height.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_PANEL_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(bg_color) = env::var("GRAPH_BACKGROUND_COLOR") {
            config.graph.background_color = bg_color;
        }

        if let Ok(fallback) = env::var("GRAPH_FALLBACK_COLOR") {
            config.graph.fallback_color = fallback;
        }

        if let Ok(show_grid) = env::var("GRAPH_SHOW_GRID") {
            config.graph.show_grid = show_grid.parse().map_err(|e| ConfigError::EnvParseError {
                var: "GRAPH_SHOW_GRID".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(show_legend) = env::var("GRAPH_SHOW_LEGEND") {
            config.graph.show_legend =
                show_legend.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "GRAPH_SHOW_LEGEND".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Logging configuration overrides
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Ok(colored) = env::var("LOG_COLORED") {
            config.logging.colored = colored.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOG_COLORED".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
