//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Generated image output configuration
    pub output: OutputConfig,

    /// Graph rendering settings
    pub graph: GraphConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Host interface to bind
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Port to bind
    #[validate(range(min = 1, message = "Port must be non-zero"))]
    pub port: u16,
}

/// Generated image output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OutputConfig {
    /// Directory where generated plot images are written.
    /// Created on first use if absent.
    #[validate(custom(function = "crate::validation::validate_output_path", message = "Invalid output directory path"))]
    pub directory: String,
}

/// Graph rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphConfig {
    /// Combined-plot canvas width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Combined-plot canvas height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Per-function canvas width in pixels (multiple mode)
    #[validate(range(min = 100, max = 4000, message = "Panel width must be between 100 and 4000 pixels"))]
    pub panel_width: u32,

    /// Per-function canvas height in pixels (multiple mode)
    #[validate(range(min = 100, max = 4000, message = "Panel height must be between 100 and 4000 pixels"))]
    pub panel_height: u32,

    /// Background color (hex format)
    #[validate(custom(function = "crate::validation::validate_hex_color", message = "Background color must be a valid hex color"))]
    pub background_color: String,

    /// Color used for curves whose selection has no matching color (hex format)
    #[validate(custom(function = "crate::validation::validate_hex_color", message = "Fallback color must be a valid hex color"))]
    pub fallback_color: String,

    /// Whether to draw grid lines
    pub show_grid: bool,

    /// Whether to draw the legend
    pub show_legend: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether to use colored output (for console logging)
    pub colored: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            output: OutputConfig::default(),
            graph: GraphConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.output.validate()?;
        self.graph.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "static/images".to_string(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            panel_width: 800,
            panel_height: 500,
            background_color: "#FFFFFF".to_string(),
            fallback_color: "#000000".to_string(),
            show_grid: true,
            show_legend: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    /// Convert into the common logging bootstrap configuration
    pub fn to_logging_config(&self) -> fnplot_common::LoggingConfig {
        fnplot_common::LoggingConfig {
            level: self.level.clone(),
            file_path: self.file.clone(),
            colored: self.colored,
        }
    }
}
