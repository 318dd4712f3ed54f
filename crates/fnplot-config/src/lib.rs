//! Configuration management for the fnplot plotting service

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, GraphConfig, LoggingConfig, OutputConfig, ServerConfig};
