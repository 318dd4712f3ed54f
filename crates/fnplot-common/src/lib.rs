//! Common utilities and types for the fnplot plotting service

pub mod error;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use error::{PlotError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use utils::short_hex_id;
