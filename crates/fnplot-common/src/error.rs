//! Error types and utilities for fnplot

use thiserror::Error;

/// Result type alias for fnplot operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// Main error type for fnplot operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// A range bound could not be parsed as a number
    #[error("Invalid value for {field}: '{value}' is not a number")]
    MalformedRange { field: String, value: String },

    /// No functions were selected
    #[error("Choose at least one function")]
    EmptySelection,

    /// One or more requested function names are not registered
    #[error("Invalid functions selected: {}", names.join(", "))]
    UnknownFunction { names: Vec<String> },

    /// One or more requested color names are not registered
    #[error("Invalid colors selected: {}", names.join(", "))]
    UnknownColor { names: Vec<String> },

    /// The same color was selected more than once
    #[error("Duplicate colors selected: {}. Please use unique colors for each function.", names.join(", "))]
    DuplicateColor { names: Vec<String> },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Plot rendering errors
    #[error("Error creating plot: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Catch-all for failures outside the known taxonomy
    #[error("An unexpected error occurred: {message}")]
    Unexpected {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PlotError {
    /// Create a new unexpected error with a custom message
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new unexpected error with a custom message and source
    pub fn unexpected_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unexpected {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new rendering error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new rendering error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed range error for a single form field
    pub fn malformed_range(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedRange {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unknown function error listing the offending names
    pub fn unknown_function(names: Vec<String>) -> Self {
        Self::UnknownFunction { names }
    }

    /// Create an unknown color error listing the offending names
    pub fn unknown_color(names: Vec<String>) -> Self {
        Self::UnknownColor { names }
    }

    /// Create a duplicate color error listing the repeated names
    pub fn duplicate_color(names: Vec<String>) -> Self {
        Self::DuplicateColor { names }
    }

    /// Whether this error was detected during request validation,
    /// before any rendering work began.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MalformedRange { .. }
                | Self::EmptySelection
                | Self::UnknownFunction { .. }
                | Self::UnknownColor { .. }
                | Self::DuplicateColor { .. }
        )
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PlotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("plot rendering failed", err)
    }
}
