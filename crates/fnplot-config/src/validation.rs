//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate a hex color string
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

/// Validate a log level string
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate a directory path (basic check for valid path characters)
pub fn validate_output_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_output_path"));
    }

    // Characters that would cause issues on most filesystems
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_output_path_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex() {
        // Valid hex colors
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
        assert!(HEX_COLOR_REGEX.is_match("#000000"));
        assert!(HEX_COLOR_REGEX.is_match("#1f77b4"));
        assert!(HEX_COLOR_REGEX.is_match("#ABC123"));

        // Invalid hex colors
        assert!(!HEX_COLOR_REGEX.is_match("FFFFFF")); // Missing #
        assert!(!HEX_COLOR_REGEX.is_match("#FFF")); // Too short
        assert!(!HEX_COLOR_REGEX.is_match("#FFFFFFF")); // Too long
        assert!(!HEX_COLOR_REGEX.is_match("#GGGGGG")); // Invalid characters
        assert!(!HEX_COLOR_REGEX.is_match("")); // Empty
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#1f77b4").is_ok());
        assert!(validate_hex_color("#d62728").is_ok());
        assert!(validate_hex_color("black").is_err());
        assert!(validate_hex_color("#12345").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        for level in &["trace", "debug", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok(), "Level {} should be valid", level);
        }

        assert!(validate_log_level("").is_err());
        assert!(validate_log_level("verbose").is_err());
        assert!(validate_log_level("INFO").is_err());
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path("static/images").is_ok());
        assert!(validate_output_path("/var/lib/fnplot/images").is_ok());
        assert!(validate_output_path("./out").is_ok());

        assert!(validate_output_path("").is_err());
        assert!(validate_output_path("images<dir>").is_err());
        assert!(validate_output_path("images|dir").is_err());
        assert!(validate_output_path("images?").is_err());
    }
}
