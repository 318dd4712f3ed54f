//! Plot request construction and validation.

use crate::registry;
use fnplot_common::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How selected functions are distributed across output images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotMode {
    /// All curves on one shared canvas
    Single,
    /// One canvas and file per selected function
    Multiple,
}

impl PlotMode {
    /// Interpret the optional `plot_type` form value.
    ///
    /// An absent field and the literal `single` select [`PlotMode::Single`];
    /// any other present value selects [`PlotMode::Multiple`].
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            None | Some("single") => Self::Single,
            Some(_) => Self::Multiple,
        }
    }
}

/// A validated plotting request.
///
/// Constructed per incoming form submission and discarded after producing a
/// result. Construction fails if any selection does not pass validation
/// against the registries, so rendering never sees an invalid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotRequest {
    /// Range start; may exceed `x_to`, the sampler handles either order
    pub x_from: f64,
    /// Range end
    pub x_to: f64,
    /// Selected function names, in selection order
    pub functions: Vec<String>,
    /// Selected color names; may be shorter than `functions` or empty
    pub colors: Vec<String>,
    /// Output mode
    pub mode: PlotMode,
}

impl PlotRequest {
    /// Build and validate a request
    pub fn new(
        x_from: f64,
        x_to: f64,
        functions: Vec<String>,
        colors: Vec<String>,
        mode: PlotMode,
    ) -> Result<Self> {
        let request = Self {
            x_from,
            x_to,
            functions,
            colors,
            mode,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<()> {
        let unknown_functions: Vec<String> = self
            .functions
            .iter()
            .filter(|name| !registry::functions().contains(name))
            .cloned()
            .collect();
        if !unknown_functions.is_empty() {
            return Err(PlotError::unknown_function(unknown_functions));
        }

        let unknown_colors: Vec<String> = self
            .colors
            .iter()
            .filter(|name| !registry::colors().contains(name))
            .cloned()
            .collect();
        if !unknown_colors.is_empty() {
            return Err(PlotError::unknown_color(unknown_colors));
        }

        if self.functions.is_empty() {
            return Err(PlotError::EmptySelection);
        }

        let mut seen = HashSet::new();
        let mut duplicates: Vec<String> = Vec::new();
        for name in &self.colors {
            if !seen.insert(name.as_str()) && !duplicates.contains(name) {
                duplicates.push(name.clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(PlotError::duplicate_color(duplicates));
        }

        Ok(())
    }
}

/// Parse one numeric range bound from its raw form value
pub fn parse_bound(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| PlotError::malformed_range(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_request() {
        let request = PlotRequest::new(
            0.0,
            6.28,
            strings(&["sin", "cos"]),
            strings(&["blue", "red"]),
            PlotMode::Single,
        )
        .unwrap();
        assert_eq!(request.functions.len(), 2);
        assert_eq!(request.mode, PlotMode::Single);
    }

    #[test]
    fn test_fewer_colors_than_functions_is_legal() {
        let request = PlotRequest::new(
            -5.0,
            5.0,
            strings(&["sin", "cos", "tan"]),
            strings(&["green"]),
            PlotMode::Multiple,
        );
        assert!(request.is_ok());

        let request = PlotRequest::new(-5.0, 5.0, strings(&["x^2"]), vec![], PlotMode::Multiple);
        assert!(request.is_ok());
    }

    #[test]
    fn test_empty_selection() {
        let err = PlotRequest::new(0.0, 1.0, vec![], strings(&["blue"]), PlotMode::Single)
            .unwrap_err();
        assert!(matches!(err, PlotError::EmptySelection));
    }

    #[test]
    fn test_unknown_function_named() {
        let err = PlotRequest::new(
            0.0,
            1.0,
            strings(&["sin", "log"]),
            vec![],
            PlotMode::Single,
        )
        .unwrap_err();
        match err {
            PlotError::UnknownFunction { names } => assert_eq!(names, vec!["log"]),
            other => panic!("expected UnknownFunction, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_color_named() {
        let err = PlotRequest::new(
            0.0,
            1.0,
            strings(&["sin"]),
            strings(&["mauve"]),
            PlotMode::Single,
        )
        .unwrap_err();
        match err {
            PlotError::UnknownColor { names } => assert_eq!(names, vec!["mauve"]),
            other => panic!("expected UnknownColor, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let err = PlotRequest::new(
            0.0,
            1.0,
            strings(&["sin", "cos"]),
            strings(&["blue", "blue"]),
            PlotMode::Single,
        )
        .unwrap_err();
        match err {
            PlotError::DuplicateColor { names } => assert_eq!(names, vec!["blue"]),
            other => panic!("expected DuplicateColor, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_function_reported_before_empty_check() {
        // A request with both problems reports the unknown names first,
        // matching the original form's validation order.
        let err = PlotRequest::new(
            0.0,
            1.0,
            strings(&["log"]),
            strings(&["blue", "blue"]),
            PlotMode::Single,
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::UnknownFunction { .. }));
    }

    #[test]
    fn test_reversed_range_is_accepted() {
        let request =
            PlotRequest::new(5.0, -5.0, strings(&["sin"]), vec![], PlotMode::Single);
        assert!(request.is_ok());
    }

    #[test]
    fn test_mode_from_form_value() {
        assert_eq!(PlotMode::from_form_value(None), PlotMode::Single);
        assert_eq!(PlotMode::from_form_value(Some("single")), PlotMode::Single);
        assert_eq!(
            PlotMode::from_form_value(Some("multiple")),
            PlotMode::Multiple
        );
        // Any other present value falls through to multiple, as the
        // original form handler did.
        assert_eq!(PlotMode::from_form_value(Some("grid")), PlotMode::Multiple);
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("x_from", "0").unwrap(), 0.0);
        assert_eq!(parse_bound("x_from", " -2.5 ").unwrap(), -2.5);
        assert_eq!(parse_bound("x_to", "6.28").unwrap(), 6.28);

        let err = parse_bound("x_from", "abc").unwrap_err();
        match err {
            PlotError::MalformedRange { field, value } => {
                assert_eq!(field, "x_from");
                assert_eq!(value, "abc");
            }
            other => panic!("expected MalformedRange, got {:?}", other),
        }

        assert!(parse_bound("x_to", "").is_err());
    }
}
