//! Fixed lookup tables for plottable functions and draw colors.
//!
//! Both registries are built once at startup and never mutated, so they can
//! be shared freely across concurrent requests without synchronization.
//! Validation and evaluation go through the same `contains`/`get` surface
//! rather than a raw map, so there is one source of truth for what a valid
//! selection is.

use std::sync::LazyLock;

/// A pure numeric transform applied elementwise to the sample grid.
pub type Transform = fn(f64) -> f64;

/// Immutable name -> transform table for the plottable functions.
pub struct FunctionRegistry {
    entries: Vec<(&'static str, Transform)>,
}

impl FunctionRegistry {
    fn builtin() -> Self {
        Self {
            entries: vec![
                ("sin", f64::sin as Transform),
                ("cos", f64::cos as Transform),
                ("x^2", square as Transform),
                // Absolute value first, so the root is defined on all reals
                ("sqrt(x)", sqrt_abs as Transform),
                ("tan", f64::tan as Transform),
                ("exp", f64::exp as Transform),
            ],
        }
    }

    /// Whether a function with this display name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Look up the transform registered under this display name
    pub fn get(&self, name: &str) -> Option<Transform> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    /// Display names in registration order, for rendering the form
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

/// Immutable name -> hex color table for the selectable draw colors.
pub struct ColorRegistry {
    entries: Vec<(&'static str, &'static str)>,
}

impl ColorRegistry {
    fn builtin() -> Self {
        Self {
            entries: vec![
                ("blue", "#1f77b4"),
                ("red", "#d62728"),
                ("green", "#2ca02c"),
                ("purple", "#9467bd"),
                ("orange", "#ff7f0e"),
                ("pink", "#ffa1e5"),
            ],
        }
    }

    /// Whether a color with this display name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Look up the hex color spec registered under this display name
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, hex)| *hex)
    }

    /// Display names in registration order, for rendering the form
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

fn square(x: f64) -> f64 {
    x * x
}

fn sqrt_abs(x: f64) -> f64 {
    x.abs().sqrt()
}

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(FunctionRegistry::builtin);
static COLORS: LazyLock<ColorRegistry> = LazyLock::new(ColorRegistry::builtin);

/// The process-wide function registry
pub fn functions() -> &'static FunctionRegistry {
    &FUNCTIONS
}

/// The process-wide color registry
pub fn colors() -> &'static ColorRegistry {
    &COLORS
}
