//! Form-encoded request parsing for the plot endpoint.

use fnplot_common::Result;
use fnplot_graphs::{parse_bound, PlotMode, PlotRequest};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Raw values of a submitted plot form, before numeric parsing and
/// registry validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotForm {
    pub x_from: String,
    pub x_to: String,
    pub functions: Vec<String>,
    pub colors: Vec<String>,
    pub plot_type: Option<String>,
}

impl PlotForm {
    /// Parse a form-encoded request body.
    ///
    /// Selections arrive either as repeated fields (`functions=sin&...`) or
    /// as indexed keys (`functions[0]=sin&...`). Indexed keys may be sparse;
    /// they are ordered by their index and appended after any repeated
    /// fields. Colors pair with functions strictly by position in the
    /// resulting lists, never by raw form key.
    pub fn parse(body: &str) -> Self {
        let mut form = Self::default();
        let mut indexed_functions: BTreeMap<usize, String> = BTreeMap::new();
        let mut indexed_colors: BTreeMap<usize, String> = BTreeMap::new();

        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            match key.as_ref() {
                "x_from" => form.x_from = value.into_owned(),
                "x_to" => form.x_to = value.into_owned(),
                "plot_type" => form.plot_type = Some(value.into_owned()),
                "functions" => form.functions.push(value.into_owned()),
                "colors" => form.colors.push(value.into_owned()),
                other => {
                    if let Some(index) = indexed_key(other, "functions") {
                        indexed_functions.insert(index, value.into_owned());
                    } else if let Some(index) = indexed_key(other, "colors") {
                        indexed_colors.insert(index, value.into_owned());
                    }
                    // Unknown fields are ignored
                }
            }
        }

        form.functions.extend(indexed_functions.into_values());
        form.colors.extend(indexed_colors.into_values());
        form
    }

    /// Convert the raw form into a validated plot request
    pub fn into_request(self) -> Result<PlotRequest> {
        let x_from = parse_bound("x_from", &self.x_from)?;
        let x_to = parse_bound("x_to", &self.x_to)?;
        let mode = PlotMode::from_form_value(self.plot_type.as_deref());
        PlotRequest::new(x_from, x_to, self.functions, self.colors, mode)
    }
}

/// Extract `i` from keys of the form `<base>[i]`
fn indexed_key(key: &str, base: &str) -> Option<usize> {
    key.strip_prefix(base)?
        .strip_prefix('[')?
        .strip_suffix(']')?
        .parse()
        .ok()
}
