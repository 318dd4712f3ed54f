//! Minimal HTML views for the plot form and its results.
//!
//! The pages are deliberately plain: a selection form, an optional error
//! banner, and the rendered images. Both registries' key lists are passed
//! in so the form can always be redisplayed, error or not.

/// Data for the result section of a successful submission
pub struct PlotOutcome {
    pub files: Vec<String>,
    pub x_from: f64,
    pub x_to: f64,
}

/// The plain selection form
pub fn form_page(functions: &[&str], colors: &[&str]) -> String {
    render_page(functions, colors, None, None)
}

/// The form with a validation or rendering error banner
pub fn error_page(functions: &[&str], colors: &[&str], error: &str) -> String {
    render_page(functions, colors, Some(error), None)
}

/// The form plus the generated plots and the echoed range
pub fn result_page(functions: &[&str], colors: &[&str], outcome: &PlotOutcome) -> String {
    render_page(functions, colors, None, Some(outcome))
}

fn render_page(
    functions: &[&str],
    colors: &[&str],
    error: Option<&str>,
    outcome: Option<&PlotOutcome>,
) -> String {
    let mut body = String::with_capacity(2048);

    body.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Function Plotter</title>\n</head>\n<body>\n<h1>Function Plotter</h1>\n",
    );

    if let Some(message) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    let (x_from, x_to) = outcome
        .map(|o| (o.x_from.to_string(), o.x_to.to_string()))
        .unwrap_or_default();

    body.push_str("<form method=\"post\" action=\"/plot\">\n");
    body.push_str(&format!(
        "<label>From <input type=\"text\" name=\"x_from\" value=\"{}\"></label>\n",
        escape_html(&x_from)
    ));
    body.push_str(&format!(
        "<label>To <input type=\"text\" name=\"x_to\" value=\"{}\"></label>\n",
        escape_html(&x_to)
    ));

    body.push_str("<fieldset>\n<legend>Functions</legend>\n");
    for name in functions {
        let escaped = escape_html(name);
        body.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"functions\" value=\"{escaped}\"> {escaped}</label>\n",
        ));
    }
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>Colors</legend>\n");
    for name in colors {
        let escaped = escape_html(name);
        body.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"colors\" value=\"{escaped}\"> {escaped}</label>\n",
        ));
    }
    body.push_str("</fieldset>\n");

    body.push_str(
        "<fieldset>\n<legend>Mode</legend>\n\
         <label><input type=\"radio\" name=\"plot_type\" value=\"single\" checked> One combined image</label>\n\
         <label><input type=\"radio\" name=\"plot_type\" value=\"multiple\"> One image per function</label>\n\
         </fieldset>\n",
    );

    body.push_str("<button type=\"submit\">Plot</button>\n</form>\n");

    if let Some(outcome) = outcome {
        body.push_str(&format!(
            "<h2>Plots for [{}, {}]</h2>\n",
            escape_html(&outcome.x_from.to_string()),
            escape_html(&outcome.x_to.to_string())
        ));
        for file in &outcome.files {
            body.push_str(&format!(
                "<img src=\"/static/images/{}\" alt=\"generated plot\">\n",
                escape_html(file)
            ));
        }
    }

    body.push_str("</body>\n</html>\n");
    body
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
