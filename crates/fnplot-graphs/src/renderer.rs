//! Plot rendering through plotters' bitmap backend.
//!
//! Each image render is a scoped acquisition of a drawing area: the backend
//! is created, drawn, presented, and dropped entirely inside one call, so
//! concurrent requests never share drawing state. Output is written to a
//! temporary path and renamed into place on success, so a failed render
//! leaves no partial final file.

use crate::registry;
use crate::request::{PlotMode, PlotRequest};
use crate::sampler::{evaluate, sample_grid};
use fnplot_common::{short_hex_id, PlotError, Result};
use plotters::prelude::*;
use std::ffi::OsString;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::info;

/// Rendering options resolved from configuration
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Combined-plot canvas width in pixels
    pub width: u32,
    /// Combined-plot canvas height in pixels
    pub height: u32,
    /// Per-function canvas width in pixels (multiple mode)
    pub panel_width: u32,
    /// Per-function canvas height in pixels (multiple mode)
    pub panel_height: u32,
    /// Background color (hex format)
    pub background_color: String,
    /// Color for curves without a matching selected color (hex format)
    pub fallback_color: String,
    /// Whether to draw grid lines
    pub show_grid: bool,
    /// Whether to draw the legend
    pub show_legend: bool,
}

impl Default for RenderOptions {
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

/// A resolved curve ready for drawing
struct Curve {
    name: String,
    color: RGBColor,
    ys: Vec<f64>,
}

/// Renders validated plot requests to PNG files
pub struct PlotRenderer {
    options: RenderOptions,
}

impl PlotRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a request into `out_dir`, returning the generated filenames
    /// in output order.
    ///
    /// The directory is created if absent. Single mode produces exactly one
    /// file; multiple mode produces one file per selected function. If any
    /// image in a multiple-mode batch fails, the whole request fails.
    pub fn render(&self, request: &PlotRequest, out_dir: &Path) -> Result<Vec<String>> {
        ensure_output_dir(out_dir)?;

        let xs = sample_grid(request.x_from, request.x_to);
        let curves = self.resolve_curves(request, &xs)?;

        let filenames = match request.mode {
            PlotMode::Single => {
                let filename = plot_filename();
                self.draw_chart(
                    &out_dir.join(&filename),
                    (self.options.width, self.options.height),
                    "Combined Plot of Selected Functions",
                    &xs,
                    &curves,
                )?;
                vec![filename]
            }
            PlotMode::Multiple => {
                let mut filenames = Vec::with_capacity(curves.len());
                for curve in &curves {
                    let filename = plot_filename();
                    self.draw_chart(
                        &out_dir.join(&filename),
                        (self.options.panel_width, self.options.panel_height),
                        &format!("Plot of {}", curve.name),
                        &xs,
                        std::slice::from_ref(curve),
                    )?;
                    filenames.push(filename);
                }
                filenames
            }
        };

        info!(
            files = filenames.len(),
            dir = %out_dir.display(),
            "rendered plot request"
        );
        Ok(filenames)
    }

    /// Evaluate every selected function over the grid and pair it with its
    /// draw color.
    fn resolve_curves(&self, request: &PlotRequest, xs: &[f64]) -> Result<Vec<Curve>> {
        request
            .functions
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let transform = registry::functions()
                    .get(name)
                    .ok_or_else(|| PlotError::unknown_function(vec![name.clone()]))?;
                Ok(Curve {
                    name: name.clone(),
                    color: self.curve_color(&request.colors, i),
                    ys: evaluate(transform, xs),
                })
            })
            .collect()
    }

    /// The color for curve `index`: the matching selected color if present,
    /// otherwise the configured fallback.
    fn curve_color(&self, colors: &[String], index: usize) -> RGBColor {
        colors
            .get(index)
            .and_then(|name| registry::colors().get(name))
            .map(parse_hex_color)
            .unwrap_or_else(|| parse_hex_color(&self.options.fallback_color))
    }

    fn draw_chart(
        &self,
        path: &Path,
        dimensions: (u32, u32),
        title: &str,
        xs: &[f64],
        curves: &[Curve],
    ) -> Result<()> {
        let tmp = staging_path(path);
        match self.draw_onto(&tmp, dimensions, title, xs, curves) {
            Ok(()) => {
                std::fs::rename(&tmp, path)?;
                Ok(())
            }
            Err(err) => {
                let _ = std::fs::remove_file(&tmp);
                Err(err)
            }
        }
    }

    fn draw_onto(
        &self,
        path: &Path,
        (width, height): (u32, u32),
        title: &str,
        xs: &[f64],
        curves: &[Curve],
    ) -> Result<()> {
        let x_range = x_axis_range(xs)?;
        let y_range = y_axis_range(curves)?;

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&parse_hex_color(&self.options.background_color))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(x_range, y_range)?;

        let mut mesh = chart.configure_mesh();
        if !self.options.show_grid {
            mesh.disable_mesh();
        }
        mesh.x_desc("X").y_desc("Y").draw()?;

        for curve in curves {
            let color = curve.color;
            // Non-finite samples (tan asymptotes, exp overflow) are skipped
            // rather than handed to the backend.
            let points: Vec<(f64, f64)> = xs
                .iter()
                .zip(&curve.ys)
                .filter(|(_, y)| y.is_finite())
                .map(|(&x, &y)| (x, y))
                .collect();

            chart
                .draw_series(LineSeries::new(points, &color))?
                .label(curve.name.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color));
        }

        if self.options.show_legend {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Generate a collision-resistant output filename
fn plot_filename() -> String {
    format!("plot_{}.png", short_hex_id())
}

/// Dot-prefixed sibling of the final path, used for staging. The `.png`
/// extension is kept because the bitmap backend chooses its encoder from
/// the extension.
fn staging_path(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => {
            let mut staged = OsString::from(".");
            staged.push(name);
            path.with_file_name(staged)
        }
        None => path.to_path_buf(),
    }
}

/// Create the output directory if absent, owner-accessible
pub fn ensure_output_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
        }
    }
    Ok(())
}

/// Parse a hex color spec (e.g. `#1f77b4`) to an RGB color, defaulting to
/// black when the spec is malformed.
fn parse_hex_color(spec: &str) -> RGBColor {
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// The horizontal axis range for a sample grid.
///
/// A reversed request range still draws left-to-right; equal bounds are
/// padded so the backend always receives a non-empty range.
fn x_axis_range(xs: &[f64]) -> Result<Range<f64>> {
    let first = xs.first().copied().unwrap_or(0.0);
    let last = xs.last().copied().unwrap_or(1.0);
    if !first.is_finite() || !last.is_finite() {
        return Err(PlotError::render("plot range is not finite"));
    }

    let (lo, hi) = if first <= last { (first, last) } else { (last, first) };
    if lo == hi {
        Ok(lo - 0.5..hi + 0.5)
    } else {
        Ok(lo..hi)
    }
}

/// The vertical axis range covering every finite sample of every curve,
/// with 5% padding.
fn y_axis_range(curves: &[Curve]) -> Result<Range<f64>> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;

    for curve in curves {
        for &y in &curve.ys {
            if y.is_finite() {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
    }

    if lo > hi {
        return Err(PlotError::render(
            "no finite values to plot in the requested range",
        ));
    }

    if lo == hi {
        return Ok(lo - 0.5..hi + 0.5);
    }

    let padding = (hi - lo) * 0.05;
    Ok(lo - padding..hi + padding)
}
