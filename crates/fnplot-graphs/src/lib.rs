//! Function registries, sampling, and plot rendering for fnplot

pub mod registry;
pub mod renderer;
pub mod request;
pub mod sampler;

pub use renderer::{ensure_output_dir, PlotRenderer, RenderOptions};
pub use request::{parse_bound, PlotMode, PlotRequest};
pub use sampler::{linspace, sample_grid, SAMPLE_POINTS};
