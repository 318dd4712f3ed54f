//! HTTP routes for the plotting frontend.

use crate::forms::PlotForm;
use crate::views::{self, PlotOutcome};
use axum::{
    extract::{RawForm, State},
    response::Html,
    routing::get,
    Router,
};
use fnplot_common::PlotError;
use fnplot_config::Config;
use fnplot_graphs::{registry, PlotRenderer, RenderOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, warn};

/// Shared application state for the web frontend
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Plot renderer configured from the graph settings
    pub renderer: Arc<PlotRenderer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let options = RenderOptions {
            width: config.graph.width,
            height: config.graph.height,
            panel_width: config.graph.panel_width,
            panel_height: config.graph.panel_height,
            background_color: config.graph.background_color.clone(),
            fallback_color: config.graph.fallback_color.clone(),
            show_grid: config.graph.show_grid,
            show_legend: config.graph.show_legend,
        };
        Self {
            config: Arc::new(config),
            renderer: Arc::new(PlotRenderer::new(options)),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.output.directory);

    Router::new()
        .route("/", get(home))
        .route("/plot", get(plot_form).post(plot_submit))
        .nest_service("/static/images", images)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> Html<String> {
    Html(views::form_page(
        &registry::functions().names(),
        &registry::colors().names(),
    ))
}

async fn plot_form() -> Html<String> {
    home().await
}

async fn plot_submit(State(state): State<AppState>, RawForm(body): RawForm) -> Html<String> {
    let body = String::from_utf8_lossy(&body);
    let form = PlotForm::parse(&body);

    let request = match form.into_request() {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "rejected plot request");
            return error_response(&err);
        }
    };

    let renderer = Arc::clone(&state.renderer);
    let out_dir = PathBuf::from(&state.config.output.directory);
    let (x_from, x_to) = (request.x_from, request.x_to);

    // plotters is CPU-bound; keep it off the async workers
    match tokio::task::spawn_blocking(move || renderer.render(&request, &out_dir)).await {
        Ok(Ok(files)) => Html(views::result_page(
            &registry::functions().names(),
            &registry::colors().names(),
            &PlotOutcome {
                files,
                x_from,
                x_to,
            },
        )),
        Ok(Err(err)) => {
            error!(error = %err, "plot request failed");
            error_response(&err)
        }
        Err(err) => {
            error!(error = %err, "plot task panicked");
            error_response(&PlotError::unexpected("plot task failed"))
        }
    }
}

fn error_response(err: &PlotError) -> Html<String> {
    Html(views::error_page(
        &registry::functions().names(),
        &registry::colors().names(),
        &err.to_string(),
    ))
}
