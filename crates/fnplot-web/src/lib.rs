//! Web frontend for the fnplot plotting service

pub mod forms;
pub mod routes;
pub mod views;

pub use forms::PlotForm;
pub use routes::{create_router, AppState};
