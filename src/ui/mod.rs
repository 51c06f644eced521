pub mod app;
pub mod app_async;
pub mod config;
pub mod panels;
pub mod plot_view;
pub mod utils;

pub use app::{DashboardApp, SelectionParams, Services};
pub use app_async::{CycleOutput, run_cycle_blocking};
