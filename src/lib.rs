#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{HttpPredictionClient, PredictError, PredictionService};
pub use domain::{PredictionPoint, ResultSet, TimeWindow, UploadedFile};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Origin of the prediction backend; `/predict` is appended
    #[arg(long, default_value = config::BACKEND.default_origin)]
    pub backend_url: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            backend_url: config::BACKEND.default_origin.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
