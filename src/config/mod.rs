//! Configuration module for the prediction client.

// Can all be private now because we have a public re-export.
mod backend;
mod debug;
mod toasts;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use backend::{BACKEND, BackendConfig, predict_endpoint};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
pub use toasts::{TOASTS, ToastConfig};
