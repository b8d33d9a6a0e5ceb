// Domain types and value objects
mod prediction_point;
mod time_window;
mod uploaded_file;

// Re-export commonly used types to the world
pub use prediction_point::{PredictionPoint, ResultSet};
pub use time_window::TimeWindow;
pub use uploaded_file::{CSV_EXTENSION, CSV_MIME, UploadedFile};
pub(crate) use uploaded_file::looks_like_csv;
