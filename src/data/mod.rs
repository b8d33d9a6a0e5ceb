mod error;
mod prediction_client;

pub use {
    error::PredictError,
    prediction_client::{HttpPredictionClient, PredictionService, decode_response},
};
