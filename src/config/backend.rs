//! Prediction backend connection settings

/// Where and how uploads are sent
pub struct BackendConfig {
    /// Origin used when no `--backend-url` is given (and always on the web build)
    pub default_origin: &'static str,
    /// Path appended to the origin
    pub predict_path: &'static str,
    /// Multipart field carrying the CSV bytes
    pub file_field: &'static str,
    /// Picker uploads above this many bytes are refused before any request is made
    pub max_upload_bytes: usize,
}

pub const BACKEND: BackendConfig = BackendConfig {
    default_origin: "https://pedocs-backend.fly.dev",
    predict_path: "/predict",
    file_field: "file",
    max_upload_bytes: 5 * 1024 * 1024,
};

/// Example: "https://pedocs-backend.fly.dev/" -> "https://pedocs-backend.fly.dev/predict"
pub fn predict_endpoint(origin: &str) -> String {
    format!(
        "{}{}",
        origin.trim().trim_end_matches('/'),
        BACKEND.predict_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slashes() {
        assert_eq!(
            predict_endpoint("https://pedocs-backend.fly.dev"),
            "https://pedocs-backend.fly.dev/predict"
        );
        assert_eq!(
            predict_endpoint("http://127.0.0.1:8000//"),
            "http://127.0.0.1:8000/predict"
        );
    }
}
