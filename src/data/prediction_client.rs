use {
    crate::{
        config::{BACKEND, DF, predict_endpoint},
        data::PredictError,
        domain::{CSV_MIME, ResultSet, UploadedFile},
    },
    async_trait::async_trait,
    reqwest::multipart::{Form, Part},
    serde::Deserialize,
};

/// Abstract interface for turning a CSV upload into predictions.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, file: UploadedFile) -> Result<ResultSet, PredictError>;
}

/// Single multipart POST to `<origin>/predict`. No timeout, no retry.
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(origin: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: predict_endpoint(origin),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a finished HTTP exchange onto the upload outcome.
/// Successful bodies must be a JSON array of points; nothing beyond the shape is checked.
pub fn decode_response(status: u16, body: &[u8]) -> Result<ResultSet, PredictError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty());
        return Err(PredictError::Http { status, message });
    }

    serde_json::from_slice::<ResultSet>(body)
        .map_err(|e| PredictError::MalformedResponse(e.to_string()))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PredictionService for HttpPredictionClient {
    async fn predict(&self, file: UploadedFile) -> Result<ResultSet, PredictError> {
        #[cfg(debug_assertions)]
        if DF.log_upload {
            log::info!(
                "POST {} ({} bytes from {})",
                self.endpoint,
                file.size(),
                file.name
            );
        }

        let csv_mime = file.has_csv_mime();
        let UploadedFile { name, bytes, .. } = file;
        let part = Part::bytes(bytes).file_name(name);
        let part = if csv_mime {
            part.mime_str(CSV_MIME).map_err(PredictError::transport)?
        } else {
            part
        };
        let form = Form::new().part(BACKEND.file_field, part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(PredictError::transport)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(PredictError::transport)?;

        let outcome = decode_response(status, &body);
        if let Err(e) = &outcome {
            log::warn!("Prediction request failed (status {}): {}", status, e);
        }
        outcome
    }
}
