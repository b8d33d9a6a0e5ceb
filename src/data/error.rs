use thiserror::Error;

/// Every way an upload can fail. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// No response at all (DNS, refused connection, TLS, dropped socket).
    #[error("Failed to process CSV file: {0}")]
    Transport(String),
    /// Non-2xx status, with the backend's `message` when it sent one.
    #[error("{}", describe_http(.status, .message))]
    Http { status: u16, message: Option<String> },
    /// 2xx status but the body isn't a list of points.
    #[error("Unexpected response from prediction service: {0}")]
    MalformedResponse(String),
    /// Refused locally before any request went out.
    #[error("{0}")]
    Validation(String),
}

fn describe_http(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("HTTP error! status: {}", status),
    }
}

impl PredictError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_message_is_shown_verbatim() {
        let err = PredictError::Http {
            status: 422,
            message: Some("Missing column: Hour".into()),
        };
        assert_eq!(err.to_string(), "Missing column: Hour");
    }

    #[test]
    fn http_without_message_names_the_status() {
        let err = PredictError::Http {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn transport_failures_are_wrapped() {
        let err = PredictError::Transport("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Failed to process CSV file: connection refused"
        );
    }
}
