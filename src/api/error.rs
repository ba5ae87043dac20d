//! Transport and HTTP error taxonomy for the API access layer.

/// Errors surfaced by `HealthApi` calls.
///
/// Page controllers reduce these to one fixed user-facing string each;
/// the detail is logged at the call site before propagation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach HealthSense API at {0}")]
    Connection(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_keep_code_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: "{\"detail\":\"Record not found\"}".into(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Record not found"));
    }

    #[test]
    fn connection_error_names_the_base_url() {
        let err = ApiError::Connection("http://localhost:8000/api/v1".into());
        assert!(err.to_string().contains("localhost:8000"));
    }
}
