//! Reqwest-backed `HealthApi` implementation.
//!
//! One configured client with a fixed base URL and JSON content type.
//! Every transport or HTTP failure is logged here and then propagated
//! unchanged; there are no retries, timeouts, or caching — each call is
//! a fresh round trip. Upload is the one multipart endpoint.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::multipart;
use serde::de::DeserializeOwned;

use crate::config;
use crate::models::{
    ChatRequest, ChatResponse, DashboardStats, RecordDetails, SymptomAssessment, SymptomRequest,
};

use super::error::ApiError;
use super::types::{
    ChatHistoryResponse, ExplainRequest, ExplainResponse, RecordListQuery, RecordListResponse,
    TrendsResponse, UploadPayload, UploadReceipt,
};
use super::HealthApi;

/// HTTP client for the HealthSense backend.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client against an explicit base URL.
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from `HEALTHSENSE_API_URL`, falling back to the
    /// default local backend.
    pub fn from_env() -> Self {
        Self::new(&config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        let mapped = if err.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else {
            ApiError::Transport(err.to_string())
        };
        tracing::error!(error = %mapped, "API request failed");
        mapped
    }

    /// Shared response handling: non-2xx becomes `ApiError::Status` with
    /// the body preserved, 2xx is decoded into the typed shape.
    async fn read_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "API returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            let mapped = ApiError::Decode(e.to_string());
            tracing::error!(error = %mapped, "API response decode failed");
            mapped
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }
}

impl HealthApi for ApiClient {
    async fn analyze_symptoms(&self, request: &SymptomRequest) -> Result<SymptomAssessment, ApiError> {
        self.post_json("/symptoms/analyze", request).await
    }

    async fn upload_record(&self, payload: UploadPayload) -> Result<UploadReceipt, ApiError> {
        let file_part = multipart::Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.content_type)
            .map_err(|e| ApiError::Transport(format!("Invalid content type: {e}")))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("record_type", payload.record_type)
            .text("report_date", payload.report_date.to_string())
            .text("lab_name", payload.lab_name);
        if let Some(notes) = payload.notes {
            form = form.text("notes", notes);
        }

        let response = self
            .client
            .post(self.url("/records/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    async fn list_records(&self, query: &RecordListQuery) -> Result<RecordListResponse, ApiError> {
        let mut params = vec![
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
        ];
        if let Some(record_type) = &query.record_type {
            params.push(("record_type", record_type.clone()));
        }

        let response = self
            .client
            .get(self.url("/records"))
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    async fn record_details(&self, record_id: &str) -> Result<RecordDetails, ApiError> {
        self.get_json(&format!("/records/{record_id}")).await
    }

    async fn explain_report(&self, record_id: &str) -> Result<ExplainResponse, ApiError> {
        self.post_json(
            "/reports/explain",
            &ExplainRequest {
                record_id: record_id.to_string(),
            },
        )
        .await
    }

    async fn health_trends(&self, record_id: &str) -> Result<TrendsResponse, ApiError> {
        self.get_json(&format!("/reports/{record_id}/trends")).await
    }

    async fn ask_question(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post_json("/chat/ask", request).await
    }

    async fn chat_history(&self, session_id: &str) -> Result<ChatHistoryResponse, ApiError> {
        self.get_json(&format!("/chat/history/{session_id}")).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(client.url("/records"), "http://localhost:8000/api/v1/records");
    }

    #[test]
    fn from_env_defaults_to_local_backend() {
        // Only meaningful when the override is unset, which is the
        // normal test environment.
        if std::env::var(config::API_URL_ENV).is_err() {
            let client = ApiClient::from_env();
            assert_eq!(client.base_url(), config::DEFAULT_API_URL);
        }
    }
}
