//! API access layer — one function per backend capability.
//!
//! The `HealthApi` trait is the seam between page controllers and the
//! network: controllers are generic over it, `ApiClient` implements it
//! over HTTP+JSON, and `MockHealthApi` scripts it for tests. Each method
//! issues exactly one request and returns the parsed body typed to the
//! corresponding response shape; transport and HTTP errors propagate
//! unchanged to the caller after a side-effecting log.

pub mod client;
pub mod error;
pub mod mock;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use mock::{MockHealthApi, RecordedCall};
pub use types::{
    ChatHistoryResponse, ExplainRequest, ExplainResponse, RecordListQuery, RecordListResponse,
    TrendsResponse, UploadPayload, UploadReceipt, RECORDS_PAGE_SIZE,
};

use crate::models::{
    ChatRequest, ChatResponse, DashboardStats, RecordDetails, SymptomAssessment, SymptomRequest,
};

/// The backend's capabilities, one async method per endpoint.
///
/// No retries, no caching: every call is a fresh round trip.
#[allow(async_fn_in_trait)]
pub trait HealthApi {
    /// `POST /symptoms/analyze`
    async fn analyze_symptoms(&self, request: &SymptomRequest) -> Result<SymptomAssessment, ApiError>;

    /// `POST /records/upload` (multipart)
    async fn upload_record(&self, payload: UploadPayload) -> Result<UploadReceipt, ApiError>;

    /// `GET /records`
    async fn list_records(&self, query: &RecordListQuery) -> Result<RecordListResponse, ApiError>;

    /// `GET /records/{id}`
    async fn record_details(&self, record_id: &str) -> Result<RecordDetails, ApiError>;

    /// `POST /reports/explain`
    async fn explain_report(&self, record_id: &str) -> Result<ExplainResponse, ApiError>;

    /// `GET /reports/{id}/trends`
    async fn health_trends(&self, record_id: &str) -> Result<TrendsResponse, ApiError>;

    /// `POST /chat/ask`
    async fn ask_question(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    /// `GET /chat/history/{id}`
    async fn chat_history(&self, session_id: &str) -> Result<ChatHistoryResponse, ApiError>;

    /// `GET /dashboard/stats`
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;
}
