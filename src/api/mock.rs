//! Scripted `HealthApi` double for testing — controllers can't reach a
//! real backend in tests, so responses are queued per endpoint and every
//! call is recorded for assertions.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::models::{
    ChatRequest, ChatResponse, DashboardStats, RecordDetails, SymptomAssessment, SymptomRequest,
};

use super::error::ApiError;
use super::types::{
    ChatHistoryResponse, ExplainResponse, RecordListQuery, RecordListResponse, TrendsResponse,
    UploadPayload, UploadReceipt,
};
use super::HealthApi;

/// One observed call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    AnalyzeSymptoms(SymptomRequest),
    UploadRecord {
        file_name: String,
        content_type: String,
        record_type: String,
        notes: Option<String>,
    },
    ListRecords {
        limit: u32,
        offset: u32,
        record_type: Option<String>,
    },
    RecordDetails(String),
    ExplainReport(String),
    HealthTrends(String),
    AskQuestion {
        question: String,
        session_id: Option<String>,
    },
    ChatHistory(String),
    DashboardStats,
}

#[derive(Default)]
struct Queues {
    assessments: VecDeque<Result<SymptomAssessment, ApiError>>,
    uploads: VecDeque<Result<UploadReceipt, ApiError>>,
    record_lists: VecDeque<Result<RecordListResponse, ApiError>>,
    details: VecDeque<Result<RecordDetails, ApiError>>,
    explanations: VecDeque<Result<ExplainResponse, ApiError>>,
    trends: VecDeque<Result<TrendsResponse, ApiError>>,
    chat: VecDeque<Result<ChatResponse, ApiError>>,
    history: VecDeque<Result<ChatHistoryResponse, ApiError>>,
    stats: VecDeque<Result<DashboardStats, ApiError>>,
}

/// Mock API — returns scripted responses in FIFO order per endpoint.
/// An endpoint with no remaining script answers with a transport error.
#[derive(Default)]
pub struct MockHealthApi {
    queues: Mutex<Queues>,
    calls: Mutex<Vec<RecordedCall>>,
}

fn next<T>(queue: &mut VecDeque<Result<T, ApiError>>, endpoint: &str) -> Result<T, ApiError> {
    queue
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Transport(format!("no scripted response for {endpoint}"))))
}

impl MockHealthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock lock").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("mock lock").push(call);
    }

    fn with<F: FnOnce(&mut Queues)>(self, f: F) -> Self {
        f(&mut self.queues.lock().expect("mock lock"));
        self
    }

    // ── Scripting (builder-style, chainable) ────────────────

    pub fn with_assessment(self, assessment: SymptomAssessment) -> Self {
        self.with(|q| q.assessments.push_back(Ok(assessment)))
    }

    pub fn with_assessment_error(self, error: ApiError) -> Self {
        self.with(|q| q.assessments.push_back(Err(error)))
    }

    pub fn with_upload_ok(self) -> Self {
        self.with(|q| q.uploads.push_back(Ok(serde_json::json!({"status": "success"}))))
    }

    pub fn with_upload_error(self, error: ApiError) -> Self {
        self.with(|q| q.uploads.push_back(Err(error)))
    }

    pub fn with_records(self, response: RecordListResponse) -> Self {
        self.with(|q| q.record_lists.push_back(Ok(response)))
    }

    pub fn with_records_error(self, error: ApiError) -> Self {
        self.with(|q| q.record_lists.push_back(Err(error)))
    }

    pub fn with_details(self, details: RecordDetails) -> Self {
        self.with(|q| q.details.push_back(Ok(details)))
    }

    pub fn with_details_error(self, error: ApiError) -> Self {
        self.with(|q| q.details.push_back(Err(error)))
    }

    pub fn with_explanation(self, response: ExplainResponse) -> Self {
        self.with(|q| q.explanations.push_back(Ok(response)))
    }

    pub fn with_explanation_error(self, error: ApiError) -> Self {
        self.with(|q| q.explanations.push_back(Err(error)))
    }

    pub fn with_trends(self, response: TrendsResponse) -> Self {
        self.with(|q| q.trends.push_back(Ok(response)))
    }

    pub fn with_trends_error(self, error: ApiError) -> Self {
        self.with(|q| q.trends.push_back(Err(error)))
    }

    pub fn with_chat_response(self, response: ChatResponse) -> Self {
        self.with(|q| q.chat.push_back(Ok(response)))
    }

    pub fn with_chat_error(self, error: ApiError) -> Self {
        self.with(|q| q.chat.push_back(Err(error)))
    }

    pub fn with_history(self, response: ChatHistoryResponse) -> Self {
        self.with(|q| q.history.push_back(Ok(response)))
    }

    pub fn with_history_error(self, error: ApiError) -> Self {
        self.with(|q| q.history.push_back(Err(error)))
    }

    pub fn with_stats(self, stats: DashboardStats) -> Self {
        self.with(|q| q.stats.push_back(Ok(stats)))
    }

    pub fn with_stats_error(self, error: ApiError) -> Self {
        self.with(|q| q.stats.push_back(Err(error)))
    }
}

impl HealthApi for MockHealthApi {
    async fn analyze_symptoms(&self, request: &SymptomRequest) -> Result<SymptomAssessment, ApiError> {
        self.record(RecordedCall::AnalyzeSymptoms(request.clone()));
        next(&mut self.queues.lock().expect("mock lock").assessments, "analyze_symptoms")
    }

    async fn upload_record(&self, payload: UploadPayload) -> Result<UploadReceipt, ApiError> {
        self.record(RecordedCall::UploadRecord {
            file_name: payload.file_name,
            content_type: payload.content_type,
            record_type: payload.record_type,
            notes: payload.notes,
        });
        next(&mut self.queues.lock().expect("mock lock").uploads, "upload_record")
    }

    async fn list_records(&self, query: &RecordListQuery) -> Result<RecordListResponse, ApiError> {
        self.record(RecordedCall::ListRecords {
            limit: query.limit,
            offset: query.offset,
            record_type: query.record_type.clone(),
        });
        next(&mut self.queues.lock().expect("mock lock").record_lists, "list_records")
    }

    async fn record_details(&self, record_id: &str) -> Result<RecordDetails, ApiError> {
        self.record(RecordedCall::RecordDetails(record_id.to_string()));
        next(&mut self.queues.lock().expect("mock lock").details, "record_details")
    }

    async fn explain_report(&self, record_id: &str) -> Result<ExplainResponse, ApiError> {
        self.record(RecordedCall::ExplainReport(record_id.to_string()));
        next(&mut self.queues.lock().expect("mock lock").explanations, "explain_report")
    }

    async fn health_trends(&self, record_id: &str) -> Result<TrendsResponse, ApiError> {
        self.record(RecordedCall::HealthTrends(record_id.to_string()));
        next(&mut self.queues.lock().expect("mock lock").trends, "health_trends")
    }

    async fn ask_question(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.record(RecordedCall::AskQuestion {
            question: request.question.clone(),
            session_id: request.session_id.clone(),
        });
        next(&mut self.queues.lock().expect("mock lock").chat, "ask_question")
    }

    async fn chat_history(&self, session_id: &str) -> Result<ChatHistoryResponse, ApiError> {
        self.record(RecordedCall::ChatHistory(session_id.to_string()));
        next(&mut self.queues.lock().expect("mock lock").history, "chat_history")
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record(RecordedCall::DashboardStats);
        next(&mut self.queues.lock().expect("mock lock").stats, "dashboard_stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::UrgencyLevel;

    fn sample_assessment() -> SymptomAssessment {
        SymptomAssessment {
            assessment_id: "a-1".into(),
            urgency_level: UrgencyLevel::Normal,
            urgency_score: 20,
            possible_conditions: vec![],
            recommended_tests: vec![],
            action_items: vec![],
            warning_signs: vec![],
            when_to_seek_care: "If symptoms persist beyond a week.".into(),
        }
    }

    #[tokio::test]
    async fn scripted_responses_are_fifo() {
        let api = MockHealthApi::new()
            .with_assessment(sample_assessment())
            .with_assessment_error(ApiError::Status {
                status: 500,
                body: String::new(),
            });

        let request = SymptomRequest {
            symptoms: "fever".into(),
            age: 30,
            gender: "male".into(),
            duration: "3 days".into(),
            severity: 6,
        };

        assert!(api.analyze_symptoms(&request).await.is_ok());
        assert!(api.analyze_symptoms(&request).await.is_err());
        // Exhausted script answers with a transport error, not a panic.
        assert!(api.analyze_symptoms(&request).await.is_err());
        assert_eq!(api.calls().len(), 3);
    }

    #[tokio::test]
    async fn calls_are_recorded_with_arguments() {
        let api = MockHealthApi::new().with_stats_error(ApiError::Transport("down".into()));
        let _ = api.dashboard_stats().await;
        assert_eq!(api.calls(), vec![RecordedCall::DashboardStats]);
    }
}
