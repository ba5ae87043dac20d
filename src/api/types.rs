//! Request and response wrapper shapes that exist only at the API boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, HealthTrend, MedicalRecord, ReportExplanation};

/// The records list is a single fixed page.
pub const RECORDS_PAGE_SIZE: u32 = 50;

/// Query for `GET /records`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListQuery {
    pub limit: u32,
    pub offset: u32,
    /// `None` means no filter ("All").
    pub record_type: Option<String>,
}

impl RecordListQuery {
    /// The only page the client ever requests: limit 50, offset 0.
    pub fn first_page(record_type: Option<String>) -> Self {
        Self {
            limit: RECORDS_PAGE_SIZE,
            offset: 0,
            record_type,
        }
    }
}

/// Response of `GET /records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    pub total: u32,
    pub records: Vec<MedicalRecord>,
}

/// Body of `POST /reports/explain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub record_id: String,
}

/// Response of `POST /reports/explain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: ReportExplanation,
}

/// Response of `GET /reports/{id}/trends`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub test_trends: Vec<HealthTrend>,
}

/// Response of `GET /chat/history/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

/// Everything `POST /records/upload` needs, assembled by the upload flow
/// after client-side validation has passed.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub record_type: String,
    pub report_date: NaiveDate,
    pub lab_name: String,
    /// Omitted from the form when empty.
    pub notes: Option<String>,
}

/// The upload response body is opaque to the client; success is the signal.
pub type UploadReceipt = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_fixed_at_fifty_from_zero() {
        let query = RecordListQuery::first_page(None);
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
        assert_eq!(query.record_type, None);
    }

    #[test]
    fn explain_request_carries_record_id() {
        let body = serde_json::to_string(&ExplainRequest {
            record_id: "rec-9".into(),
        })
        .unwrap();
        assert_eq!(body, "{\"record_id\":\"rec-9\"}");
    }
}
