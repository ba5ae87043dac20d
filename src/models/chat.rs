use serde::{Deserialize, Serialize};

use super::enums::MessageRole;

/// One chat turn as stored server-side and replayed from history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// ISO 8601.
    pub timestamp: String,
    pub role: MessageRole,
    pub content: String,
}

/// Outgoing question. `session_id` is absent on the first turn of a
/// session and required on every later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Answer to one chat question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub referenced_records: Vec<String>,
    pub confidence_score: f64,
    pub follow_up_suggestions: Vec<String>,
    /// Assigned by the server on the first turn; first-write-wins client-side.
    pub session_id: String,
}
