//! Health Q&A chat — an append-only transcript scoped to the page.
//!
//! The first submitted question carries no session identifier; the id
//! the server assigns is captured once and reused for every later turn
//! (first-write-wins, never regenerated mid-session). A failed request
//! appends a synthetic assistant turn with a fixed apology instead of an
//! error state; the turn is tagged so a host can still style it apart.
//! Nothing survives a reload — history lives server-side and can be
//! replayed via `load_history`.

use crate::api::HealthApi;
use crate::models::enums::MessageRole;
use crate::models::ChatRequest;

/// Assistant text appended when a request fails.
pub const CHAT_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Canned prompts offered on the empty transcript.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "What is my latest health score?",
    "Explain my most recent blood test",
    "What foods can improve my iron levels?",
    "When should I get retested?",
];

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    /// ISO 8601, client clock for local turns, server clock for replayed ones.
    pub timestamp: String,
    pub role: MessageRole,
    pub content: String,
    /// True only for the synthetic apology turn.
    pub is_error_notice: bool,
}

impl ChatTurn {
    fn now(role: MessageRole, content: &str) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            role,
            content: content.to_string(),
            is_error_notice: false,
        }
    }
}

/// Page state for the chat route.
#[derive(Debug, Default)]
pub struct HealthChat {
    pub turns: Vec<ChatTurn>,
    pub loading: bool,
    session_id: Option<String>,
}

impl HealthChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Submit one question: the user turn is appended synchronously, the
    /// assistant turn (or the apology) after the round trip. Blank input
    /// or an in-flight request sends nothing.
    pub async fn ask<A: HealthApi>(&mut self, api: &A, question: &str) {
        let question = question.trim();
        if question.is_empty() || self.loading {
            return;
        }

        self.turns.push(ChatTurn::now(MessageRole::User, question));
        self.loading = true;

        let request = ChatRequest {
            question: question.to_string(),
            session_id: self.session_id.clone(),
        };

        match api.ask_question(&request).await {
            Ok(response) => {
                // First-write-wins: only the first response's id is kept.
                if self.session_id.is_none() {
                    self.session_id = Some(response.session_id);
                }
                self.turns
                    .push(ChatTurn::now(MessageRole::Assistant, &response.answer));
            }
            Err(e) => {
                tracing::error!(error = %e, "chat question failed");
                let mut turn = ChatTurn::now(MessageRole::Assistant, CHAT_APOLOGY);
                turn.is_error_notice = true;
                self.turns.push(turn);
            }
        }
        self.loading = false;
    }

    /// Replay a server-side session into local state, adopting its id.
    /// On failure the transcript is left untouched (logged only).
    pub async fn load_history<A: HealthApi>(&mut self, api: &A, session_id: &str) {
        match api.chat_history(session_id).await {
            Ok(history) => {
                self.session_id = Some(history.session_id);
                self.turns = history
                    .messages
                    .into_iter()
                    .map(|m| ChatTurn {
                        timestamp: m.timestamp,
                        role: m.role,
                        content: m.content,
                        is_error_notice: false,
                    })
                    .collect();
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat history unavailable");
            }
        }
    }
}
