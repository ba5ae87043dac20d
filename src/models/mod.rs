//! Wire DTOs exchanged with the HealthSense backend.
//!
//! Nothing here is created or owned by the client beyond transient page
//! state; every struct mirrors a backend request or response shape.

pub mod assessment;
pub mod chat;
pub mod dashboard;
pub mod enums;
pub mod explanation;
pub mod record;
pub mod trend;

pub use assessment::{PossibleCondition, SymptomAssessment, SymptomRequest};
pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use dashboard::{DashboardStats, RecentTrend};
pub use explanation::{KeyFinding, ReportExplanation};
pub use record::{MedicalRecord, ParsedTest, RecordAnalysis, RecordDetails};
pub use trend::{HealthTrend, TrendPoint};
