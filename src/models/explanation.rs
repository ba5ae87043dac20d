use serde::{Deserialize, Serialize};

use super::enums::{RiskLevel, Severity};

/// One explained test finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyFinding {
    pub test_name: String,
    pub your_value: String,
    pub normal_range: String,
    pub meaning: String,
    pub severity: Severity,
    pub action: String,
}

/// Plain-language, scored interpretation of one record.
/// Independently fetchable; absence just leaves the tab empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExplanation {
    pub simple_summary: String,
    pub key_findings: Vec<KeyFinding>,
    /// 0-100; drives the health-score bar.
    pub overall_health_score: u8,
    pub risk_level: RiskLevel,
    pub positive_findings: Vec<String>,
    pub concerns: Vec<String>,
    pub next_steps: Vec<String>,
}
