use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Severity, TestStatus};

/// A record list item. Identity is `record_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub record_id: String,
    pub record_type: String,
    pub report_date: NaiveDate,
    pub lab_name: String,
    pub status: Severity,
    /// ISO 8601, display-only.
    pub created_at: String,
}

/// One parsed test value from a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTest {
    pub value: f64,
    pub unit: String,
    /// [low, high]
    pub normal_range: [f64; 2],
    pub status: TestStatus,
}

/// Server-side analysis summary attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAnalysis {
    pub simple_explanation: String,
    pub key_findings: Vec<String>,
    pub risk_score: f64,
    pub recommendations: Vec<String>,
}

/// Full detail for one record, fetched per `record_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDetails {
    pub record_id: String,
    pub record_type: String,
    pub report_date: NaiveDate,
    pub lab_name: String,
    pub extracted_text: String,
    /// Test name → parsed value. BTreeMap keeps display order stable.
    pub parsed_data: BTreeMap<String, ParsedTest>,
    pub analysis: RecordAnalysis,
}
