use serde::{Deserialize, Serialize};

use super::enums::UrgencyLevel;

/// Input to symptom analysis, accumulated across the wizard steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
    pub age: u32,
    pub gender: String,
    pub duration: String,
    /// Self-reported severity, 1-10.
    pub severity: u8,
}

/// One candidate condition with its estimated probability in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PossibleCondition {
    pub condition: String,
    pub probability: f64,
    pub description: String,
}

/// The full output of one symptom analysis. Held only in page state
/// until the user resets the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAssessment {
    pub assessment_id: String,
    pub urgency_level: UrgencyLevel,
    /// 0-100; drives the urgency progress bar.
    pub urgency_score: u8,
    pub possible_conditions: Vec<PossibleCondition>,
    pub recommended_tests: Vec<String>,
    pub action_items: Vec<String>,
    pub warning_signs: Vec<String>,
    pub when_to_seek_care: String,
}
