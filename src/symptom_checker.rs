//! Symptom checker wizard — a three-step linear form.
//!
//! Step 1 collects the symptom description, step 2 the profile fields
//! (age, gender, duration), step 3 the severity slider and the submit.
//! Navigation is strictly forward/back with no skipping; each forward
//! transition is gated on the current step's required fields. A successful
//! submit replaces the form with a read-only assessment until reset.

use crate::api::HealthApi;
use crate::models::{SymptomAssessment, SymptomRequest};

/// Fixed user-facing failure string; the error detail only goes to the log.
pub const ANALYZE_FAILED: &str = "Failed to analyze symptoms. Please try again.";

/// Bounds of the age input on the profile step.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=120;

/// Wizard position. Always one of the three steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Symptoms,
    Profile,
    Severity,
}

impl WizardStep {
    /// 1-based step number for the progress header.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Symptoms => 1,
            WizardStep::Profile => 2,
            WizardStep::Severity => 3,
        }
    }
}

/// Form fields accumulated across the steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomForm {
    pub symptoms: String,
    pub age: Option<u32>,
    pub gender: String,
    pub duration: String,
    /// 1-10, slider default 5.
    pub severity: u8,
}

impl Default for SymptomForm {
    fn default() -> Self {
        Self {
            symptoms: String::new(),
            age: None,
            gender: String::new(),
            duration: String::new(),
            severity: 5,
        }
    }
}

/// Page state for the symptom-checker route.
#[derive(Debug, Default)]
pub struct SymptomChecker {
    step: WizardStep,
    pub form: SymptomForm,
    pub loading: bool,
    pub error: Option<String>,
    pub assessment: Option<SymptomAssessment>,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Symptoms
    }
}

impl SymptomChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Clamp the slider into its 1-10 range.
    pub fn set_severity(&mut self, severity: u8) {
        self.form.severity = severity.clamp(1, 10);
    }

    /// Clamp the age input into its 1-120 range.
    pub fn set_age(&mut self, age: u32) {
        self.form.age = Some(age.clamp(*AGE_RANGE.start(), *AGE_RANGE.end()));
    }

    /// Is the current step's gate satisfied?
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Symptoms => !self.form.symptoms.trim().is_empty(),
            WizardStep::Profile => {
                matches!(self.form.age, Some(age) if AGE_RANGE.contains(&age))
                    && !self.form.gender.is_empty()
                    && !self.form.duration.is_empty()
            }
            // Step 3 leaves the wizard via submit, not next.
            WizardStep::Severity => false,
        }
    }

    /// Move forward one step. Returns false when blocked by the gate or
    /// already on the last step.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            WizardStep::Symptoms => WizardStep::Profile,
            WizardStep::Profile => WizardStep::Severity,
            WizardStep::Severity => return false,
        };
        true
    }

    /// Move back one step. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        self.step = match self.step {
            WizardStep::Symptoms => return false,
            WizardStep::Profile => WizardStep::Symptoms,
            WizardStep::Severity => WizardStep::Profile,
        };
        true
    }

    /// Submit the accumulated form. Only valid on step 3 with every
    /// required field present; otherwise no request is sent.
    pub async fn submit<A: HealthApi>(&mut self, api: &A) {
        if self.step != WizardStep::Severity {
            return;
        }
        let Some(age) = self.form.age.filter(|a| AGE_RANGE.contains(a)) else {
            return;
        };
        if self.form.symptoms.trim().is_empty()
            || self.form.gender.is_empty()
            || self.form.duration.is_empty()
        {
            return;
        }

        self.loading = true;
        self.error = None;

        let request = SymptomRequest {
            symptoms: self.form.symptoms.clone(),
            age,
            gender: self.form.gender.clone(),
            duration: self.form.duration.clone(),
            severity: self.form.severity,
        };

        let result = api.analyze_symptoms(&request).await;
        self.loading = false;
        match result {
            Ok(assessment) => self.assessment = Some(assessment),
            Err(e) => {
                tracing::error!(error = %e, "symptom analysis failed");
                self.error = Some(ANALYZE_FAILED.to_string());
            }
        }
    }

    /// "Check New Symptoms": back to step 1 with an empty form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
