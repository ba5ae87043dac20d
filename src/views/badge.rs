//! Severity badge view models.
//!
//! Every closed wire enum maps to exactly one visual tone; the matches
//! below are exhaustive on purpose — adding a wire value without a tone
//! is a compile error, not an unstyled badge.

use serde::Serialize;

use crate::models::enums::{RiskLevel, Severity, TestStatus, TrendDirection, UrgencyLevel};

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Caution,
    Critical,
}

impl Tone {
    /// Pill styling, matching the green/yellow/red badge palette.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "bg-green-100 text-green-800 border-green-200",
            Tone::Caution => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Tone::Critical => "bg-red-100 text-red-800 border-red-200",
        }
    }
}

/// A rendered badge: label text plus tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn new(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }

    pub fn urgency(level: UrgencyLevel) -> Badge {
        let tone = match level {
            UrgencyLevel::Normal => Tone::Positive,
            UrgencyLevel::Moderate => Tone::Caution,
            UrgencyLevel::Urgent => Tone::Critical,
        };
        Badge::new(level.as_str(), tone)
    }

    pub fn severity(severity: Severity) -> Badge {
        let tone = match severity {
            Severity::Normal => Tone::Positive,
            Severity::Monitor => Tone::Caution,
            Severity::Urgent => Tone::Critical,
        };
        Badge::new(severity.as_str(), tone)
    }

    // LOW test values render green in the original design, same as NORMAL.
    pub fn test_status(status: TestStatus) -> Badge {
        let tone = match status {
            TestStatus::Normal | TestStatus::Low => Tone::Positive,
            TestStatus::High => Tone::Critical,
        };
        Badge::new(status.as_str(), tone)
    }

    pub fn risk(level: RiskLevel) -> Badge {
        let tone = match level {
            RiskLevel::Low => Tone::Positive,
            RiskLevel::Moderate => Tone::Caution,
            RiskLevel::High => Tone::Critical,
        };
        Badge::new(level.as_str(), tone)
    }

    pub fn trend(direction: TrendDirection) -> Badge {
        let tone = match direction {
            TrendDirection::Improving => Tone::Positive,
            TrendDirection::Stable => Tone::Caution,
            TrendDirection::Worsening => Tone::Critical,
        };
        Badge::new(direction.as_str(), tone)
    }

    /// Replace the default label (the wire string) with custom text. For
    /// hosts that render their own copy over the mapped tone, e.g. a
    /// trends tab labelling a severity pill with the trend direction.
    pub fn with_label(mut self, label: &str) -> Badge {
        self.label = label.to_string();
        self
    }
}
