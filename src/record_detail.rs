//! Record detail — one required fetch plus two best-effort ones.
//!
//! On every route-parameter change, three independent requests go out
//! concurrently: record details (required), explanation (optional) and
//! trends (optional). The join waits for all three; failure of either
//! optional call leaves its tab empty and never blocks the required one.
//! The three tabs render over the same fetched data — switching tabs
//! triggers no network activity.

use crate::api::{ApiError, ExplainResponse, HealthApi, TrendsResponse};
use crate::models::{HealthTrend, RecordDetails, ReportExplanation};

pub const DETAIL_FAILED: &str = "Failed to load report details. Please try again.";

/// The three mutually exclusive tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Explanation,
    Trends,
}

/// Token tying an in-flight load to the route parameter it was issued for.
#[derive(Debug)]
pub struct FetchToken(u64);

/// Page state for the record-detail route.
#[derive(Debug, Default)]
pub struct RecordDetail {
    record_id: Option<String>,
    pub record: Option<RecordDetails>,
    pub explanation: Option<ReportExplanation>,
    pub trends: Vec<HealthTrend>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_tab: DetailTab,
    epoch: u64,
}

impl RecordDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Start loading a record. Supersedes any load still in flight.
    pub fn begin_load(&mut self, record_id: &str) -> FetchToken {
        self.record_id = Some(record_id.to_string());
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        FetchToken(self.epoch)
    }

    /// Apply the three results. A stale token (the route moved on while
    /// the requests were in flight) makes this a no-op.
    pub fn finish_load(
        &mut self,
        token: FetchToken,
        details: Result<RecordDetails, ApiError>,
        explanation: Result<ExplainResponse, ApiError>,
        trends: Result<TrendsResponse, ApiError>,
    ) {
        if token.0 != self.epoch {
            tracing::debug!("discarding superseded record detail response");
            return;
        }
        self.loading = false;

        match details {
            Ok(record) => {
                self.record = Some(record);
                self.explanation = match explanation {
                    Ok(response) => Some(response.explanation),
                    Err(e) => {
                        tracing::warn!(error = %e, "explanation unavailable");
                        None
                    }
                };
                self.trends = match trends {
                    Ok(response) => response.test_trends,
                    Err(e) => {
                        tracing::warn!(error = %e, "trends unavailable");
                        Vec::new()
                    }
                };
            }
            Err(e) => {
                // The required fetch failed: blocking error view, no tabs.
                tracing::error!(error = %e, "record detail fetch failed");
                self.record = None;
                self.explanation = None;
                self.trends = Vec::new();
                self.error = Some(DETAIL_FAILED.to_string());
            }
        }
    }

    /// Fetch everything for one record: three concurrent requests, one
    /// join, optional failures tolerated.
    pub async fn load<A: HealthApi>(&mut self, api: &A, record_id: &str) {
        let token = self.begin_load(record_id);
        let (details, explanation, trends) = tokio::join!(
            api.record_details(record_id),
            api.explain_report(record_id),
            api.health_trends(record_id),
        );
        self.finish_load(token, details, explanation, trends);
    }

    /// Tab switches are pure view state.
    pub fn set_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockHealthApi, RecordedCall};
    use crate::models::enums::{RiskLevel, TrendDirection};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn details(id: &str) -> RecordDetails {
        RecordDetails {
            record_id: id.into(),
            record_type: "Blood Test".into(),
            report_date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            lab_name: "Apollo Diagnostics".into(),
            extracted_text: "Hemoglobin 14.2 g/dL".into(),
            parsed_data: BTreeMap::new(),
            analysis: crate::models::RecordAnalysis {
                simple_explanation: "All values within range.".into(),
                key_findings: vec![],
                risk_score: 10.0,
                recommendations: vec![],
            },
        }
    }

    fn explanation() -> ExplainResponse {
        ExplainResponse {
            explanation: ReportExplanation {
                simple_summary: "Your blood counts look healthy.".into(),
                key_findings: vec![],
                overall_health_score: 88,
                risk_level: RiskLevel::Low,
                positive_findings: vec!["Hemoglobin normal".into()],
                concerns: vec![],
                next_steps: vec![],
            },
        }
    }

    fn trends() -> TrendsResponse {
        TrendsResponse {
            test_trends: vec![HealthTrend {
                test_name: "Hemoglobin".into(),
                historical_values: vec![],
                trend_direction: TrendDirection::Stable,
                velocity: 0.0,
                forecast: 14.2,
            }],
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn load_issues_three_concurrent_requests() {
        let api = MockHealthApi::new()
            .with_details(details("rec-1"))
            .with_explanation(explanation())
            .with_trends(trends());
        let mut detail = RecordDetail::new();

        detail.load(&api, "rec-1").await;

        assert!(detail.record.is_some());
        assert!(detail.explanation.is_some());
        assert_eq!(detail.trends.len(), 1);
        assert!(detail.error.is_none());

        let calls = api.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&RecordedCall::RecordDetails("rec-1".into())));
        assert!(calls.contains(&RecordedCall::ExplainReport("rec-1".into())));
        assert!(calls.contains(&RecordedCall::HealthTrends("rec-1".into())));
    }

    #[tokio::test]
    async fn optional_failures_do_not_block_the_page() {
        let api = MockHealthApi::new()
            .with_details(details("rec-1"))
            .with_explanation_error(server_error())
            .with_trends_error(server_error());
        let mut detail = RecordDetail::new();

        detail.load(&api, "rec-1").await;

        assert!(detail.record.is_some());
        assert!(detail.explanation.is_none());
        assert!(detail.trends.is_empty());
        assert!(detail.error.is_none());
    }

    #[tokio::test]
    async fn required_failure_blocks_with_fixed_error() {
        let api = MockHealthApi::new()
            .with_details_error(server_error())
            .with_explanation(explanation())
            .with_trends(trends());
        let mut detail = RecordDetail::new();

        detail.load(&api, "rec-1").await;

        assert!(detail.record.is_none());
        assert!(detail.explanation.is_none());
        assert!(detail.trends.is_empty());
        assert_eq!(detail.error.as_deref(), Some(DETAIL_FAILED));
    }

    #[tokio::test]
    async fn tab_switches_trigger_no_requests() {
        let api = MockHealthApi::new()
            .with_details(details("rec-1"))
            .with_explanation(explanation())
            .with_trends(trends());
        let mut detail = RecordDetail::new();
        detail.load(&api, "rec-1").await;
        let calls_after_load = api.calls().len();

        detail.set_tab(DetailTab::Explanation);
        detail.set_tab(DetailTab::Trends);
        detail.set_tab(DetailTab::Overview);

        assert_eq!(api.calls().len(), calls_after_load);
    }

    #[test]
    fn response_for_a_superseded_record_is_discarded() {
        let mut detail = RecordDetail::new();

        let stale = detail.begin_load("rec-1");
        let fresh = detail.begin_load("rec-2");

        detail.finish_load(
            stale,
            Ok(details("rec-1")),
            Err(server_error()),
            Err(server_error()),
        );
        assert!(detail.record.is_none());
        assert!(detail.loading);

        detail.finish_load(
            fresh,
            Ok(details("rec-2")),
            Err(server_error()),
            Err(server_error()),
        );
        assert_eq!(detail.record.as_ref().unwrap().record_id, "rec-2");
        assert_eq!(detail.record_id(), Some("rec-2"));
    }
}
