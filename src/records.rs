//! Records list — fetched on mount and on every filter change.
//!
//! The list is a single fixed page (limit 50, offset 0). The type filter
//! is a closed single-select whose "All" sentinel maps to no
//! `record_type` parameter. Fetches are epoch-tagged so a response that
//! resolves after the controller has moved on (filter changed, page
//! left) is discarded instead of clobbering newer state.

use crate::api::{ApiError, HealthApi, RecordListQuery, RecordListResponse};
use crate::models::MedicalRecord;
use crate::routes::Route;

pub const LOAD_FAILED: &str = "Failed to load records. Please try again.";

/// The fixed filter catalogue shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordTypeFilter {
    #[default]
    All,
    BloodTest,
    XRay,
    Mri,
    CtScan,
    Ultrasound,
    Ecg,
    Other,
}

impl RecordTypeFilter {
    pub const ALL_FILTERS: &'static [RecordTypeFilter] = &[
        RecordTypeFilter::All,
        RecordTypeFilter::BloodTest,
        RecordTypeFilter::XRay,
        RecordTypeFilter::Mri,
        RecordTypeFilter::CtScan,
        RecordTypeFilter::Ultrasound,
        RecordTypeFilter::Ecg,
        RecordTypeFilter::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecordTypeFilter::All => "All",
            RecordTypeFilter::BloodTest => "Blood Test",
            RecordTypeFilter::XRay => "X-Ray",
            RecordTypeFilter::Mri => "MRI",
            RecordTypeFilter::CtScan => "CT Scan",
            RecordTypeFilter::Ultrasound => "Ultrasound",
            RecordTypeFilter::Ecg => "ECG",
            RecordTypeFilter::Other => "Other",
        }
    }

    /// Query parameter value: `All` sends none, every other filter sends
    /// its exact label.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            RecordTypeFilter::All => None,
            other => Some(other.label()),
        }
    }
}

/// Token tying an in-flight fetch to the state it may update.
#[derive(Debug)]
pub struct FetchToken(u64);

/// Page state for the records-list route.
#[derive(Debug, Default)]
pub struct RecordsList {
    pub records: Vec<MedicalRecord>,
    pub total: u32,
    pub loading: bool,
    pub error: Option<String>,
    filter: RecordTypeFilter,
    epoch: u64,
}

impl RecordsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> RecordTypeFilter {
        self.filter
    }

    /// Start a fetch for the current filter. The returned token must be
    /// handed back to `finish_fetch` with the response.
    pub fn begin_fetch(&mut self) -> (FetchToken, RecordListQuery) {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        let query = RecordListQuery::first_page(self.filter.as_param().map(str::to_string));
        (FetchToken(self.epoch), query)
    }

    /// Apply a fetch result. A stale token (another fetch started in the
    /// meantime) makes this a no-op.
    pub fn finish_fetch(
        &mut self,
        token: FetchToken,
        result: Result<RecordListResponse, ApiError>,
    ) {
        if token.0 != self.epoch {
            tracing::debug!("discarding superseded records response");
            return;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.records = response.records;
                self.total = response.total;
            }
            Err(e) => {
                tracing::error!(error = %e, "records list fetch failed");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// Fetch the list (mount, retry).
    pub async fn load<A: HealthApi>(&mut self, api: &A) {
        let (token, query) = self.begin_fetch();
        let result = api.list_records(&query).await;
        self.finish_fetch(token, result);
    }

    /// Switch filters and refetch.
    pub async fn set_filter<A: HealthApi>(&mut self, api: &A, filter: RecordTypeFilter) {
        self.filter = filter;
        self.load(api).await;
    }

    /// Where clicking a record navigates.
    pub fn detail_route(record: &MedicalRecord) -> Route {
        Route::ReportDetail {
            record_id: record.record_id.clone(),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockHealthApi, RecordedCall};
    use crate::models::enums::Severity;
    use chrono::NaiveDate;

    fn record(id: &str, record_type: &str) -> MedicalRecord {
        MedicalRecord {
            record_id: id.into(),
            record_type: record_type.into(),
            report_date: NaiveDate::from_ymd_opt(2024, 10, 25).unwrap(),
            lab_name: "Apollo Diagnostics".into(),
            status: Severity::Normal,
            created_at: "2024-10-26T09:15:00".into(),
        }
    }

    fn listing(records: Vec<MedicalRecord>) -> RecordListResponse {
        RecordListResponse {
            total: records.len() as u32,
            records,
        }
    }

    #[tokio::test]
    async fn load_requests_the_single_fixed_page() {
        let api = MockHealthApi::new().with_records(listing(vec![record("r1", "Blood Test")]));
        let mut list = RecordsList::new();

        list.load(&api).await;

        assert_eq!(list.records.len(), 1);
        assert_eq!(list.total, 1);
        assert!(!list.loading);
        assert_eq!(
            api.calls(),
            vec![RecordedCall::ListRecords {
                limit: 50,
                offset: 0,
                record_type: None,
            }],
        );
    }

    #[tokio::test]
    async fn all_filter_sends_no_parameter_others_send_their_label() {
        let api = MockHealthApi::new()
            .with_records(listing(vec![]))
            .with_records(listing(vec![]));
        let mut list = RecordsList::new();

        list.set_filter(&api, RecordTypeFilter::XRay).await;
        list.set_filter(&api, RecordTypeFilter::All).await;

        assert_eq!(
            api.calls(),
            vec![
                RecordedCall::ListRecords {
                    limit: 50,
                    offset: 0,
                    record_type: Some("X-Ray".into()),
                },
                RecordedCall::ListRecords {
                    limit: 50,
                    offset: 0,
                    record_type: None,
                },
            ],
        );
    }

    #[tokio::test]
    async fn fetch_failure_sets_fixed_error() {
        let api = MockHealthApi::new()
            .with_records_error(crate::api::ApiError::Connection("http://down".into()));
        let mut list = RecordsList::new();

        list.load(&api).await;

        assert_eq!(list.error.as_deref(), Some(LOAD_FAILED));
        assert!(list.records.is_empty());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut list = RecordsList::new();

        let (stale, _) = list.begin_fetch();
        let (fresh, _) = list.begin_fetch();

        // The superseded response arrives late and must not apply.
        list.finish_fetch(stale, Ok(listing(vec![record("old", "MRI")])));
        assert!(list.records.is_empty());
        assert!(list.loading);

        list.finish_fetch(fresh, Ok(listing(vec![record("new", "ECG")])));
        assert_eq!(list.records[0].record_id, "new");
        assert!(!list.loading);
    }

    #[test]
    fn filter_catalogue_has_all_sentinel_first() {
        assert_eq!(RecordTypeFilter::ALL_FILTERS.len(), 8);
        assert_eq!(RecordTypeFilter::ALL_FILTERS[0], RecordTypeFilter::All);
        assert_eq!(RecordTypeFilter::All.as_param(), None);
        assert_eq!(RecordTypeFilter::CtScan.as_param(), Some("CT Scan"));
    }

    #[test]
    fn records_navigate_to_their_detail_route() {
        let route = RecordsList::detail_route(&record("rec-7", "MRI"));
        assert_eq!(route.to_path(), "/reports/rec-7");
    }
}
