//! Home dashboard — aggregate stats fetched once on mount.
//!
//! The four stat cards, the per-type breakdown and the recent-trend rows
//! all render from one `DashboardStats` payload. A failed fetch shows a
//! fixed retry message in place of the cards; the quick-action tiles are
//! static navigation and render regardless.

use crate::api::HealthApi;
use crate::models::DashboardStats;
use crate::routes::Route;

pub const STATS_FAILED: &str = "Failed to load dashboard stats. Please try again.";

/// One quick-action tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub route: Route,
}

/// The fixed tile set under the stat cards.
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Check Symptoms",
            route: Route::SymptomChecker,
        },
        QuickAction {
            label: "Upload Report",
            route: Route::UploadRecords,
        },
        QuickAction {
            label: "View Reports",
            route: Route::Reports,
        },
        QuickAction {
            label: "Ask AI",
            route: Route::Chat,
        },
    ]
}

/// Page state for the home route.
#[derive(Debug, Default)]
pub struct HomePage {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the aggregates (mount, retry).
    pub async fn load<A: HealthApi>(&mut self, api: &A) {
        self.loading = true;
        self.error = None;
        let result = api.dashboard_stats().await;
        self.loading = false;
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => {
                tracing::error!(error = %e, "dashboard stats fetch failed");
                self.error = Some(STATS_FAILED.to_string());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
