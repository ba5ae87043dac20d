use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::TrendArrow;

/// Movement of one dashboard metric since the previous report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTrend {
    pub metric: String,
    pub trend: TrendArrow,
    pub change_percent: f64,
}

/// Aggregated stats for the home dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_records: u32,
    pub latest_health_score: u8,
    pub urgent_findings: u32,
    pub reports_by_type: BTreeMap<String, u32>,
    pub recent_trends: Vec<RecentTrend>,
}
