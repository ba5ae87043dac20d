use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::TrendDirection;

/// One historical measurement of a tracked test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Time series plus direction/velocity/forecast for one recurring test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTrend {
    pub test_name: String,
    /// Ordered oldest-first by the backend.
    pub historical_values: Vec<TrendPoint>,
    pub trend_direction: TrendDirection,
    pub velocity: f64,
    pub forecast: f64,
}

impl HealthTrend {
    /// A line chart needs at least two points; below that only the
    /// textual velocity/forecast is shown.
    pub fn has_chart(&self) -> bool {
        self.historical_values.len() >= 2
    }
}
