//! Per-period availability used by the dashboard's court status grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::types::CourtId;

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Court to report; defaults to the first active court by name.
    pub court_id: Option<CourtId>,
    /// First `YYYY-MM-DD` day to report; defaults to today.
    pub start: Option<String>,
    /// Number of days to report (1 to 31, default 7).
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Partial,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PeriodAvailability {
    pub label: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub status: SlotStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub periods: Vec<PeriodAvailability>,
}
