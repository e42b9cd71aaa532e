//! Request/response shapes that are not entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters of the hire-date filter, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Seconds since the state was created.
    pub uptime: u64,
}
