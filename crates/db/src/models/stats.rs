//! Aggregate counts for the dashboard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub client_count: i64,
    /// Programs with status `active`.
    pub program_count: i64,
    pub enrollment_count: i64,
}
