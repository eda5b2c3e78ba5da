//! Query parameter types for list endpoints.
//!
//! Values arrive as raw strings and are parsed in `clinic_core` so bad input
//! produces a JSON error body rather than an extractor rejection.

use serde::Deserialize;

/// `GET /api/client?search=&programId=&sort=&order=`
#[derive(Debug, Default, Deserialize)]
pub struct ClientListParams {
    pub search: Option<String>,
    #[serde(rename = "programId", alias = "program", alias = "program_id")]
    pub program_id: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// `GET /api/enrollment?clientId=&programId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentListParams {
    #[serde(alias = "client_id")]
    pub client_id: Option<String>,
    #[serde(alias = "program_id")]
    pub program_id: Option<String>,
}
