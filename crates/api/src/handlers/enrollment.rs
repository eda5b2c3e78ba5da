//! Handlers for the `/enrollment` resource.

use axum::extract::State;
use axum::Json;
use clinic_core::enrollment::EnrollmentDraft;
use clinic_core::types::parse_id;
use clinic_core::validation::non_blank;
use clinic_db::models::enrollment::{EnrollmentCreated, EnrollmentFilter, EnrollmentListItem};
use clinic_db::repositories::EnrollmentRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::query::EnrollmentListParams;
use crate::state::AppState;
use crate::workflows;

/// GET /api/enrollment?clientId=&programId=
///
/// A filter value that is not a valid id matches nothing.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<EnrollmentListParams>,
) -> AppResult<Json<Vec<EnrollmentListItem>>> {
    let mut filter = EnrollmentFilter::default();

    if let Some(raw) = non_blank(params.client_id.as_deref()) {
        match parse_id(raw) {
            Some(id) => filter.client_id = Some(id),
            None => return Ok(Json(Vec::new())),
        }
    }
    if let Some(raw) = non_blank(params.program_id.as_deref()) {
        match parse_id(raw) {
            Some(id) => filter.program_id = Some(id),
            None => return Ok(Json(Vec::new())),
        }
    }

    let enrollments = EnrollmentRepo::list(&state.pool, &filter).await?;
    Ok(Json(enrollments))
}

/// POST /api/enrollment
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<EnrollmentDraft>,
) -> AppResult<Json<EnrollmentCreated>> {
    let created = workflows::enrollment::enroll(&state.pool, &draft).await?;
    Ok(Json(created))
}
