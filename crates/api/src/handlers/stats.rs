//! Handler for the `/stats` resource.

use axum::extract::State;
use axum::Json;
use clinic_core::program::ProgramStatus;
use clinic_db::models::stats::Stats;
use clinic_db::repositories::{ProgramRepo, StatsRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// The three counts run concurrently; any failure fails the whole request.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let pool = &state.pool;
    let (client_count, program_count, enrollment_count) = tokio::try_join!(
        StatsRepo::count_clients(pool),
        ProgramRepo::count_with_status(pool, ProgramStatus::Active),
        StatsRepo::count_enrollments(pool),
    )?;

    Ok(Json(Stats {
        client_count,
        program_count,
        enrollment_count,
    }))
}
