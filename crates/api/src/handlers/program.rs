//! Handlers for the `/program` resource.

use axum::extract::{Path, State};
use axum::Json;
use clinic_core::program::{validate_program, ProgramDraft};
use clinic_core::types::parse_id;
use clinic_db::models::program::{Program, ProgramWithCount};
use clinic_db::repositories::{EnrollmentRepo, ProgramRepo};
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// Maximum enrollment-count queries in flight for one listing.
const COUNT_CONCURRENCY: usize = 8;

/// GET /api/program
///
/// Programs ordered by name, each with its enrollment count. Counts are one
/// query per program, run concurrently up to [`COUNT_CONCURRENCY`].
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProgramWithCount>>> {
    let pool = &state.pool;
    let programs = ProgramRepo::list(pool).await?;

    let with_counts: Vec<ProgramWithCount> = stream::iter(programs)
        .map(|program| async move {
            let enrollment_count = EnrollmentRepo::count_for_program(pool, program.id).await?;
            Ok::<_, sqlx::Error>(ProgramWithCount {
                program,
                enrollment_count,
            })
        })
        .buffered(COUNT_CONCURRENCY)
        .try_collect()
        .await?;

    Ok(Json(with_counts))
}

/// POST /api/program
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ProgramDraft>,
) -> AppResult<Json<Program>> {
    let input = validate_program(&draft)?;
    let program = ProgramRepo::create(&state.pool, &input).await?;
    tracing::info!(program_id = %program.id, name = %program.name, "Program created");
    Ok(Json(program))
}

/// GET /api/program/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProgramWithCount>> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Program"))?;
    let program = ProgramRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Program"))?;
    let enrollment_count = EnrollmentRepo::count_for_program(&state.pool, id).await?;

    Ok(Json(ProgramWithCount {
        program,
        enrollment_count,
    }))
}
