//! Enroll a client in a program.
//!
//! Steps, in order:
//! 1. Validate the request shape (both ids present).
//! 2. Verify the client exists, then the program.
//! 3. Reject if the pairing already exists.
//! 4. Insert the enrollment (`active`, dated now).
//! 5. Re-fetch the program and return it alongside the new row.
//!
//! Step 3 is only a fast path. The insert itself is guarded by the
//! `uq_client_programs_client_program` constraint, and a duplicate that slips
//! past step 3 under concurrency is reported as the same conflict.

use clinic_core::enrollment::{validate_enrollment, EnrollmentDraft, ALREADY_ENROLLED};
use clinic_core::error::CoreError;
use clinic_db::models::enrollment::{CreateEnrollment, EnrollmentCreated};
use clinic_db::repositories::{ClientRepo, EnrollmentRepo, ProgramRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub async fn enroll(pool: &PgPool, draft: &EnrollmentDraft) -> AppResult<EnrollmentCreated> {
    let request = validate_enrollment(draft)?;

    let Some(client_id) = request.client_id else {
        return Err(AppError::not_found("Client"));
    };
    if !ClientRepo::exists(pool, client_id).await? {
        return Err(AppError::not_found("Client"));
    }

    let Some(program_id) = request.program_id else {
        return Err(AppError::not_found("Program"));
    };
    if !ProgramRepo::exists(pool, program_id).await? {
        return Err(AppError::not_found("Program"));
    }

    if EnrollmentRepo::exists_for_pair(pool, client_id, program_id).await? {
        return Err(already_enrolled());
    }

    let input = CreateEnrollment {
        client_id,
        program_id,
        notes: request.notes,
    };
    let enrollment = EnrollmentRepo::create(pool, &input).await?.ok_or_else(|| {
        tracing::warn!(%client_id, %program_id, "Concurrent duplicate enrollment rejected by constraint");
        already_enrolled()
    })?;

    let program = ProgramRepo::find_by_id(pool, program_id)
        .await?
        .ok_or_else(|| AppError::not_found("Program"))?;

    tracing::info!(
        enrollment_id = %enrollment.id,
        %client_id,
        %program_id,
        "Client enrolled in program"
    );

    Ok(EnrollmentCreated {
        enrollment,
        program,
    })
}

fn already_enrolled() -> AppError {
    AppError::Core(CoreError::Conflict(ALREADY_ENROLLED.into()))
}
