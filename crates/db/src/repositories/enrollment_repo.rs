//! Repository for the `client_programs` (enrollment) table.

use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::{
    CreateEnrollment, EnrolledProgram, Enrollment, EnrollmentFilter, EnrollmentListItem,
};

const COLUMNS: &str =
    "id, client_id, program_id, enrollment_date, status, notes, created_at, updated_at";

/// Name of the constraint guaranteeing one enrollment per (client, program).
pub const UNIQUE_PAIR_CONSTRAINT: &str = "uq_client_programs_client_program";

/// Select list projecting an enrollment joined to its program (`cp` / `p`).
const ENROLLED_PROGRAM_COLUMNS: &str = "p.id, p.name, p.description, p.status, \
     cp.enrollment_date, cp.status AS enrollment_status, COALESCE(cp.notes, '') AS notes";

/// Provides query operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert an `active` enrollment dated now.
    ///
    /// Returns `None` when the (client, program) pairing already exists. The
    /// unique constraint decides, so concurrent duplicates cannot both land.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_programs (client_id, program_id, enrollment_date, status, notes)
             VALUES ($1, $2, NOW(), 'active', $3)
             ON CONFLICT ON CONSTRAINT {UNIQUE_PAIR_CONSTRAINT} DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.client_id)
            .bind(input.program_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Whether `client_id` is already enrolled in `program_id`.
    pub async fn exists_for_pair(
        pool: &PgPool,
        client_id: DbId,
        program_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM client_programs WHERE client_id = $1 AND program_id = $2
             )",
        )
        .bind(client_id)
        .bind(program_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Ids of every client enrolled in `program_id`.
    pub async fn client_ids_for_program(
        pool: &PgPool,
        program_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT client_id FROM client_programs WHERE program_id = $1")
            .bind(program_id)
            .fetch_all(pool)
            .await
    }

    /// Programs a client is enrolled in, most recent enrollment first.
    pub async fn list_programs_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<EnrolledProgram>, sqlx::Error> {
        let query = format!(
            "SELECT {ENROLLED_PROGRAM_COLUMNS}
             FROM client_programs cp
             JOIN programs p ON p.id = cp.program_id
             WHERE cp.client_id = $1
             ORDER BY cp.enrollment_date DESC"
        );
        sqlx::query_as::<_, EnrolledProgram>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// List enrollments joined to their programs, optionally filtered.
    pub async fn list(
        pool: &PgPool,
        filter: &EnrollmentFilter,
    ) -> Result<Vec<EnrollmentListItem>, sqlx::Error> {
        let query = format!(
            "SELECT cp.id AS enrollment_id, cp.client_id, {ENROLLED_PROGRAM_COLUMNS}
             FROM client_programs cp
             JOIN programs p ON p.id = cp.program_id
             WHERE ($1::uuid IS NULL OR cp.client_id = $1)
               AND ($2::uuid IS NULL OR cp.program_id = $2)
             ORDER BY cp.enrollment_date DESC"
        );
        sqlx::query_as::<_, EnrollmentListItem>(&query)
            .bind(filter.client_id)
            .bind(filter.program_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_for_program(pool: &PgPool, program_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM client_programs WHERE program_id = $1")
                .bind(program_id)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }
}
