//! Enrollment (`client_programs`) model and joined projections.

use clinic_core::enrollment::EnrollmentStatus;
use clinic_core::program::ProgramStatus;
use clinic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::program::Program;

/// A row from the `client_programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub client_id: DbId,
    pub program_id: DbId,
    pub enrollment_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: EnrollmentStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for an enrollment. Status is always `active` on creation.
#[derive(Debug, Clone)]
pub struct CreateEnrollment {
    pub client_id: DbId,
    pub program_id: DbId,
    pub notes: String,
}

/// An enrollment joined to its program, flattened so the program fields sit
/// at the top level and the enrollment's own fields are prefixed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrolledProgram {
    /// The program's id.
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ProgramStatus,
    pub enrollment_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub enrollment_status: EnrollmentStatus,
    pub notes: String,
}

/// One entry of `GET /api/enrollment`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentListItem {
    pub enrollment_id: DbId,
    pub client_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub program: EnrolledProgram,
}

/// Optional filters for listing enrollments.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentFilter {
    pub client_id: Option<DbId>,
    pub program_id: Option<DbId>,
}

/// Result of a successful enrollment: the new row and the program it joins.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentCreated {
    pub enrollment: Enrollment,
    pub program: Program,
}
