//! Program entity model.

use clinic_core::program::ProgramStatus;
use clinic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ProgramStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A program with the number of enrollments referencing it.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramWithCount {
    #[serde(flatten)]
    pub program: Program,
    pub enrollment_count: i64,
}
