//! Repository for the `programs` table.

use clinic_core::program::{NewProgram, ProgramStatus};
use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::Program;

const COLUMNS: &str = "id, name, description, status, created_at, updated_at";

/// Provides query operations for programs.
pub struct ProgramRepo;

impl ProgramRepo {
    pub async fn create(pool: &PgPool, input: &NewProgram) -> Result<Program, sqlx::Error> {
        let query = format!(
            "INSERT INTO programs (name, description, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM programs WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// List all programs ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs ORDER BY name, created_at");
        sqlx::query_as::<_, Program>(&query).fetch_all(pool).await
    }

    /// Count programs in the given status.
    pub async fn count_with_status(
        pool: &PgPool,
        status: ProgramStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM programs WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
