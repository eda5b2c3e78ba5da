//! Count-only queries backing the statistics endpoint.

use sqlx::PgPool;

/// Provides aggregate counts. No row bodies are fetched.
pub struct StatsRepo;

impl StatsRepo {
    pub async fn count_clients(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    pub async fn count_enrollments(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM client_programs")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
