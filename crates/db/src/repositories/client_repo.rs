//! Repository for the `clients` table.

use clinic_core::client::{like_pattern, ClientListQuery, NewClient};
use clinic_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::Client;
use crate::repositories::EnrollmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, gender, contact_number, \
                       email, address, medical_history, created_at, updated_at";

/// Provides query operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a validated registration, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients
                (first_name, last_name, date_of_birth, gender, contact_number,
                 email, address, medical_history)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(input.gender.as_str())
            .bind(&input.contact_number)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.medical_history)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List clients matching `params`.
    ///
    /// A program filter is resolved first into the set of enrolled client
    /// ids; when that set is empty the clients table is not queried at all.
    pub async fn list(pool: &PgPool, params: &ClientListQuery) -> Result<Vec<Client>, sqlx::Error> {
        let enrolled_ids = match params.program_id {
            Some(program_id) => {
                let ids = EnrollmentRepo::client_ids_for_program(pool, program_id).await?;
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                Some(ids)
            }
            None => None,
        };

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.search.is_some() {
            conditions.push(format!(
                "(first_name ILIKE ${bind_idx} OR last_name ILIKE ${bind_idx} \
                  OR email ILIKE ${bind_idx} OR contact_number ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if enrolled_ids.is_some() {
            conditions.push(format!("id = ANY(${bind_idx})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM clients {where_clause} \
             ORDER BY {column} {direction} NULLS LAST, created_at DESC, id",
            column = params.sort.column(),
            direction = params.order.sql(),
        );

        let mut q = sqlx::query_as::<_, Client>(&query);

        // Bind dynamic parameters in order.
        if let Some(ref search) = params.search {
            q = q.bind(like_pattern(search));
        }
        if let Some(ids) = enrolled_ids {
            q = q.bind(ids);
        }

        q.fetch_all(pool).await
    }
}
