//! Client entity model.

use chrono::NaiveDate;
use clinic_core::client::Gender;
use clinic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::enrollment::EnrolledProgram;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[sqlx(try_from = "String")]
    pub gender: Gender,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: String,
    pub medical_history: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A client profile together with every program they are enrolled in.
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithPrograms {
    #[serde(flatten)]
    pub client: Client,
    pub programs: Vec<EnrolledProgram>,
}
