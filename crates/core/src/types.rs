/// All primary keys are database-generated UUIDs.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a caller-supplied id. Anything that is not a UUID cannot name a row.
pub fn parse_id(raw: &str) -> Option<DbId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
