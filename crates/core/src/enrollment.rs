//! Enrollment request rules.
//!
//! Existence of the referenced client and program, and uniqueness of the
//! pairing, need the database and are enforced by the enrollment workflow in
//! the API crate. This module only handles the request shape.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{parse_id, DbId};
use crate::validation::non_blank;

/// Message returned when a (client, program) pairing already exists.
pub const ALREADY_ENROLLED: &str = "Client is already enrolled in this program";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Dropped,
}

impl EnrollmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Dropped => "dropped",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "dropped" => Ok(Self::Dropped),
            _ => Err(CoreError::Validation(format!(
                "Invalid enrollment status '{s}'. Must be one of: active, completed, dropped"
            ))),
        }
    }
}

impl TryFrom<String> for EnrollmentStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Enrollment request body as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentDraft {
    pub client_id: Option<String>,
    pub program_id: Option<String>,
    pub notes: Option<String>,
}

/// A well-formed enrollment request.
///
/// An id that was present but is not a UUID is kept as `None`: it cannot name
/// an existing row and is reported as not found when its turn comes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRequest {
    pub client_id: Option<DbId>,
    pub program_id: Option<DbId>,
    pub notes: String,
}

pub fn validate_enrollment(draft: &EnrollmentDraft) -> Result<EnrollmentRequest, CoreError> {
    let (Some(client_id), Some(program_id)) = (
        non_blank(draft.client_id.as_deref()),
        non_blank(draft.program_id.as_deref()),
    ) else {
        return Err(CoreError::Validation(
            "Client ID and Program ID are required".into(),
        ));
    };

    Ok(EnrollmentRequest {
        client_id: parse_id(client_id),
        program_id: parse_id(program_id),
        notes: draft.notes.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_ids_are_a_validation_error() {
        for draft in [
            EnrollmentDraft::default(),
            EnrollmentDraft {
                client_id: Some(DbId::new_v4().to_string()),
                ..Default::default()
            },
            EnrollmentDraft {
                client_id: Some("  ".into()),
                program_id: Some(DbId::new_v4().to_string()),
                notes: None,
            },
        ] {
            assert_matches!(validate_enrollment(&draft), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn notes_default_to_empty() {
        let client_id = DbId::new_v4();
        let program_id = DbId::new_v4();
        let req = validate_enrollment(&EnrollmentDraft {
            client_id: Some(client_id.to_string()),
            program_id: Some(program_id.to_string()),
            notes: None,
        })
        .unwrap();
        assert_eq!(req.client_id, Some(client_id));
        assert_eq!(req.program_id, Some(program_id));
        assert_eq!(req.notes, "");
    }

    #[test]
    fn malformed_id_is_kept_as_unresolvable() {
        let req = validate_enrollment(&EnrollmentDraft {
            client_id: Some("abc".into()),
            program_id: Some(DbId::new_v4().to_string()),
            notes: Some("walk-in".into()),
        })
        .unwrap();
        assert_eq!(req.client_id, None);
        assert!(req.program_id.is_some());
        assert_eq!(req.notes, "walk-in");
    }

    #[test]
    fn status_round_trips_through_text() {
        for s in ["active", "completed", "dropped"] {
            assert_eq!(EnrollmentStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(EnrollmentStatus::parse("paused").is_err());
    }
}
