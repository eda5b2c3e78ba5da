//! Health program rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{non_blank, Violations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramStatus {
    #[default]
    Active,
    Inactive,
}

impl ProgramStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CoreError::Validation(format!(
                "Invalid program status '{s}'. Must be 'active' or 'inactive'"
            ))),
        }
    }
}

impl TryFrom<String> for ProgramStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Program form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgramDraft {
    pub name: String,
    pub description: String,
    /// Defaults to `active` when omitted or blank.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgram {
    pub name: String,
    pub description: String,
    pub status: ProgramStatus,
}

pub fn validate_program(draft: &ProgramDraft) -> Result<NewProgram, CoreError> {
    let mut violations = Violations::new();
    violations.require("name", "Program name", &draft.name);
    violations.require("description", "Description", &draft.description);

    let status = match non_blank(draft.status.as_deref()) {
        None => ProgramStatus::default(),
        Some(raw) => ProgramStatus::parse(raw).unwrap_or_else(|_| {
            violations.push("status", "Status must be 'active' or 'inactive'");
            ProgramStatus::default()
        }),
    };

    violations.into_result()?;

    Ok(NewProgram {
        name: draft.name.clone(),
        description: draft.description.clone(),
        status,
    })
}
