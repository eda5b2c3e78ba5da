//! Client registration rules and list-query parsing.
//!
//! A [`ClientDraft`] is the raw registration form as submitted; [`validate_client`]
//! turns it into a typed [`NewClient`] or reports every failing field at once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::{parse_id, DbId};
use crate::validation::{non_blank, Violations};

/// Date format accepted for `date_of_birth`.
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

const VALID_GENDERS: &[&str] = &["male", "female", "other"];

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parse case-insensitively; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Invalid gender '{s}'. Must be one of: {}",
                VALID_GENDERS.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration payload exactly as submitted. Missing fields deserialize to
/// empty strings so they are reported as "required" rather than as a JSON
/// shape error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: String,
    pub medical_history: Option<String>,
}

/// A registration that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: String,
    pub medical_history: Option<String>,
}

/// Validate a registration against `today` (UTC).
///
/// Rules: the six required fields are non-blank, `email` (when given) is a
/// syntactically valid address, `date_of_birth` is a real `YYYY-MM-DD`
/// calendar date not after `today`, and `gender` is male/female/other in any
/// letter case. Submitted values are kept as-is apart from `gender`, which is
/// normalized to lowercase, `email`, which is trimmed, and blank optional
/// fields, which become `None`.
pub fn validate_client(draft: &ClientDraft, today: NaiveDate) -> Result<NewClient, CoreError> {
    let mut violations = Violations::new();

    violations.require("first_name", "First name", &draft.first_name);
    violations.require("last_name", "Last name", &draft.last_name);
    violations.require("contact_number", "Contact number", &draft.contact_number);
    violations.require("address", "Address", &draft.address);

    let mut date_of_birth = None;
    if violations.require("date_of_birth", "Date of birth", &draft.date_of_birth) {
        match NaiveDate::parse_from_str(draft.date_of_birth.trim(), DATE_OF_BIRTH_FORMAT) {
            Ok(date) if date > today => {
                violations.push("date_of_birth", "Date of birth cannot be in the future");
            }
            Ok(date) => date_of_birth = Some(date),
            Err(_) => violations.push(
                "date_of_birth",
                "Date of birth must be a valid date in YYYY-MM-DD format",
            ),
        }
    }

    let mut gender = None;
    if violations.require("gender", "Gender", &draft.gender) {
        match Gender::parse(&draft.gender) {
            Ok(g) => gender = Some(g),
            Err(_) => violations.push("gender", "Gender must be one of: male, female, other"),
        }
    }

    let email = non_blank(draft.email.as_deref()).map(str::trim);
    if let Some(email) = email {
        if !email.validate_email() {
            violations.push("email", "Invalid email address");
        }
    }

    violations.into_result()?;

    match (date_of_birth, gender) {
        (Some(date_of_birth), Some(gender)) => Ok(NewClient {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            date_of_birth,
            gender,
            contact_number: draft.contact_number.clone(),
            email: email.map(str::to_string),
            address: draft.address.clone(),
            medical_history: non_blank(draft.medical_history.as_deref()).map(str::to_string),
        }),
        _ => Err(CoreError::Internal(
            "client validation passed without a parsed date or gender".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Columns a client listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientSortKey {
    #[default]
    CreatedAt,
    FirstName,
    LastName,
    Email,
    DateOfBirth,
}

const VALID_SORT_KEYS: &[&str] = &[
    "created_at",
    "first_name",
    "last_name",
    "email",
    "date_of_birth",
];

impl ClientSortKey {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "date_of_birth" => Ok(Self::DateOfBirth),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort key '{s}'. Must be one of: {}",
                VALID_SORT_KEYS.join(", ")
            ))),
        }
    }

    /// The `clients` column this key orders by. Always one of a fixed set, so
    /// it is safe to splice into SQL.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort order '{s}'. Must be 'asc' or 'desc'"
            ))),
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A parsed, request-scoped client listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientListQuery {
    /// Case-insensitive substring matched against name, email, and phone.
    pub search: Option<String>,
    /// Restrict to clients enrolled in this program.
    pub program_id: Option<DbId>,
    pub sort: ClientSortKey,
    pub order: SortOrder,
}

impl ClientListQuery {
    /// Build a listing query from raw query-string values.
    ///
    /// Returns `Ok(None)` when the program filter names something that is not
    /// a valid id: no enrollment can reference it, so the result is empty.
    pub fn parse(
        search: Option<&str>,
        program_id: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> Result<Option<Self>, CoreError> {
        let sort = non_blank(sort)
            .map(ClientSortKey::parse)
            .transpose()?
            .unwrap_or_default();
        let order = non_blank(order)
            .map(SortOrder::parse)
            .transpose()?
            .unwrap_or_default();

        let program_id = match non_blank(program_id) {
            None => None,
            Some(raw) => match parse_id(raw) {
                Some(id) => Some(id),
                None => return Ok(None),
            },
        };

        Ok(Some(Self {
            search: non_blank(search).map(|s| s.trim().to_string()),
            program_id,
            sort,
            order,
        }))
    }
}

/// Turn a free-text search term into an `ILIKE` substring pattern.
///
/// `%`, `_` and `\` in the term are escaped so they match literally.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
