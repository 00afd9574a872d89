use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::field::FieldKind;

/// Validation errors for form field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("not a whole number: {0}")]
    InvalidNumber(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Date format accepted by date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` if `email` looks like `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Parses a non-negative whole number.
pub fn parse_number(value: &str) -> Result<u32, ValidationError> {
    value
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(value.to_string()))
}

/// Validates a raw field value against its kind and required flag.
///
/// The value is trimmed first. An empty value fails only when `required`;
/// otherwise absence is acceptable and the kind-specific check is skipped.
pub fn validate_value(kind: &FieldKind, required: bool, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return if required {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if is_valid_email(value) => Ok(()),
        FieldKind::Email => Err(ValidationError::InvalidEmail(value.to_string())),
        FieldKind::Date => parse_date(value).map(|_| ()),
        FieldKind::Number => parse_number(value).map(|_| ()),
        FieldKind::Select(options) if options.iter().any(|o| o == value) => Ok(()),
        FieldKind::Select(_) => Err(ValidationError::UnknownOption(value.to_string())),
    }
}
