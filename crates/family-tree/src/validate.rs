//! Field-level validation of a single record
//!
//! Used by the record store before accepting a mutation. The graph builder
//! never rejects records on these grounds.

use serde::Serialize;
use thiserror::Error;

use crate::record::{non_blank, resolvable_date, PersonRecord};

/// Minimum length of names and places.
pub const MIN_TEXT_LEN: usize = 2;

/// Maximum length of a biography.
pub const MAX_BIO_LEN: usize = 500;

/// A broken field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum FieldError {
    /// Text shorter than [`MIN_TEXT_LEN`]
    #[error("{field} must be at least {} characters", MIN_TEXT_LEN)]
    TooShort {
        /// Field name
        field: &'static str,
    },

    /// Text longer than allowed
    #[error("{field} must not exceed {max} characters")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Limit
        max: usize,
    },

    /// Not a `YYYY-MM-DD` calendar date
    #[error("{field} `{value}` is not a YYYY-MM-DD date")]
    BadDate {
        /// Field name
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Death recorded before birth
    #[error("deathDate {death} is before birthDate {birth}")]
    DeathBeforeBirth {
        /// Birth date
        birth: String,
        /// Death date
        death: String,
    },
}

/// Check a record against the field rules, returning every violation.
pub fn validate_record(record: &PersonRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if record.first_name.trim().chars().count() < MIN_TEXT_LEN {
        errors.push(FieldError::TooShort { field: "firstName" });
    }

    for (field, value) in [
        ("birthDate", &record.birth_date),
        ("deathDate", &record.death_date),
    ] {
        if let Some(value) = non_blank(value.as_deref()) {
            if resolvable_date(Some(value)).is_none() {
                errors.push(FieldError::BadDate {
                    field,
                    value: value.to_string(),
                });
            }
        }
    }

    for (field, value) in [
        ("birthPlace", &record.birth_place),
        ("deathPlace", &record.death_place),
    ] {
        if let Some(value) = non_blank(value.as_deref()) {
            if value.trim().chars().count() < MIN_TEXT_LEN {
                errors.push(FieldError::TooShort { field });
            }
        }
    }

    if let Some(bio) = &record.bio {
        if bio.chars().count() > MAX_BIO_LEN {
            errors.push(FieldError::TooLong {
                field: "bio",
                max: MAX_BIO_LEN,
            });
        }
    }

    if let (Some(birth), Some(death)) = (
        record.resolvable_birth_date(),
        record.resolvable_death_date(),
    ) {
        if death < birth {
            errors.push(FieldError::DeathBeforeBirth {
                birth: birth.to_string(),
                death: death.to_string(),
            });
        }
    }

    errors
}
