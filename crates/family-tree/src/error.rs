//! Error types for family tree operations
//!
//! Only conditions the caller must act on live here. Inconsistencies in
//! the record data itself are collected as [`StructuralIssue`]s and never
//! surface through this type.
//!
//! [`StructuralIssue`]: crate::issue::StructuralIssue

use thiserror::Error;

use crate::validate::FieldError;

/// Main error type for family tree operations
#[derive(Error, Debug)]
pub enum FamilyTreeError {
    /// The snapshot is not a sequence of person records
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A record with this id already exists in the store
    #[error("Duplicate record: `{id}` already exists")]
    DuplicateRecord {
        /// The conflicting id
        id: String,
    },

    /// No record with this id exists in the store
    #[error("Unknown record: `{id}`")]
    UnknownRecord {
        /// The missing id
        id: String,
    },

    /// A record store adapter failed to persist a snapshot
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A record failed field validation
    #[error("Invalid record `{id}`: {}", join_errors(.errors))]
    InvalidRecord {
        /// Id of the rejected record
        id: String,
        /// Every rule the record broke
        errors: Vec<FieldError>,
    },
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for family tree operations
pub type Result<T> = std::result::Result<T, FamilyTreeError>;
