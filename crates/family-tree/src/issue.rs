//! Structural issues found while building the family graph
//!
//! Issues are recoverable: the builder reports them and carries on with a
//! best-effort forest.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The reference field an issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceField {
    /// `fatherId`
    FatherId,
    /// `motherId`
    MotherId,
    /// `spouseId`
    SpouseId,
}

impl fmt::Display for ReferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceField::FatherId => "fatherId",
            ReferenceField::MotherId => "motherId",
            ReferenceField::SpouseId => "spouseId",
        };
        f.write_str(name)
    }
}

/// Discriminant of a [`StructuralIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// Two records share an id
    DuplicateId,
    /// A reference names an id that is not in the snapshot
    DanglingReference,
    /// Following a reference would make a node its own ancestor
    CycleDetected,
    /// A spouse link that the partner does not return
    AsymmetricSpouse,
}

/// A recoverable inconsistency in the input records.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StructuralIssue {
    /// A record reused an id seen earlier in the snapshot.
    #[error("duplicate id `{id}` at position {position} (first seen at {first_position})")]
    DuplicateId {
        /// The repeated id
        id: String,
        /// Input position of the repeated record
        position: usize,
        /// Input position of the first record with this id
        first_position: usize,
    },

    /// A reference that does not resolve; treated as unset.
    #[error("`{id}`.{field} refers to missing record `{target}`")]
    DanglingReference {
        /// Record holding the reference
        id: String,
        /// Which reference
        field: ReferenceField,
        /// The id that was not found
        target: String,
    },

    /// An edge refused because it would close a cycle; `id` became a root.
    #[error("`{id}`.{field} -> `{target}` would create a cycle")]
    CycleDetected {
        /// Record whose placement was refused
        id: String,
        /// Which reference
        field: ReferenceField,
        /// The would-be parent (or spouse)
        target: String,
    },

    /// `id` names `spouse` as partner, but `spouse` names someone else or nobody.
    #[error("`{id}` names `{spouse}` as spouse but `{spouse}` does not reciprocate")]
    AsymmetricSpouse {
        /// Record holding the spouse link
        id: String,
        /// The named partner
        spouse: String,
        /// Who the partner names instead, if anyone
        partner_of_spouse: Option<String>,
    },
}

impl StructuralIssue {
    /// The issue's kind.
    pub fn kind(&self) -> IssueKind {
        match self {
            StructuralIssue::DuplicateId { .. } => IssueKind::DuplicateId,
            StructuralIssue::DanglingReference { .. } => IssueKind::DanglingReference,
            StructuralIssue::CycleDetected { .. } => IssueKind::CycleDetected,
            StructuralIssue::AsymmetricSpouse { .. } => IssueKind::AsymmetricSpouse,
        }
    }

    /// The id of the record the issue was found on.
    pub fn record_id(&self) -> &str {
        match self {
            StructuralIssue::DuplicateId { id, .. }
            | StructuralIssue::DanglingReference { id, .. }
            | StructuralIssue::CycleDetected { id, .. }
            | StructuralIssue::AsymmetricSpouse { id, .. } => id,
        }
    }

    /// The reference field involved, if the issue is about one.
    pub fn field(&self) -> Option<ReferenceField> {
        match self {
            StructuralIssue::DanglingReference { field, .. }
            | StructuralIssue::CycleDetected { field, .. } => Some(*field),
            StructuralIssue::AsymmetricSpouse { .. } => Some(ReferenceField::SpouseId),
            StructuralIssue::DuplicateId { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = StructuralIssue::DanglingReference {
            id: "2".into(),
            field: ReferenceField::FatherId,
            target: "9".into(),
        };
        assert_eq!(issue.to_string(), "`2`.fatherId refers to missing record `9`");
        assert_eq!(issue.kind(), IssueKind::DanglingReference);
        assert_eq!(issue.field(), Some(ReferenceField::FatherId));
        assert_eq!(issue.record_id(), "2");
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = StructuralIssue::CycleDetected {
            id: "5".into(),
            field: ReferenceField::FatherId,
            target: "5".into(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "cycleDetected");
        assert_eq!(json["field"], "fatherId");
    }
}
