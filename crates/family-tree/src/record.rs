//! Person records as supplied by the record store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Calendar date format used by every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Recorded gender of a person.
///
/// Legacy records may carry values outside the known set; those
/// deserialize as [`Gender::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Unset or unrecognised
    #[serde(other)]
    Unknown,
}

/// A single person as stored, immutable for the duration of one build.
///
/// Field names serialize in camelCase (`firstName`, `fatherId`, ...).
/// Every reference field is optional and may name an id that does not
/// exist in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Unique, stable identifier
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Recorded gender, `None` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Birth date as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Death date as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    /// Whether the person is known to have died, even without a date
    #[serde(default)]
    pub is_deceased: bool,

    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,

    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,

    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Id of the father's record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,

    /// Id of the mother's record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,

    /// Id of the spouse's record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_id: Option<String>,

    /// Opaque media reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PersonRecord {
    /// Create a record with only an id and a first name.
    pub fn new(id: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            ..Default::default()
        }
    }

    /// Set the last name (builder pattern)
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the gender (builder pattern)
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the father reference (builder pattern)
    pub fn with_father(mut self, id: impl Into<String>) -> Self {
        self.father_id = Some(id.into());
        self
    }

    /// Set the mother reference (builder pattern)
    pub fn with_mother(mut self, id: impl Into<String>) -> Self {
        self.mother_id = Some(id.into());
        self
    }

    /// Set the spouse reference (builder pattern)
    pub fn with_spouse(mut self, id: impl Into<String>) -> Self {
        self.spouse_id = Some(id.into());
        self
    }

    /// Set the birth date (builder pattern)
    pub fn born(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    /// Set the death date and mark the record deceased (builder pattern)
    pub fn died(mut self, date: impl Into<String>) -> Self {
        self.death_date = Some(date.into());
        self.is_deceased = true;
        self
    }

    /// First and last name joined by a space.
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name.trim(), last),
            _ => self.first_name.trim().to_string(),
        }
    }

    /// The father reference, ignoring blank strings.
    pub fn father(&self) -> Option<&str> {
        non_blank(self.father_id.as_deref())
    }

    /// The mother reference, ignoring blank strings.
    pub fn mother(&self) -> Option<&str> {
        non_blank(self.mother_id.as_deref())
    }

    /// The spouse reference, ignoring blank strings.
    pub fn spouse(&self) -> Option<&str> {
        non_blank(self.spouse_id.as_deref())
    }

    /// The birth date if it is present and a valid calendar date.
    pub fn resolvable_birth_date(&self) -> Option<&str> {
        resolvable_date(self.birth_date.as_deref())
    }

    /// The death date if it is present and a valid calendar date.
    pub fn resolvable_death_date(&self) -> Option<&str> {
        resolvable_date(self.death_date.as_deref())
    }
}

/// Returns `None` for absent or whitespace-only values.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the date when it parses as `YYYY-MM-DD`.
pub fn resolvable_date(value: Option<&str>) -> Option<&str> {
    let value = non_blank(value)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .map(|_| value)
}

/// Parse a JSON snapshot into records.
///
/// The document must be an array of person objects; anything else is
/// [`FamilyTreeError::MalformedInput`](crate::FamilyTreeError::MalformedInput).
pub fn records_from_json(json: &str) -> Result<Vec<PersonRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FamilyTreeError;

    #[test]
    fn test_display_name_with_and_without_last_name() {
        let rec = PersonRecord::new("1", "John").with_last_name("Doe");
        assert_eq!(rec.display_name(), "John Doe");

        let rec = PersonRecord::new("1", "John").with_last_name("  ");
        assert_eq!(rec.display_name(), "John");
    }

    #[test]
    fn test_blank_references_are_absent() {
        let mut rec = PersonRecord::new("1", "John");
        rec.father_id = Some(String::new());
        rec.mother_id = Some("  ".to_string());
        assert_eq!(rec.father(), None);
        assert_eq!(rec.mother(), None);
    }

    #[test]
    fn test_resolvable_date() {
        assert_eq!(resolvable_date(Some("1980-01-01")), Some("1980-01-01"));
        assert_eq!(resolvable_date(Some("1980-02-30")), None);
        assert_eq!(resolvable_date(Some("")), None);
        assert_eq!(resolvable_date(Some("01/01/1980")), None);
        assert_eq!(resolvable_date(None), None);
    }

    #[test]
    fn test_records_from_json_camel_case() {
        let json = r#"[
            {"id": "1", "firstName": "John", "lastName": "Doe", "gender": "male"},
            {"id": "2", "firstName": "Jane", "fatherId": "1", "motherId": null,
             "gender": "other", "isDeceased": true}
        ]"#;
        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gender, Some(Gender::Male));
        assert_eq!(records[1].gender, Some(Gender::Unknown));
        assert_eq!(records[1].father(), Some("1"));
        assert_eq!(records[1].mother(), None);
        assert!(records[1].is_deceased);
    }

    #[test]
    fn test_records_from_json_rejects_non_sequence() {
        let err = records_from_json(r#"{"id": "1", "firstName": "John"}"#).unwrap_err();
        assert!(matches!(err, FamilyTreeError::MalformedInput(_)));
    }
}
