//! Record store adapter boundary
//!
//! The core never performs I/O. A store hands out whole snapshots with
//! [`RecordStore::read`] and accepts whole snapshots with
//! [`RecordStore::write`]; the provided mutations are expressed in terms of
//! those two calls.
//!
//! # Example
//!
//! ```
//! use family_tree::{MemoryStore, PersonRecord, RecordStore};
//!
//! let mut store = MemoryStore::new();
//! store.create(PersonRecord::new("1", "John")).unwrap();
//! store.create(PersonRecord::new("2", "Jane").with_father("1")).unwrap();
//!
//! store.delete("1").unwrap();
//! let snapshot = store.read();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].father_id, None);
//! ```

use crate::error::{FamilyTreeError, Result};
use crate::record::PersonRecord;
use crate::validate::validate_record;

/// A source and sink of person record snapshots.
pub trait RecordStore {
    /// Current snapshot, as an owned copy.
    fn read(&self) -> Vec<PersonRecord>;

    /// Replace the stored snapshot.
    fn write(&mut self, records: Vec<PersonRecord>) -> Result<()>;

    /// Add a new record.
    ///
    /// # Errors
    ///
    /// - `InvalidRecord` if the record fails validation
    /// - `DuplicateRecord` if the id is already taken
    fn create(&mut self, record: PersonRecord) -> Result<()> {
        check(&record)?;
        let mut records = self.read();
        if records.iter().any(|r| r.id == record.id) {
            return Err(FamilyTreeError::DuplicateRecord { id: record.id });
        }
        records.push(record);
        self.write(records)
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// - `InvalidRecord` if the record fails validation
    /// - `UnknownRecord` if no record has this id
    fn update(&mut self, record: PersonRecord) -> Result<()> {
        check(&record)?;
        let mut records = self.read();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => return Err(FamilyTreeError::UnknownRecord { id: record.id }),
        }
        self.write(records)
    }

    /// Remove a record and clear every reference to it.
    ///
    /// # Errors
    ///
    /// - `UnknownRecord` if no record has this id
    fn delete(&mut self, id: &str) -> Result<()> {
        let mut records = self.read();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(FamilyTreeError::UnknownRecord { id: id.to_string() });
        }
        for record in &mut records {
            for reference in [
                &mut record.father_id,
                &mut record.mother_id,
                &mut record.spouse_id,
            ] {
                if reference.as_deref() == Some(id) {
                    *reference = None;
                }
            }
        }
        self.write(records)
    }
}

fn check(record: &PersonRecord) -> Result<()> {
    let errors = validate_record(record);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FamilyTreeError::InvalidRecord {
            id: record.id.clone(),
            errors,
        })
    }
}

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<PersonRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` as-is, without validation.
    pub fn with_records(records: Vec<PersonRecord>) -> Self {
        Self { records }
    }

    /// Borrow the stored records.
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn read(&self) -> Vec<PersonRecord> {
        self.records.clone()
    }

    fn write(&mut self, records: Vec<PersonRecord>) -> Result<()> {
        self.records = records;
        Ok(())
    }
}
