//! Record store backed by a JSON file holding an array of records

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use family_tree::{records_from_json, FamilyTreeError, PersonRecord, RecordStore};

/// Reads and writes the whole snapshot as one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<PersonRecord>,
}

impl JsonFileStore {
    /// Load the snapshot at `path`. A missing file is an empty snapshot.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(text) => records_from_json(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("reading {}", path.display())))
            }
        };
        tracing::debug!(path = %path.display(), records = records.len(), "opened snapshot");
        Ok(Self { path, records })
    }

    /// Borrow the loaded records.
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self) -> Vec<PersonRecord> {
        self.records.clone()
    }

    fn write(&mut self, records: Vec<PersonRecord>) -> family_tree::Result<()> {
        let text =
            serde_json::to_string_pretty(&records).map_err(|e| FamilyTreeError::Store(Box::new(e)))?;
        fs::write(&self.path, text).map_err(|e| FamilyTreeError::Store(Box::new(e)))?;
        self.records = records;
        Ok(())
    }
}
