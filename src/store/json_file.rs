use crate::store::{SeenStore, StoreError};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Seen-set persisted as a JSON array of listing ids.
///
/// Ids are written sorted and the file is replaced via a temp-file rename:
/// an interrupted run never leaves a half-written state file, and a run
/// that adds nothing leaves the bytes untouched.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeenStore for JsonFileStore {
    fn load(&self) -> Result<HashSet<String>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => {
                eprintln!(
                    "⚠️ Could not read {}: {e}. Starting fresh.",
                    self.path.display()
                );
                return Ok(HashSet::new());
            }
        };

        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                eprintln!(
                    "⚠️ Corrupt seen-listings file {}: {e}. Starting fresh.",
                    self.path.display()
                );
                Ok(HashSet::new())
            }
        }
    }

    fn save(&self, seen: &HashSet<String>) -> Result<(), StoreError> {
        let mut ids: Vec<&String> = seen.iter().collect();
        ids.sort();

        let json = serde_json::to_string_pretty(&ids)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))
    }
}
