//! JSON data file holding the person registry and the schedule board.

mod record;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::board::{
    verify_consistency, ClashPolicy, IntegrityViolation, ScheduleBoard, ScheduleCollection,
    ScheduleEntry, ScheduleError, ValidationError,
};
use crate::registry::{PersonRegistry, RegistryError};

pub use record::{BoardDocument, ScheduleRecord};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid data file JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("schedule record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] IntegrityViolation),
    #[error("invalid person record: {0}")]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Decode persisted records, rejecting anything that breaks slot uniqueness or
/// temporal consistency instead of repairing it.
pub fn entries_from_records(records: &[ScheduleRecord]) -> Result<Vec<ScheduleEntry>, StorageError> {
    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_entry()
                .map_err(|source| StorageError::InvalidRecord { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    verify_consistency(&entries)?;
    Ok(entries)
}

pub fn document_from_state(registry: &PersonRegistry, schedules: &ScheduleCollection) -> BoardDocument {
    BoardDocument {
        persons: registry.persons().to_vec(),
        schedules: schedules.iter().map(ScheduleRecord::from_entry).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct JsonBoardStorage {
    path: PathBuf,
}

impl JsonBoardStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry and board. A missing file yields an empty state.
    pub fn load(&self, policy: ClashPolicy) -> Result<(PersonRegistry, ScheduleBoard), StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok((PersonRegistry::new(), ScheduleBoard::new(policy)));
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let document: BoardDocument = serde_json::from_str(&raw)?;
        let registry = PersonRegistry::with_persons(document.persons)?;
        let entries = entries_from_records(&document.schedules)?;
        let board = ScheduleBoard::with_entries(policy, entries)?;

        info!(
            path = %self.path.display(),
            persons = registry.len(),
            interviews = board.len(),
            "data file loaded"
        );
        Ok((registry, board))
    }

    pub fn save(&self, registry: &PersonRegistry, board: &ScheduleBoard) -> Result<(), StorageError> {
        let document = document_from_state(registry, board.collection());
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "data file saved");
        Ok(())
    }
}
