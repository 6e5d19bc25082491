//! Bulk import of interviews from a CSV export.

mod parser;

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::board::{verify_consistency, IntegrityViolation, ScheduleEntry, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read schedule export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid schedule CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is invalid: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },
    #[error("imported interviews are inconsistent: {0}")]
    DataIntegrity(#[from] IntegrityViolation),
}

/// Reads `Date,Start,End,Mode,Candidate Name,Candidate Email` rows into entries ready
/// for [`crate::board::ScheduleBoard::set_all`].
pub struct ScheduleCsvImporter;

impl ScheduleCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScheduleEntry>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScheduleEntry>, ImportError> {
        let entries = parser::parse_rows(reader)?
            .iter()
            .enumerate()
            .map(|(index, row)| {
                row.to_entry().map_err(|source| ImportError::InvalidRow {
                    row: index + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        verify_consistency(&entries)?;
        info!(count = entries.len(), "schedule export parsed");
        Ok(entries)
    }
}
