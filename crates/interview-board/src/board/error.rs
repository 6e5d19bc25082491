use super::entry::{ScheduleKey, ValidationError};

/// Recoverable rejection raised by the schedule board. The board is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("an interview is already scheduled for {key}")]
    DuplicateEntry { key: ScheduleKey },
    #[error("no interview is scheduled for {key}")]
    EntryNotFound { key: ScheduleKey },
    #[error("interview {key} clashes with {} existing interview(s)", .clashes.len())]
    Conflict {
        key: ScheduleKey,
        clashes: Vec<ScheduleKey>,
    },
    #[error("index {index} is out of range for {len} interview(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Persisted entries that break uniqueness or temporal consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityViolation {
    #[error("interview {key} is recorded more than once")]
    Duplicate { key: ScheduleKey },
    #[error("interviews {first} and {second} overlap")]
    Overlap {
        first: ScheduleKey,
        second: ScheduleKey,
    },
}
