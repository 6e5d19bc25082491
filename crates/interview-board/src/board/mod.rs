//! Interview schedule board: slot identity, clash policy, ordered storage, and
//! candidate snapshot synchronization.

pub mod clash;
pub mod collection;
pub mod entry;
pub mod error;
pub mod service;
pub mod sync;

#[cfg(test)]
pub(crate) mod tests;

pub use clash::{
    clashes_with, count_clashes, overlaps, verify_consistency, ClashDetector, ClashPolicy,
};
pub use collection::ScheduleCollection;
pub use entry::{
    format_time, parse_date, parse_time, CandidateIdentity, InterviewMode, ScheduleEntry,
    ScheduleKey, ValidationError,
};
pub use error::{IntegrityViolation, ScheduleError};
pub use service::{ScheduleBoard, ScheduleEdit};
pub use sync::{refresh_candidate, CandidateSync, IdentityChange};
