use serde::{Deserialize, Serialize};

use crate::board::{
    format_time, parse_date, parse_time, CandidateIdentity, InterviewMode, ScheduleEntry,
    ValidationError,
};
use crate::registry::Person;

/// On-disk shape of one interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub mode: String,
    pub candidate_name: String,
    pub candidate_email: String,
}

impl ScheduleRecord {
    pub fn from_entry(entry: &ScheduleEntry) -> Self {
        Self {
            date: entry.date().format("%Y-%m-%d").to_string(),
            start_time: format_time(entry.start_time()),
            end_time: format_time(entry.end_time()),
            mode: entry.mode().label().to_string(),
            candidate_name: entry.candidate().name.clone(),
            candidate_email: entry.candidate().email.clone(),
        }
    }

    pub fn to_entry(&self) -> Result<ScheduleEntry, ValidationError> {
        ScheduleEntry::new(
            parse_date(&self.date)?,
            parse_time(&self.start_time)?,
            parse_time(&self.end_time)?,
            InterviewMode::parse(&self.mode)?,
            CandidateIdentity::new(self.candidate_name.trim(), self.candidate_email.trim()),
        )
    }
}

/// Whole data file: people first, then their interviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
}
