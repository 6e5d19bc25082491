use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::board::{
    parse_date, parse_time, CandidateIdentity, InterviewMode, ScheduleEntry, ValidationError,
};

#[derive(Debug, Deserialize)]
pub(crate) struct CsvScheduleRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Mode", default, deserialize_with = "empty_string_as_none")]
    mode: Option<String>,
    #[serde(rename = "Candidate Name")]
    candidate_name: String,
    #[serde(rename = "Candidate Email")]
    candidate_email: String,
}

impl CsvScheduleRow {
    /// Rows without a mode default to online.
    pub(crate) fn to_entry(&self) -> Result<ScheduleEntry, ValidationError> {
        let mode = match self.mode.as_deref() {
            Some(raw) => InterviewMode::parse(raw)?,
            None => InterviewMode::Online,
        };
        ScheduleEntry::new(
            parse_date(&self.date)?,
            parse_time(&self.start)?,
            parse_time(&self.end)?,
            mode,
            CandidateIdentity::new(self.candidate_name.as_str(), self.candidate_email.as_str()),
        )
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CsvScheduleRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvScheduleRow>()
        .collect::<Result<Vec<_>, _>>()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
