use chrono::{NaiveDate, NaiveTime};

use crate::board::entry::{CandidateIdentity, InterviewMode, ScheduleEntry};

pub(crate) fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
}

pub(crate) fn time((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub(crate) fn identity(name: &str) -> CandidateIdentity {
    let email = format!("{}@x.com", name.to_ascii_lowercase().replace(' ', "."));
    CandidateIdentity::new(name, email)
}

pub(crate) fn entry(
    on: u32,
    start: (u32, u32),
    end: (u32, u32),
    candidate: &str,
) -> ScheduleEntry {
    ScheduleEntry::new(
        day(on),
        time(start),
        time(end),
        InterviewMode::Online,
        identity(candidate),
    )
    .expect("valid schedule entry")
}

/// Entry whose candidate does not matter to the test.
pub(crate) fn slot(on: u32, start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
    entry(on, start, end, "Amy")
}

pub(crate) fn starts(entries: &[ScheduleEntry]) -> Vec<(u32, NaiveTime)> {
    use chrono::Datelike;
    entries
        .iter()
        .map(|entry| (entry.date().day(), entry.start_time()))
        .collect()
}
