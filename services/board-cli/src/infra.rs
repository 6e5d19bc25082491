use chrono::{NaiveDate, NaiveTime};
use interview_board::board::{parse_date, parse_time, InterviewMode, ScheduleEntry};
use interview_board::registry::Person;
use std::num::NonZeroUsize;

pub(crate) fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_time_arg(raw: &str) -> Result<NaiveTime, String> {
    parse_time(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_mode_arg(raw: &str) -> Result<InterviewMode, String> {
    InterviewMode::parse(raw).map_err(|err| err.to_string())
}

/// Lists are shown 1-based.
pub(crate) fn offset(index: NonZeroUsize) -> usize {
    index.get() - 1
}

pub(crate) fn render_entries<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, &'a ScheduleEntry)>,
{
    let lines: Vec<String> = entries
        .into_iter()
        .map(|(index, entry)| format!("{:>3}. {}", index + 1, entry))
        .collect();

    if lines.is_empty() {
        "No interviews scheduled.".to_string()
    } else {
        lines.join("\n")
    }
}

pub(crate) fn render_persons(persons: &[Person]) -> String {
    if persons.is_empty() {
        return "No candidates registered.".to_string();
    }

    persons
        .iter()
        .enumerate()
        .map(|(index, person)| format!("{:>3}. {} <{}>", index + 1, person.name, person.email))
        .collect::<Vec<_>>()
        .join("\n")
}
