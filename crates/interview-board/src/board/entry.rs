use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Whether the interview happens over a call or in person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    Online,
    Offline,
}

impl InterviewMode {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewMode::Online => "online",
            InterviewMode::Offline => "offline",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            _ => Err(ValidationError::UnknownMode(raw.trim().to_string())),
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name and email of the candidate as known to the person registry.
///
/// Schedule entries hold a copy of this value, so a rename in the registry leaves the
/// copy stale until it is refreshed through [`super::CandidateSync`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub name: String,
    pub email: String,
}

impl CandidateIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField("candidate name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::BlankField("candidate email"));
        }
        Ok(())
    }
}

impl fmt::Display for CandidateIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// The fields that decide whether two entries describe the same interview slot.
///
/// Field order matters: the derived ordering sorts by date, then start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleKey {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl fmt::Display for ScheduleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.date.format("%Y-%m-%d"),
            format_time(self.start_time),
            format_time(self.end_time)
        )
    }
}

/// One interview slot on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleEntry {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    mode: InterviewMode,
    candidate: CandidateIdentity,
}

impl ScheduleEntry {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        mode: InterviewMode,
        candidate: CandidateIdentity,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::EndNotAfterStart {
                start: start_time,
                end: end_time,
            });
        }
        candidate.validate()?;

        Ok(Self {
            date,
            start_time,
            end_time,
            mode,
            candidate,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn mode(&self) -> InterviewMode {
        self.mode
    }

    pub fn candidate(&self) -> &CandidateIdentity {
        &self.candidate
    }

    pub fn key(&self) -> ScheduleKey {
        ScheduleKey {
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// True when both entries occupy the same date and interval, regardless of
    /// mode or candidate.
    pub fn is_same_schedule(&self, other: &ScheduleEntry) -> bool {
        self.key() == other.key()
    }

    pub fn with_mode(&self, mode: InterviewMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    pub fn with_candidate(&self, candidate: CandidateIdentity) -> Result<Self, ValidationError> {
        candidate.validate()?;
        Ok(Self {
            candidate,
            ..self.clone()
        })
    }

    pub fn with_slot(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, ValidationError> {
        Self::new(date, start_time, end_time, self.mode, self.candidate.clone())
    }

    pub(crate) fn set_candidate(&mut self, candidate: CandidateIdentity) {
        self.candidate = candidate;
    }
}

impl Ord for ScheduleEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| self.mode.cmp(&other.mode))
            .then_with(|| self.candidate.cmp(&other.candidate))
    }
}

impl PartialOrd for ScheduleEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.key(), self.mode, self.candidate)
    }
}

/// Field-level problem detected while building an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },
    #[error("{0} must not be blank")]
    BlankField(&'static str),
    #[error("unknown interview mode '{0}' (expected online or offline)")]
    UnknownMode(String),
    #[error("failed to parse '{0}' as YYYY-MM-DD")]
    InvalidDate(String),
    #[error("failed to parse '{0}' as HH:MM")]
    InvalidTime(String),
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.trim().to_string()))
}

/// Accepts `HH:MM`, `HH:MM:SS` and `HH:MM:SS.fff`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f"))
        .map_err(|_| ValidationError::InvalidTime(trimmed.to_string()))
}

/// Shortest text [`parse_time`] reads back to the same value: `HH:MM` on whole minutes,
/// seconds and fractions only when present.
pub fn format_time(time: NaiveTime) -> String {
    if time.nanosecond() != 0 {
        time.format("%H:%M:%S%.f").to_string()
    } else if time.second() != 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
    }

    fn amy() -> CandidateIdentity {
        CandidateIdentity::new("Amy", "amy@x.com")
    }

    #[test]
    fn rejects_end_before_or_equal_to_start() {
        let err = ScheduleEntry::new(date(), time(10, 0), time(9, 0), InterviewMode::Online, amy())
            .expect_err("end before start");
        assert_eq!(
            err,
            ValidationError::EndNotAfterStart {
                start: time(10, 0),
                end: time(9, 0)
            }
        );

        assert!(
            ScheduleEntry::new(date(), time(9, 0), time(9, 0), InterviewMode::Online, amy())
                .is_err()
        );
    }

    #[test]
    fn rejects_blank_candidate_fields() {
        let err = ScheduleEntry::new(
            date(),
            time(9, 0),
            time(10, 0),
            InterviewMode::Online,
            CandidateIdentity::new("  ", "amy@x.com"),
        )
        .expect_err("blank name");
        assert_eq!(err, ValidationError::BlankField("candidate name"));
    }

    #[test]
    fn identity_ignores_mode_and_candidate() {
        let entry =
            ScheduleEntry::new(date(), time(9, 0), time(10, 0), InterviewMode::Online, amy())
                .expect("valid entry");
        let edited = entry
            .with_mode(InterviewMode::Offline)
            .with_candidate(CandidateIdentity::new("Bob", "bob@x.com"))
            .expect("valid candidate");

        assert!(entry.is_same_schedule(&edited));
        assert_ne!(entry, edited);

        let later = entry
            .with_slot(date(), time(9, 0), time(11, 0))
            .expect("valid slot");
        assert!(!entry.is_same_schedule(&later));
    }

    #[test]
    fn ordering_breaks_start_ties_on_end_time() {
        let short = ScheduleEntry::new(date(), time(9, 0), time(9, 30), InterviewMode::Online, amy())
            .expect("valid");
        let long = ScheduleEntry::new(date(), time(9, 0), time(10, 0), InterviewMode::Online, amy())
            .expect("valid");
        assert!(short < long);

        let next_day = NaiveDate::from_ymd_opt(2025, 3, 16).expect("valid date");
        let early_next_day =
            ScheduleEntry::new(next_day, time(7, 0), time(8, 0), InterviewMode::Online, amy())
                .expect("valid");
        assert!(long < early_next_day);
    }

    #[test]
    fn parses_modes_and_times_leniently() {
        assert_eq!(InterviewMode::parse(" ONLINE "), Ok(InterviewMode::Online));
        assert_eq!(InterviewMode::parse("offline"), Ok(InterviewMode::Offline));
        assert!(matches!(
            InterviewMode::parse("hybrid"),
            Err(ValidationError::UnknownMode(mode)) if mode == "hybrid"
        ));

        assert_eq!(parse_time("09:30"), Ok(time(9, 30)));
        assert_eq!(parse_time("09:30:00"), Ok(time(9, 30)));
        assert!(parse_time("9.30").is_err());
        assert_eq!(parse_date("2025-03-15"), Ok(date()));
        assert!(parse_date("15/03/2025").is_err());
    }

    #[test]
    fn format_time_keeps_seconds_only_when_present() {
        let with_seconds = NaiveTime::from_hms_opt(9, 0, 10).expect("valid time");
        let with_millis = NaiveTime::from_hms_milli_opt(9, 0, 10, 250).expect("valid time");

        assert_eq!(format_time(time(9, 30)), "09:30");
        assert_eq!(format_time(with_seconds), "09:00:10");
        assert_eq!(parse_time(&format_time(with_seconds)), Ok(with_seconds));
        assert_eq!(parse_time(&format_time(with_millis)), Ok(with_millis));
    }

    #[test]
    fn keys_differing_only_in_seconds_render_differently() {
        let start = NaiveTime::from_hms_opt(9, 0, 10).expect("valid time");
        let end = NaiveTime::from_hms_opt(9, 0, 50).expect("valid time");
        let entry = ScheduleEntry::new(date(), start, end, InterviewMode::Online, amy())
            .expect("valid entry");
        assert_eq!(entry.key().to_string(), "2025-03-15 09:00:10-09:00:50");
    }

    #[test]
    fn display_renders_key_mode_and_candidate() {
        let entry =
            ScheduleEntry::new(date(), time(9, 0), time(10, 0), InterviewMode::Online, amy())
                .expect("valid entry");
        assert_eq!(
            entry.to_string(),
            "2025-03-15 09:00-10:00 [online] Amy <amy@x.com>"
        );
    }
}
