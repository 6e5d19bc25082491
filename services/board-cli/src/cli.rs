use crate::commands::{execute, Workspace};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use interview_board::board::InterviewMode;
use interview_board::config::AppConfig;
use interview_board::error::AppError;
use interview_board::storage::JsonBoardStorage;
use interview_board::telemetry;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Schedule Board",
    about = "Manage candidates and their interview slots from the command line",
    version
)]
pub(crate) struct Cli {
    /// Override the configured data file
    #[arg(long, global = true)]
    pub(crate) data_file: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Manage interview slots
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Manage candidates
    Person {
        #[command(subcommand)]
        command: PersonCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum ScheduleCommand {
    /// Schedule an interview for a listed candidate
    Add(ScheduleAddArgs),
    /// Change the slot, mode, or candidate of an interview
    Edit(ScheduleEditArgs),
    /// Remove an interview by its list position
    Delete { index: NonZeroUsize },
    /// Show interviews in date and time order
    List(ScheduleListArgs),
    /// Replace every interview with the rows of a CSV export
    Import { path: PathBuf },
    /// Remove every interview
    Clear,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleAddArgs {
    /// Position of the candidate in `person list`
    #[arg(long)]
    pub(crate) person: NonZeroUsize,
    /// Interview date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date_arg)]
    pub(crate) date: NaiveDate,
    /// Start time (HH:MM)
    #[arg(long, value_parser = crate::infra::parse_time_arg)]
    pub(crate) start: NaiveTime,
    /// End time (HH:MM)
    #[arg(long, value_parser = crate::infra::parse_time_arg)]
    pub(crate) end: NaiveTime,
    /// online or offline
    #[arg(long, value_parser = crate::infra::parse_mode_arg, default_value = "online")]
    pub(crate) mode: InterviewMode,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleEditArgs {
    /// Position of the interview in `schedule list`
    pub(crate) index: NonZeroUsize,
    /// Reassign the interview to the candidate at this `person list` position
    #[arg(long)]
    pub(crate) person: Option<NonZeroUsize>,
    #[arg(long, value_parser = crate::infra::parse_date_arg)]
    pub(crate) date: Option<NaiveDate>,
    #[arg(long, value_parser = crate::infra::parse_time_arg)]
    pub(crate) start: Option<NaiveTime>,
    #[arg(long, value_parser = crate::infra::parse_time_arg)]
    pub(crate) end: Option<NaiveTime>,
    #[arg(long, value_parser = crate::infra::parse_mode_arg)]
    pub(crate) mode: Option<InterviewMode>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScheduleListArgs {
    /// Only show interviews on this date
    #[arg(long, value_parser = crate::infra::parse_date_arg)]
    pub(crate) date: Option<NaiveDate>,
    /// Only show interviews whose candidate name contains this text
    #[arg(long)]
    pub(crate) candidate: Option<String>,
    /// Print the stored JSON records instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PersonCommand {
    /// Register a candidate
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Rename a candidate or change their email; their interviews follow
    Edit {
        index: NonZeroUsize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove a candidate by list position
    Delete { index: NonZeroUsize },
    /// Show registered candidates
    List,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.data_file {
        config.storage.data_file = path;
    }

    telemetry::init(&config.telemetry)?;

    let storage = JsonBoardStorage::new(config.storage.data_file.clone());
    let (registry, board) = storage.load(config.board.clash_policy)?;
    debug!(
        environment = ?config.environment,
        policy = %config.board.clash_policy,
        data_file = %storage.path().display(),
        "board opened"
    );

    let mut workspace = Workspace { registry, board };
    let outcome = execute(&mut workspace, cli.command)?;
    if outcome.changed {
        storage.save(&workspace.registry, &workspace.board)?;
    }

    println!("{}", outcome.message);
    Ok(())
}
