use crate::cli::{
    Command, PersonCommand, ScheduleAddArgs, ScheduleCommand, ScheduleEditArgs, ScheduleListArgs,
};
use crate::infra::{offset, render_entries, render_persons};
use interview_board::board::{ScheduleBoard, ScheduleEdit, ScheduleEntry, ScheduleError};
use interview_board::error::AppError;
use interview_board::import::ScheduleCsvImporter;
use interview_board::registry::{Person, PersonRegistry};
use interview_board::storage::{ScheduleRecord, StorageError};
use std::path::Path;

/// Registry and board loaded for a single command.
pub(crate) struct Workspace {
    pub(crate) registry: PersonRegistry,
    pub(crate) board: ScheduleBoard,
}

#[derive(Debug)]
pub(crate) struct CommandOutcome {
    pub(crate) message: String,
    pub(crate) changed: bool,
}

impl CommandOutcome {
    fn changed(message: String) -> Self {
        Self {
            message,
            changed: true,
        }
    }

    fn unchanged(message: String) -> Self {
        Self {
            message,
            changed: false,
        }
    }
}

pub(crate) fn execute(
    workspace: &mut Workspace,
    command: Command,
) -> Result<CommandOutcome, AppError> {
    match command {
        Command::Schedule { command } => execute_schedule(workspace, command),
        Command::Person { command } => execute_person(workspace, command),
    }
}

fn execute_schedule(
    workspace: &mut Workspace,
    command: ScheduleCommand,
) -> Result<CommandOutcome, AppError> {
    match command {
        ScheduleCommand::Add(args) => add_interview(workspace, args),
        ScheduleCommand::Edit(args) => edit_interview(workspace, args),
        ScheduleCommand::Delete { index } => {
            let removed = workspace.board.remove(offset(index))?;
            Ok(CommandOutcome::changed(format!("Deleted interview: {removed}")))
        }
        ScheduleCommand::List(args) => list_interviews(&workspace.board, args),
        ScheduleCommand::Import { path } => import_interviews(&mut workspace.board, &path),
        ScheduleCommand::Clear => {
            workspace.board.clear();
            Ok(CommandOutcome::changed("Cleared every interview.".to_string()))
        }
    }
}

fn add_interview(
    workspace: &mut Workspace,
    args: ScheduleAddArgs,
) -> Result<CommandOutcome, AppError> {
    let candidate = workspace.registry.lookup(offset(args.person))?;
    let entry = ScheduleEntry::new(args.date, args.start, args.end, args.mode, candidate)
        .map_err(ScheduleError::from)?;
    let message = format!("New interview added: {entry}");
    workspace.board.add(entry)?;
    Ok(CommandOutcome::changed(message))
}

fn edit_interview(
    workspace: &mut Workspace,
    args: ScheduleEditArgs,
) -> Result<CommandOutcome, AppError> {
    let candidate = args
        .person
        .map(|person| workspace.registry.lookup(offset(person)))
        .transpose()?;
    let edit = ScheduleEdit {
        date: args.date,
        start_time: args.start,
        end_time: args.end,
        mode: args.mode,
        candidate,
    };
    if edit.is_empty() {
        return Ok(CommandOutcome::unchanged(
            "Nothing to edit: pass at least one field.".to_string(),
        ));
    }

    let updated = workspace.board.edit(offset(args.index), &edit)?;
    Ok(CommandOutcome::changed(format!("Edited interview: {updated}")))
}

fn list_interviews(
    board: &ScheduleBoard,
    args: ScheduleListArgs,
) -> Result<CommandOutcome, AppError> {
    let needle = args.candidate.map(|name| name.to_lowercase());
    let selects = |entry: &ScheduleEntry| {
        args.date.map_or(true, |date| entry.date() == date)
            && needle
                .as_deref()
                .map_or(true, |needle| entry.candidate().name.to_lowercase().contains(needle))
    };

    let selected: Vec<(usize, &ScheduleEntry)> = board
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| selects(entry))
        .collect();

    let message = if args.json {
        let records: Vec<ScheduleRecord> = selected
            .iter()
            .map(|(_, entry)| ScheduleRecord::from_entry(entry))
            .collect();
        serde_json::to_string_pretty(&records)
            .map_err(StorageError::from)?
    } else {
        render_entries(selected)
    };
    Ok(CommandOutcome::unchanged(message))
}

fn import_interviews(board: &mut ScheduleBoard, path: &Path) -> Result<CommandOutcome, AppError> {
    let entries = ScheduleCsvImporter::from_path(path)?;
    let count = entries.len();
    board.set_all(entries)?;
    Ok(CommandOutcome::changed(format!(
        "Imported {count} interview(s) from {}",
        path.display()
    )))
}

fn execute_person(
    workspace: &mut Workspace,
    command: PersonCommand,
) -> Result<CommandOutcome, AppError> {
    match command {
        PersonCommand::Add { name, email } => {
            let person = Person::new(name, email)?;
            let message = format!("New person added: {} <{}>", person.name, person.email);
            workspace.registry.add(person)?;
            Ok(CommandOutcome::changed(message))
        }
        PersonCommand::Edit { index, name, email } => {
            let current = workspace.registry.get(offset(index))?.clone();
            let updated = Person::new(
                name.unwrap_or(current.name),
                email.unwrap_or(current.email),
            )?;
            let message = format!("Edited person: {} <{}>", updated.name, updated.email);

            let mut refreshed = 0;
            if let Some(change) = workspace.registry.edit(offset(index), updated)? {
                workspace.board.notify_person_edited(change);
                refreshed = workspace.board.sync_candidates();
            }
            Ok(CommandOutcome::changed(format!(
                "{message} ({refreshed} interview(s) updated)"
            )))
        }
        PersonCommand::Delete { index } => {
            let removed = workspace.registry.remove(offset(index))?;
            let remaining = workspace
                .board
                .filter(|entry| *entry.candidate() == removed.identity())
                .len();
            Ok(CommandOutcome::changed(format!(
                "Deleted person: {} ({remaining} interview(s) still list them)",
                removed.name
            )))
        }
        PersonCommand::List => Ok(CommandOutcome::unchanged(render_persons(
            workspace.registry.persons(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use interview_board::board::{ClashPolicy, InterviewMode};
    use std::num::NonZeroUsize;

    fn position(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero position")
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn workspace() -> Workspace {
        let registry = PersonRegistry::with_persons(vec![
            Person::new("Amy", "amy@x.com").expect("valid"),
            Person::new("Bob", "bob@x.com").expect("valid"),
        ])
        .expect("registry");
        Workspace {
            registry,
            board: ScheduleBoard::new(ClashPolicy::SelfExclusion),
        }
    }

    fn add(person: usize, start: NaiveTime, end: NaiveTime) -> Command {
        Command::Schedule {
            command: ScheduleCommand::Add(ScheduleAddArgs {
                person: position(person),
                date: NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date"),
                start,
                end,
                mode: InterviewMode::Online,
            }),
        }
    }

    #[test]
    fn add_reports_conflicts_without_changing_the_board() {
        let mut workspace = workspace();
        let outcome = execute(&mut workspace, add(1, at(9, 0), at(10, 0))).expect("added");
        assert!(outcome.changed);

        let err = execute(&mut workspace, add(2, at(9, 30), at(10, 30))).expect_err("clash");
        assert!(matches!(
            err,
            AppError::Schedule(ScheduleError::Conflict { .. })
        ));
        assert_eq!(workspace.board.len(), 1);
    }

    #[test]
    fn person_edit_refreshes_their_interviews() {
        let mut workspace = workspace();
        execute(&mut workspace, add(1, at(9, 0), at(10, 0))).expect("added");

        let outcome = execute(
            &mut workspace,
            Command::Person {
                command: PersonCommand::Edit {
                    index: position(1),
                    name: Some("Amy Tan".to_string()),
                    email: None,
                },
            },
        )
        .expect("edited");

        assert!(outcome.message.ends_with("(1 interview(s) updated)"));
        let entry = workspace.board.get(0).expect("entry present");
        assert_eq!(entry.candidate().name, "Amy Tan");
        assert_eq!(entry.candidate().email, "amy@x.com");
    }

    #[test]
    fn list_filters_by_candidate_and_keeps_board_positions() {
        let mut workspace = workspace();
        execute(&mut workspace, add(1, at(9, 0), at(10, 0))).expect("added");
        execute(&mut workspace, add(2, at(10, 0), at(11, 0))).expect("added");

        let outcome = execute(
            &mut workspace,
            Command::Schedule {
                command: ScheduleCommand::List(ScheduleListArgs {
                    candidate: Some("bob".to_string()),
                    ..ScheduleListArgs::default()
                }),
            },
        )
        .expect("listed");

        assert!(!outcome.changed);
        assert!(outcome.message.starts_with("  2. 2025-03-15 10:00-11:00"));
        assert!(!outcome.message.contains("Amy"));
    }

    #[test]
    fn empty_edit_is_a_no_op() {
        let mut workspace = workspace();
        execute(&mut workspace, add(1, at(9, 0), at(10, 0))).expect("added");

        let outcome = execute(
            &mut workspace,
            Command::Schedule {
                command: ScheduleCommand::Edit(ScheduleEditArgs {
                    index: position(1),
                    person: None,
                    date: None,
                    start: None,
                    end: None,
                    mode: None,
                }),
            },
        )
        .expect("no-op");
        assert!(!outcome.changed);
    }
}
