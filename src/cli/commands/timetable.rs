//! Timetable command implementation.

use colored::Colorize;

use super::Context;
use crate::cli::args::{ClassArgs, OutputFormat, TimetableCommands};
use crate::error::StudyFocusError;
use crate::features::attendance::{parse_weekday, weekday_name, ClassEntry, TimetableStorage};
use crate::output::{format_class, format_timetable, to_json};

/// Execute timetable subcommands.
///
/// # Errors
///
/// Returns an error if no user is set, the input is invalid, the class does
/// not exist, or the database fails.
pub fn timetable(ctx: &Context, cmd: TimetableCommands) -> Result<String, StudyFocusError> {
    let user = ctx.require_user()?;
    let storage = TimetableStorage::with_database(ctx.open_database()?);

    match cmd {
        TimetableCommands::Add(args) => add(&storage, &user, args, ctx.format),
        TimetableCommands::List { day } => list(&storage, &user, day.as_deref(), ctx.format),
        TimetableCommands::Edit {
            id,
            course,
            day,
            time,
            teacher,
            place,
        } => {
            let mut entry = find(&storage, &user, id)?;
            let changes = [
                (&mut entry.course, course),
                (&mut entry.day, day),
                (&mut entry.time, time),
                (&mut entry.teacher, teacher),
                (&mut entry.place, place),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    *field = value;
                }
            }
            storage.update(&mut entry)?;
            done(&entry, "Updated", ctx.format)
        }
        TimetableCommands::Remove { id } => {
            let entry = find(&storage, &user, id)?;
            storage.delete(&user, id)?;
            done(&entry, "Removed", ctx.format)
        }
        TimetableCommands::Mark { id, status } => {
            storage.set_status(&user, id, status)?;
            let entry = find(&storage, &user, id)?;
            done(&entry, &format!("Marked {status}:"), ctx.format)
        }
    }
}

fn add(
    storage: &TimetableStorage,
    user: &str,
    args: ClassArgs,
    format: OutputFormat,
) -> Result<String, StudyFocusError> {
    let mut entry = ClassEntry::new(user, args.course, args.day, args.time, args.teacher, args.place);
    storage.add(&mut entry)?;

    match format {
        OutputFormat::Json => to_json(&entry),
        OutputFormat::Pretty => Ok(format!(
            "{} Added class\n{}",
            "✓".green(),
            format_class(&entry, format)?
        )),
    }
}

fn list(
    storage: &TimetableStorage,
    user: &str,
    day: Option<&str>,
    format: OutputFormat,
) -> Result<String, StudyFocusError> {
    let entries = match day {
        Some(day) => {
            let weekday = parse_weekday(day).ok_or_else(|| {
                StudyFocusError::InvalidInput(format!("'{day}' is not a day of the week"))
            })?;
            storage.list_for_day(user, weekday_name(weekday))?
        }
        None => storage.list_for_user(user)?,
    };

    format_timetable(&entries, format)
}

fn find(storage: &TimetableStorage, user: &str, id: i64) -> Result<ClassEntry, StudyFocusError> {
    storage
        .get(user, id)?
        .ok_or_else(|| StudyFocusError::NotFound(format!("class {id}")))
}

fn done(entry: &ClassEntry, verb: &str, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Json => to_json(entry),
        OutputFormat::Pretty => Ok(format!(
            "{} {} {}",
            "✓".green(),
            verb,
            entry.course.bold()
        )),
    }
}
