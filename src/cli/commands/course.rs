//! Course and profile command implementations.

use colored::Colorize;

use super::Context;
use crate::cli::args::{CourseCommands, OutputFormat, ProfileCommands};
use crate::error::StudyFocusError;
use crate::features::courses::{Course, CourseStorage};
use crate::features::profile::{AcademicInfo, AcademicSave, ProfileStorage};
use crate::output::{format_courses, format_profile, to_json};

/// Execute course subcommands.
///
/// # Errors
///
/// Returns an error if no user is set, a field is missing, or the database
/// cannot be read.
pub fn course(ctx: &Context, cmd: CourseCommands) -> Result<String, StudyFocusError> {
    let user = ctx.require_user()?;
    let storage = CourseStorage::with_database(ctx.open_database()?);

    match cmd {
        CourseCommands::Add {
            semester,
            code,
            title,
            credit,
            kind,
        } => {
            let mut course = Course::new(&user, semester, code, title, credit, kind);
            storage.add(&mut course)?;
            match ctx.format {
                OutputFormat::Json => to_json(&course),
                OutputFormat::Pretty => Ok(format!(
                    "{} Added {} {}",
                    "✓".green(),
                    course.code.bold(),
                    course.title
                )),
            }
        }
        CourseCommands::List => format_courses(&storage.list_for_user(&user)?, ctx.format),
        CourseCommands::Remove { id } => {
            if !storage.delete(&user, id)? {
                return Err(StudyFocusError::NotFound(format!("course {id}")));
            }
            Ok(format!("{} Removed course {id}", "✓".green()))
        }
    }
}

/// Execute profile subcommands.
///
/// # Errors
///
/// Returns an error if no user is set, a field is missing, or the database
/// cannot be read.
pub fn profile(ctx: &Context, cmd: ProfileCommands) -> Result<String, StudyFocusError> {
    let user = ctx.require_user()?;
    let storage = ProfileStorage::with_database(ctx.open_database()?);

    match cmd {
        ProfileCommands::Show => format_profile(&storage.get(&user)?, ctx.format),
        ProfileCommands::Name { name } => {
            storage.set_display_name(&user, &name)?;
            format_profile(&storage.get(&user)?, ctx.format)
        }
        ProfileCommands::Academic {
            country,
            university,
            degree,
            department,
        } => {
            let mut info = AcademicInfo {
                country,
                university,
                degree,
                department,
            };
            let message = match storage.save_academic_info(&user, &mut info)? {
                AcademicSave::Saved => format!("{} Academic info saved 🎓", "✓".green()),
                AcademicSave::AlreadySaved => format!(
                    "{} Academic info already saved, nothing changed",
                    "ℹ".yellow()
                ),
            };
            match ctx.format {
                OutputFormat::Json => format_profile(&storage.get(&user)?, ctx.format),
                OutputFormat::Pretty => Ok(message),
            }
        }
    }
}
