use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::attendance::AttendanceStatus;

#[derive(Parser)]
#[command(name = "studyfocus")]
#[command(about = "A Pomodoro focus timer and class attendance tracker for students")]
#[command(long_about = "studyfocus - Focus timer and class tracker

Run 25, 50 or 90 minute focus sessions in the terminal, keep a count of
completed sessions per day, and track attendance for your weekly classes.

QUICK START:
  studyfocus focus run                  Start the full-screen timer
  studyfocus focus run --preset 50      Start with a 50 minute session
  studyfocus timetable add --course Algorithms --day Monday \\
      --time 09:00-10:30 --teacher \"Dr. Lee\" --place \"Room 4\"
  studyfocus course add -s \"Fall 2024\" -c CS201 -t Algorithms \\
      --credit 3 --type Core
  studyfocus dashboard                  Today's classes and focus sessions

IDENTITY:
  Sessions are counted per user. Set the user with --user, the
  STUDYFOCUS_USER environment variable, or identity.user_id in
  ~/.studyfocus/config.yaml.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// User whose sessions and classes are used
    #[arg(short, long, global = true, env = "STUDYFOCUS_USER")]
    pub user: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Focus timer and session history
    ///
    /// Run the countdown, check today's completed sessions,
    /// or look back over recent days.
    Focus(FocusArgs),

    /// Manage your weekly class timetable
    ///
    /// Add, edit and remove classes, and mark attendance.
    #[command(alias = "tt")]
    Timetable(TimetableArgs),

    /// Manage your course list
    ///
    /// Courses are grouped by semester with credit totals.
    Course(CourseArgs),

    /// Show or edit your profile
    Profile(ProfileArgs),

    /// Show today's classes, focus sessions and a quote of the day
    Dashboard,

    /// Generate shell completions
    ///
    /// Outputs a completion script for the given shell.
    ///
    /// Example: studyfocus completions bash > ~/.bash_completion.d/studyfocus
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for focus commands.
#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: FocusCommands,
}

/// Focus subcommands.
#[derive(Subcommand)]
pub enum FocusCommands {
    /// Run the focus timer
    ///
    /// Opens a full-screen countdown. Space starts and pauses,
    /// r resets, 1/2/3 pick 25/50/90 minutes, q quits.
    ///
    /// Examples:
    ///   studyfocus focus run
    ///   studyfocus focus run --preset 90
    ///   studyfocus focus run --plain
    Run {
        /// Session length in minutes (25, 50 or 90)
        #[arg(long, short = 'p')]
        preset: Option<u32>,

        /// Print a plain countdown line instead of the full-screen view
        ///
        /// Starts immediately and exits after one session.
        #[arg(long)]
        plain: bool,
    },

    /// Show today's completed focus sessions
    Today,

    /// Report completed sessions over recent days
    ///
    /// Examples:
    ///   studyfocus focus report
    ///   studyfocus focus report --days 30
    Report {
        /// Number of days to include, ending today (1-365)
        #[arg(long, short = 'd', default_value = "7")]
        days: u32,
    },

    /// List the allowed session lengths
    Presets,
}

/// Arguments for timetable commands.
#[derive(Args)]
pub struct TimetableArgs {
    #[command(subcommand)]
    pub command: TimetableCommands,
}

/// Fields of a class.
#[derive(Args)]
pub struct ClassArgs {
    /// Course name
    #[arg(long, short = 'c')]
    pub course: String,

    /// Day of the week (e.g. Monday or mon)
    #[arg(long, short = 'd')]
    pub day: String,

    /// Time slot (e.g. 09:00-10:30)
    #[arg(long, short = 't')]
    pub time: String,

    /// Teacher
    #[arg(long)]
    pub teacher: String,

    /// Room or location
    #[arg(long, short = 'p')]
    pub place: String,
}

/// Timetable subcommands.
#[derive(Subcommand)]
pub enum TimetableCommands {
    /// Add a class
    ///
    /// Example:
    ///   studyfocus timetable add -c Algorithms -d Monday -t 09:00 --teacher "Dr. Lee" -p "Room 4"
    Add(ClassArgs),

    /// List classes, grouped by weekday
    List {
        /// Only show classes on this day
        #[arg(long, short = 'd')]
        day: Option<String>,
    },

    /// Change details of a class
    ///
    /// Only the given fields are changed.
    Edit {
        /// Class ID
        id: i64,

        /// New course name
        #[arg(long, short = 'c')]
        course: Option<String>,

        /// New day of the week
        #[arg(long, short = 'd')]
        day: Option<String>,

        /// New time slot
        #[arg(long, short = 't')]
        time: Option<String>,

        /// New teacher
        #[arg(long)]
        teacher: Option<String>,

        /// New room or location
        #[arg(long, short = 'p')]
        place: Option<String>,
    },

    /// Remove a class
    #[command(alias = "rm")]
    Remove {
        /// Class ID
        id: i64,
    },

    /// Mark attendance for a class
    ///
    /// Example: studyfocus timetable mark 3 attended
    Mark {
        /// Class ID
        id: i64,

        /// ongoing, late, cancelled or attended
        status: AttendanceStatus,
    },
}

/// Arguments for course commands.
#[derive(Args)]
pub struct CourseArgs {
    #[command(subcommand)]
    pub command: CourseCommands,
}

/// Course subcommands.
#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a course
    ///
    /// Example:
    ///   studyfocus course add -s "Fall 2024" -c CS201 -t Algorithms --credit 3 --type Core
    Add {
        /// Semester, e.g. "Fall 2024"
        #[arg(long, short = 's')]
        semester: String,

        /// Course code
        #[arg(long, short = 'c')]
        code: String,

        /// Course title
        #[arg(long, short = 't')]
        title: String,

        /// Credit hours
        #[arg(long)]
        credit: u32,

        /// Course type (core, elective, lab, ...)
        #[arg(long = "type")]
        kind: String,
    },

    /// List courses by semester
    List,

    /// Remove a course
    #[command(alias = "rm")]
    Remove {
        /// Course ID
        id: i64,
    },
}

/// Arguments for profile commands.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    Show,

    /// Change your display name
    Name {
        /// New display name
        name: String,
    },

    /// Record your academic info
    ///
    /// This can only be saved once.
    Academic {
        /// Country
        #[arg(long)]
        country: String,

        /// University
        #[arg(long)]
        university: String,

        /// Degree program
        #[arg(long)]
        degree: String,

        /// Department
        #[arg(long)]
        department: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_focus_run() {
        let cli = Cli::try_parse_from(["studyfocus", "focus", "run", "--preset", "50"]).unwrap();
        match cli.command {
            Commands::Focus(FocusArgs {
                command: FocusCommands::Run { preset, plain },
            }) => {
                assert_eq!(preset, Some(50));
                assert!(!plain);
            }
            _ => panic!("expected focus run"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "studyfocus", "dashboard", "--output", "json", "--user", "stu-1", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.user.as_deref(), Some("stu-1"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_mark_status() {
        let cli =
            Cli::try_parse_from(["studyfocus", "timetable", "mark", "3", "attendance"]).unwrap();
        match cli.command {
            Commands::Timetable(TimetableArgs {
                command: TimetableCommands::Mark { id, status },
            }) => {
                assert_eq!(id, 3);
                assert_eq!(status, AttendanceStatus::Attended);
            }
            _ => panic!("expected timetable mark"),
        }

        assert!(Cli::try_parse_from(["studyfocus", "timetable", "mark", "3", "absent"]).is_err());
    }

    #[test]
    fn test_add_requires_all_fields() {
        assert!(Cli::try_parse_from(["studyfocus", "timetable", "add", "-c", "Algorithms"]).is_err());
    }

    #[test]
    fn test_parse_course_add_type_flag() {
        let cli = Cli::try_parse_from([
            "studyfocus", "course", "add", "-s", "Fall 2024", "-c", "CS201", "-t", "Algorithms",
            "--credit", "3", "--type", "Core",
        ])
        .unwrap();
        match cli.command {
            Commands::Course(CourseArgs {
                command: CourseCommands::Add { credit, kind, .. },
            }) => {
                assert_eq!(credit, 3);
                assert_eq!(kind, "Core");
            }
            _ => panic!("expected course add"),
        }

        assert!(Cli::try_parse_from([
            "studyfocus", "course", "add", "-s", "Fall 2024", "-c", "CS201", "-t", "Algorithms",
            "--credit", "three", "--type", "Core",
        ])
        .is_err());
    }
}
