use colored::{ColoredString, Colorize};

use crate::features::attendance::{weekday_name, AttendanceStatus, ClassEntry, WEEK};
use crate::features::courses::{group_by_semester, Course, CourseSummary};
use crate::features::dashboard::Dashboard;
use crate::features::focus::{FocusReport, Preset};
use crate::features::profile::Profile;

/// Shown when a focus session ends.
pub const COMPLETION_TITLE: &str = "🎉 Session Complete!";

/// Follow-up line for [`COMPLETION_TITLE`].
pub const COMPLETION_MESSAGE: &str = "Great work! Time for a short break 🛋️";

/// "1 Focus Session Today" / "3 Focus Sessions Today"
#[must_use]
pub fn sessions_badge(count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} Focus Session{plural} Today")
}

fn status_label(status: Option<AttendanceStatus>) -> ColoredString {
    match status {
        Some(AttendanceStatus::Ongoing) => "ongoing".green(),
        Some(AttendanceStatus::Late) => "late".yellow(),
        Some(AttendanceStatus::Cancelled) => "cancelled".red(),
        Some(AttendanceStatus::Attended) => "attended".blue(),
        None => "not set".dimmed(),
    }
}

fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = (value as usize * width) / max.max(1) as usize;
    "█".repeat(filled.min(width))
}

/// Format the preset list, marking the configured default
#[must_use]
pub fn format_presets_pretty(selected: Preset) -> String {
    let mut output = String::from("Focus presets\n");
    output.push_str(&"─".repeat(30));
    output.push('\n');

    for preset in Preset::ALL {
        let marker = if preset == selected { "●".green() } else { "○".dimmed() };
        output.push_str(&format!(
            "{} {}  {}\n",
            marker,
            preset.to_string().bold(),
            format!("[{}]", preset.index() + 1).dimmed()
        ));
    }

    output
}

/// Format today's persisted focus count
#[must_use]
pub fn format_focus_today_pretty(user_id: &str, date: chrono::NaiveDate, count: u32) -> String {
    format!(
        "🎯 {}\n  {}: {}\n  {}: {}",
        sessions_badge(count).bold(),
        "User".dimmed(),
        user_id,
        "Date".dimmed(),
        date
    )
}

/// Format a trailing focus report
#[must_use]
pub fn format_report_pretty(report: &FocusReport) -> String {
    let mut lines = Vec::new();

    let span = match (report.days.first(), report.days.last()) {
        (Some(first), Some(last)) => format!("{} → {}", first.date, last.date),
        _ => String::new(),
    };
    lines.push(format!("📊 Focus Report {}", span.dimmed()));
    lines.push("═".repeat(50));
    lines.push(format!("  Total sessions:   {}", report.total.to_string().bold()));
    lines.push(format!("  Average per day:  {:.1}", report.average_per_day));
    lines.push(format!(
        "  Best day:         {}",
        report.best_day.map_or_else(
            || "-".to_string(),
            |d| format!("{} ({} sessions)", d.date, d.sessions)
        )
    ));
    lines.push(format!("  Current streak:   {} days", report.current_streak));

    if report.total > 0 {
        lines.push(String::new());
        lines.push("Daily".to_string());
        lines.push("─".repeat(40));

        let max = report.max_sessions();
        for day in report.days.iter().rev().take(14) {
            lines.push(format!(
                "  {} {:>3} {}",
                day.date.format("%a %m-%d"),
                day.sessions,
                bar(day.sessions, max, 20).green()
            ));
        }
    }

    lines.join("\n")
}

/// Format a single class
#[must_use]
pub fn format_class_pretty(entry: &ClassEntry) -> String {
    let id = entry.id.map_or_else(|| "-".to_string(), |id| id.to_string());

    let mut output = format!("{} {}\n", format!("#{id}").dimmed(), entry.course.bold());
    output.push_str(&format!("  {}: {}\n", "Day".dimmed(), entry.day));
    output.push_str(&format!("  {}: {}\n", "Time".dimmed(), entry.time));
    output.push_str(&format!("  {}: {}\n", "Teacher".dimmed(), entry.teacher));
    output.push_str(&format!("  {}: {}\n", "Place".dimmed(), entry.place));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), status_label(entry.status)));
    output
}

fn class_line(entry: &ClassEntry) -> String {
    format!(
        "  {} {} {}  {}  {}  {}",
        format!("#{:<3}", entry.id.unwrap_or_default()).dimmed(),
        entry.time.yellow(),
        entry.course.bold(),
        entry.teacher.dimmed(),
        entry.place.dimmed(),
        status_label(entry.status)
    )
}

/// Format a timetable grouped by weekday
#[must_use]
pub fn format_timetable_pretty(entries: &[ClassEntry]) -> String {
    if entries.is_empty() {
        return "📅 Weekly Timetable (0 classes)\n  No classes yet".to_string();
    }

    let mut output = format!("📅 Weekly Timetable ({} classes)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for day in WEEK {
        let classes: Vec<_> = entries.iter().filter(|e| e.weekday() == Some(day)).collect();
        if classes.is_empty() {
            continue;
        }

        let noun = if classes.len() == 1 { "class" } else { "classes" };
        output.push_str(&format!(
            "{} {}\n",
            weekday_name(day).cyan().bold(),
            format!("({} {noun})", classes.len()).dimmed()
        ));
        for entry in classes {
            output.push_str(&class_line(entry));
            output.push('\n');
        }
    }

    output
}

/// Format the course list grouped by semester, with totals on top
#[must_use]
pub fn format_courses_pretty(courses: &[Course]) -> String {
    let summary = CourseSummary::from_courses(courses);
    let noun = if summary.courses == 1 { "course" } else { "courses" };
    let mut output = format!(
        "📚 My Courses  {} {noun} · {} credit hours\n",
        summary.courses, summary.credits
    );

    if courses.is_empty() {
        output.push_str("  No courses yet");
        return output;
    }

    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (semester, list) in group_by_semester(courses) {
        let credits: u32 = list.iter().map(|c| c.credit).sum();
        output.push_str(&format!(
            "{} {}\n",
            semester.cyan().bold(),
            format!("({credits} cr)").dimmed()
        ));
        for course in list {
            output.push_str(&format!(
                "  {} {:<10} {:<30} {:>2} cr  {}\n",
                format!("[{}]", course.id.unwrap_or_default()).dimmed(),
                course.code.bold(),
                course.title,
                course.credit,
                course.kind.dimmed()
            ));
        }
    }

    output
}

/// Format a user profile
#[must_use]
pub fn format_profile_pretty(profile: &Profile) -> String {
    let mut lines = vec![
        format!("👤 {}", profile.name().bold()),
        format!("  {}: {}", "User".dimmed(), profile.uid),
    ];

    match &profile.academic_info {
        Some(info) => {
            lines.push(format!("  {}: {}", "University".dimmed(), info.university));
            lines.push(format!("  {}: {}", "Country".dimmed(), info.country));
            lines.push(format!("  {}: {}", "Degree".dimmed(), info.degree));
            lines.push(format!("  {}: {}", "Department".dimmed(), info.department));
        }
        None => lines.push(format!("  {}", "No academic info saved".dimmed())),
    }

    lines.join("\n")
}

/// Format the dashboard
#[must_use]
pub fn format_dashboard_pretty(dash: &Dashboard) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}  {}",
        "Focus & Productivity".bold(),
        format!("{} {}", dash.weekday, dash.date).dimmed()
    ));
    lines.push("═".repeat(50));

    lines.push(format!(
        "{} {}",
        dash.motivation.emoji,
        dash.motivation.quote.italic()
    ));
    lines.push(String::new());

    lines.push(format!("🎯 {}", sessions_badge(dash.focus_sessions).bold()));
    lines.push(String::new());

    lines.push("Today's Classes".to_string());
    lines.push("─".repeat(40));
    lines.push(format!(
        "  {} total  {} ongoing  {} late  {} cancelled  {} attended",
        dash.today.total.to_string().bold(),
        dash.today.ongoing.to_string().green(),
        dash.today.late.to_string().yellow(),
        dash.today.cancelled.to_string().red(),
        dash.today.attended.to_string().blue()
    ));
    if dash.classes.is_empty() {
        lines.push("  No classes today. Enjoy your free day! 🎉".dimmed().to_string());
    } else {
        lines.extend(dash.classes.iter().map(class_line));
    }
    lines.push(String::new());

    lines.push("Weekly Overview".to_string());
    lines.push("─".repeat(40));
    let max = dash.week.max();
    for (day, count) in dash.week.iter() {
        lines.push(format!(
            "  {} {:>2} {}",
            &weekday_name(day)[..3],
            count,
            bar(count, max, 20).cyan()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{DailyCount, MemoryAggregateStore};
    use chrono::NaiveDate;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_sessions_badge_pluralizes() {
        assert_eq!(sessions_badge(0), "0 Focus Sessions Today");
        assert_eq!(sessions_badge(1), "1 Focus Session Today");
        assert_eq!(sessions_badge(4), "4 Focus Sessions Today");
    }

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(2, 4, 10).chars().count(), 5);
        assert_eq!(bar(4, 4, 10).chars().count(), 10);
        assert_eq!(bar(0, 0, 10), "");
    }

    #[test]
    fn test_format_presets_pretty() {
        plain();
        let output = format_presets_pretty(Preset::Ninety);
        assert!(output.contains("25 min"));
        assert!(output.contains("● 90 min"));
        assert!(output.contains("○ 25 min"));
    }

    #[test]
    fn test_format_timetable_groups_by_day() {
        plain();
        let mut tue = ClassEntry::new("u1", "Physics", "Tuesday", "11:00", "Dr. Kim", "Lab");
        tue.id = Some(2);
        let mut mon = ClassEntry::new("u1", "Algorithms", "Monday", "09:00", "Dr. Lee", "R4");
        mon.id = Some(1);
        mon.status = Some(AttendanceStatus::Late);

        let output = format_timetable_pretty(&[tue, mon]);
        let monday = output.find("Monday").unwrap();
        let tuesday = output.find("Tuesday").unwrap();
        assert!(monday < tuesday);
        assert!(output.contains("(1 class)"));
        assert!(output.contains("late"));
        assert!(output.contains("not set"));
    }

    #[test]
    fn test_format_timetable_empty() {
        assert!(format_timetable_pretty(&[]).contains("No classes yet"));
    }

    #[test]
    fn test_format_report_pretty() {
        plain();
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let report = FocusReport::from_counts(
            "u1",
            vec![DailyCount {
                date,
                sessions: 2,
            }],
        );

        let output = format_report_pretty(&report);
        assert!(output.contains("Total sessions:   2"));
        assert!(output.contains("2024-06-03 (2 sessions)"));
        assert!(output.contains("Current streak:   1 days"));
    }

    #[test]
    fn test_format_dashboard_pretty() {
        plain();
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let dash = Dashboard::build("u1", date, &[], &MemoryAggregateStore::new()).unwrap();

        let output = format_dashboard_pretty(&dash);
        assert!(output.contains("Sunday 2024-09-01"));
        assert!(output.contains("0 Focus Sessions Today"));
        assert!(output.contains("Enjoy your free day"));
        assert!(output.contains("Mon  0"));
    }

    #[test]
    fn test_format_courses_pretty() {
        plain();
        let mut courses = vec![
            Course::new("u1", "Fall 2024", "CS201", "Algorithms", 3, "Core"),
            Course::new("u1", "Fall 2024", "MA101", "Calculus", 4, "Core"),
            Course::new("u1", "Spring 2025", "CS301", "Compilers", 3, "Elective"),
        ];
        courses[0].id = Some(1);

        let text = format_courses_pretty(&courses);
        assert!(text.contains("3 courses · 10 credit hours"));
        assert!(text.contains("Fall 2024 (7 cr)"));
        assert!(text.contains("[1] CS201"));
        assert!(text.find("Fall 2024").unwrap() < text.find("Spring 2025").unwrap());

        assert!(format_courses_pretty(&[]).contains("No courses yet"));
    }

    #[test]
    fn test_format_profile_pretty() {
        plain();
        let mut profile = Profile::empty("u1");
        let text = format_profile_pretty(&profile);
        assert!(text.contains("Student"));
        assert!(text.contains("No academic info saved"));

        profile.academic_info = Some(crate::features::profile::AcademicInfo {
            country: "Pakistan".to_string(),
            university: "NUST".to_string(),
            degree: "BS Computer Science".to_string(),
            department: "Computing".to_string(),
        });
        assert!(format_profile_pretty(&profile).contains("University: NUST"));
    }
}
