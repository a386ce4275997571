//! Console rendering of query results and diagnostics.

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::Serialize;

use gradebook_core::statistics::CourseSummary;
use gradebook_core::{CourseRoster, Diagnostic, DiagnosticSink, StudentMarks};

/// Output format for one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Sink that writes diagnostics to stderr.
///
/// Status messages go to stdout only in interactive mode, so batch output
/// (especially JSON) stays clean.
pub struct ConsoleSink {
    echo_messages: bool,
}

impl ConsoleSink {
    pub fn interactive() -> Self {
        Self { echo_messages: true }
    }

    pub fn batch() -> Self {
        Self {
            echo_messages: false,
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::debug!(code = diagnostic.code(), "diagnostic");
        eprintln!("{diagnostic}");
    }

    fn message(&self, message: &str) {
        if self.echo_messages {
            println!("{message}");
        }
    }
}

pub fn format_student(marks: &StudentMarks<'_>) -> String {
    format!("{} - {:?}", marks.name, marks.scores)
}

pub fn print_students(students: &[StudentMarks<'_>]) {
    for marks in students {
        println!("{}", format_student(marks));
    }
}

pub fn print_roster(roster: &CourseRoster<'_>) {
    println!("{}:", roster.course);
    print_students(&roster.students);
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn summary_table(rows: &[CourseSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Course", "Students", "Mean score", "Best student"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.course),
            Cell::new(row.students),
            Cell::new(
                row.mean_score
                    .map(|m| format!("{m:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(row.best_student.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_line_format() {
        let marks = StudentMarks {
            name: "Petrov12_22",
            scores: &[88, 92, 75],
        };
        assert_eq!(format_student(&marks), "Petrov12_22 - [88, 92, 75]");
    }

    #[test]
    fn table_has_a_row_per_course() {
        let rows = vec![
            CourseSummary {
                course: "Java_Mar_2017".into(),
                students: 2,
                mean_score: Some(81.5),
                best_student: Some("Petrov12_22".into()),
            },
            CourseSummary {
                course: "C#_Feb_2016".into(),
                students: 0,
                mean_score: None,
                best_student: None,
            },
        ];
        let rendered = summary_table(&rows).to_string();
        assert!(rendered.contains("Java_Mar_2017"));
        assert!(rendered.contains("81.50"));
        assert!(rendered.contains("C#_Feb_2016"));
    }
}
