//! The `gradebook show`, `gradebook filter` and `gradebook order` commands.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::Take;

use super::{load_repository, resolve_config};
use crate::output::{format_student, print_json, print_roster, print_students, ConsoleSink, OutputFormat};

/// Options shared by the one-shot query commands.
pub struct QueryArgs {
    pub file: PathBuf,
    pub course: String,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub fn show(args: QueryArgs, student: Option<String>) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), None)?;
    let repo = load_repository(&config, &args.file, ConsoleSink::batch())?;

    match student {
        Some(student) => {
            if let Some(marks) = repo.student_marks_in_course(&args.course, &student) {
                match args.format {
                    OutputFormat::Text => println!("{}", format_student(&marks)),
                    OutputFormat::Json => print_json(&marks)?,
                }
            }
        }
        None => {
            if let Some(roster) = repo.students_by_course(&args.course) {
                match args.format {
                    OutputFormat::Text => print_roster(&roster),
                    OutputFormat::Json => print_json(&roster)?,
                }
            }
        }
    }

    Ok(())
}

pub fn filter(args: QueryArgs, filter: String, take: Option<Take>) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), None)?;
    let repo = load_repository(&config, &args.file, ConsoleSink::batch())?;
    let take = take.unwrap_or(Take::from(config.default_take));

    if let Some(students) = repo.filtered_students(&args.course, &filter, take) {
        match args.format {
            OutputFormat::Text => print_students(&students),
            OutputFormat::Json => print_json(&students)?,
        }
    }

    Ok(())
}

pub fn order(args: QueryArgs, order: String, take: Option<Take>) -> Result<()> {
    let config = resolve_config(args.config.as_deref(), None)?;
    let repo = load_repository(&config, &args.file, ConsoleSink::batch())?;
    let take = take.unwrap_or(Take::from(config.default_take));

    if let Some(students) = repo.ordered_students(&args.course, &order, take) {
        match args.format {
            OutputFormat::Text => print_students(&students),
            OutputFormat::Json => print_json(&students)?,
        }
    }

    Ok(())
}
