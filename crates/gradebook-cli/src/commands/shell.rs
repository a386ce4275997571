//! The `gradebook shell` command: an interactive loop over stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::{Diagnostic, DiagnosticSink, StudentsRepository, Take};

use super::resolve_config;
use crate::output::{format_student, print_roster, print_students, ConsoleSink};
use crate::traverse::traverse;

const DEFAULT_LS_DEPTH: usize = 1;

const HELP: &str = "\
readdb <file>                             load a data file (relative to the data directory)
dropdb                                    unload the current data
show <course> [student]                   list a course, or one student's scores in it
filter <course> <excellent|average|poor> [take <n|all>]
order <course> <ascending|descending|alphabetical> [take <n|all>]
courses                                   list loaded courses
ls [depth]                                list the data directory
help                                      show this help
quit                                      leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    ReadDb(String),
    DropDb,
    Show {
        course: String,
        student: Option<String>,
    },
    Filter {
        course: String,
        filter: String,
        take: Option<Take>,
    },
    Order {
        course: String,
        order: String,
        take: Option<Take>,
    },
    Courses,
    Ls(Option<usize>),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, Diagnostic> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(ShellCommand::Empty);
        };
        let invalid = || Diagnostic::InvalidCommand(line.trim().to_string());

        match (verb.to_lowercase().as_str(), args) {
            ("readdb", [file]) => Ok(ShellCommand::ReadDb(file.to_string())),
            ("dropdb", []) => Ok(ShellCommand::DropDb),
            ("show", [course]) => Ok(ShellCommand::Show {
                course: course.to_string(),
                student: None,
            }),
            ("show", [course, student]) => Ok(ShellCommand::Show {
                course: course.to_string(),
                student: Some(student.to_string()),
            }),
            ("filter", [course, filter, rest @ ..]) => Ok(ShellCommand::Filter {
                course: course.to_string(),
                filter: filter.to_string(),
                take: parse_take(rest).ok_or_else(invalid)??,
            }),
            ("order", [course, order, rest @ ..]) => Ok(ShellCommand::Order {
                course: course.to_string(),
                order: order.to_string(),
                take: parse_take(rest).ok_or_else(invalid)??,
            }),
            ("courses", []) => Ok(ShellCommand::Courses),
            ("ls", []) => Ok(ShellCommand::Ls(None)),
            ("ls", [depth]) => depth
                .parse()
                .map(|d| ShellCommand::Ls(Some(d)))
                .map_err(|_| invalid()),
            ("help", []) => Ok(ShellCommand::Help),
            ("quit" | "exit", []) => Ok(ShellCommand::Quit),
            _ => Err(invalid()),
        }
    }
}

/// Parse an optional `take <n|all>` suffix.
///
/// `None` means the suffix is malformed; `Some(Err)` means the count is.
fn parse_take(rest: &[&str]) -> Option<Result<Option<Take>, Diagnostic>> {
    match rest {
        [] => Some(Ok(None)),
        [keyword, count] if keyword.eq_ignore_ascii_case("take") => {
            Some(count.parse::<Take>().map(Some))
        }
        _ => None,
    }
}

/// Interactive session state: configuration plus the repository.
pub struct Shell<S: DiagnosticSink> {
    config: GradebookConfig,
    repo: StudentsRepository<S>,
}

impl<S: DiagnosticSink> Shell<S> {
    pub fn new(config: GradebookConfig, sink: S) -> Self {
        Self {
            config,
            repo: StudentsRepository::new(sink),
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.dispatch(command),
                Err(diagnostic) => self.repo.diagnostics().report(&diagnostic),
            }
        }
        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}{}", self.config.data_dir.display(), self.config.prompt)?;
        stdout.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) {
        tracing::debug!(?command, "dispatching");
        let default_take = Take::from(self.config.default_take);

        match command {
            ShellCommand::Empty | ShellCommand::Quit => {}
            ShellCommand::ReadDb(file) => {
                let path = self.config.resolve(&file);
                if let Err(e) = self.repo.load_data(&path) {
                    eprintln!("Error: {e:#}");
                }
            }
            ShellCommand::DropDb => {
                if self.repo.unload_data() {
                    println!("Data dropped.");
                }
            }
            ShellCommand::Show {
                course,
                student: None,
            } => {
                if let Some(roster) = self.repo.students_by_course(&course) {
                    print_roster(&roster);
                }
            }
            ShellCommand::Show {
                course,
                student: Some(student),
            } => {
                if let Some(marks) = self.repo.student_marks_in_course(&course, &student) {
                    println!("{}", format_student(&marks));
                }
            }
            ShellCommand::Filter {
                course,
                filter,
                take,
            } => {
                let take = take.unwrap_or(default_take);
                if let Some(students) = self.repo.filtered_students(&course, &filter, take) {
                    print_students(&students);
                }
            }
            ShellCommand::Order {
                course,
                order,
                take,
            } => {
                let take = take.unwrap_or(default_take);
                if let Some(students) = self.repo.ordered_students(&course, &order, take) {
                    print_students(&students);
                }
            }
            ShellCommand::Courses => {
                if let Some(names) = self.repo.course_names() {
                    for name in names {
                        println!("{name}");
                    }
                }
            }
            ShellCommand::Ls(depth) => {
                let root = &self.config.data_dir;
                match traverse(root, depth.unwrap_or(DEFAULT_LS_DEPTH)) {
                    Ok(entries) => {
                        for entry in entries {
                            let name = entry.path.strip_prefix(root).unwrap_or(&entry.path);
                            let suffix = if entry.is_dir { "/" } else { "" };
                            println!("{}{}{}", "  ".repeat(entry.depth - 1), name.display(), suffix);
                        }
                    }
                    Err(e) => eprintln!("Error: {e:#}"),
                }
            }
            ShellCommand::Help => println!("{HELP}"),
        }
    }
}

pub fn execute(config: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config.as_deref(), data_dir)?;
    let mut shell = Shell::new(config, ConsoleSink::interactive());
    shell.run(io::stdin().lock())
}
