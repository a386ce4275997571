//! Exam record parser.
//!
//! A data file holds one record per line:
//!
//! ```text
//! <Course> <Student> <score> [<score> ...]
//! ```
//!
//! e.g. `Java_Mar_2017 Petrov12_22 88 92 75`. Lines that do not match the
//! record pattern are skipped silently. Lines that match but carry bad scores
//! produce a [`Diagnostic`] and are rejected as a whole.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::error::Diagnostic;
use crate::model::{MAX_SCORE_ON_EXAM_TASK, NUMBER_OF_TASKS_ON_EXAM};

static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<course>[A-Z][A-Za-z#+]*_[A-Z][a-z]{2}_[0-9]{4})\s+(?P<student>[A-Za-z]+[0-9]{2}_[0-9]{2,4})\s+(?P<scores>[0-9]+(?:\s+[0-9]+)*)\s*$",
    )
    .expect("record pattern is valid")
});

/// One validated line of a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source.
    pub line: usize,
    pub course: String,
    pub student: String,
    pub scores: Vec<u32>,
}

/// Parse a single line.
///
/// Returns `Ok(None)` when the line is not a record at all, and `Err` when it
/// is a record whose scores fail validation. Nothing is returned for a
/// partially valid record.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, Diagnostic> {
    let Some(caps) = RECORD_PATTERN.captures(line) else {
        return Ok(None);
    };

    let mut scores = Vec::new();
    for token in caps["scores"].split_whitespace() {
        let score: i32 = token.parse().map_err(|_| Diagnostic::NumberFormat {
            line: line_no,
            token: token.to_string(),
        })?;
        scores.push(score);
    }

    if let Some(&score) = scores
        .iter()
        .find(|&&s| s < 0 || s as u32 > MAX_SCORE_ON_EXAM_TASK)
    {
        return Err(Diagnostic::InvalidScore {
            line: line_no,
            score,
        });
    }

    if scores.len() > NUMBER_OF_TASKS_ON_EXAM {
        return Err(Diagnostic::InvalidNumberOfScores {
            line: line_no,
            count: scores.len(),
        });
    }

    Ok(Some(Record {
        line: line_no,
        course: caps["course"].to_string(),
        student: caps["student"].to_string(),
        // In range, checked above.
        scores: scores.into_iter().map(|s| s as u32).collect(),
    }))
}

/// Line counts from parsing a whole source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty lines seen.
    pub lines: usize,
    /// Lines that produced a valid record.
    pub records: usize,
    /// Lines that did not match the record pattern.
    pub skipped: usize,
    /// Lines that matched but were rejected with a diagnostic.
    pub rejected: usize,
}

/// Parse every line of `content`, calling `on_record` for valid records and
/// `on_diagnostic` for rejected ones, in line order.
pub fn parse_records(
    content: &str,
    mut on_record: impl FnMut(Record),
    mut on_diagnostic: impl FnMut(Diagnostic),
) -> ParseStats {
    let mut stats = ParseStats::default();

    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        stats.lines += 1;

        match parse_line(line, idx + 1) {
            Ok(Some(record)) => {
                stats.records += 1;
                on_record(record);
            }
            Ok(None) => {
                stats.skipped += 1;
                tracing::debug!(line = idx + 1, "skipping line that is not a record");
            }
            Err(diagnostic) => {
                stats.rejected += 1;
                on_diagnostic(diagnostic);
            }
        }
    }

    stats
}

/// Read a data file fully into memory.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file: {}", path.display()))
}
