//! Diagnostic types.
//!
//! Every recoverable condition the repository can hit is a [`Diagnostic`]:
//! malformed records during a load, and precondition failures on queries.
//! Diagnostics are reported to a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink)
//! rather than returned, so a bad line or a bad query never aborts the session.

use thiserror::Error;

/// A recoverable problem found while loading data or answering a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// `load_data` was called while a session is active.
    #[error("Data is already initialized!")]
    DataAlreadyInitialized,

    /// A query or `unload_data` was issued with no active session.
    #[error("Data is not initialized!")]
    DataNotInitialized,

    /// A record enrolls a student into a course they already belong to.
    #[error("Student {student} is already enrolled in course {course}.")]
    StudentAlreadyEnrolled { student: String, course: String },

    /// A score outside `0..=100`.
    #[error("The number for the score you've entered is not in the range of 0 - 100 at line {line}")]
    InvalidScore { line: usize, score: i32 },

    /// More scores than there are exam tasks.
    #[error("The number of scores for the given course is greater than the possible at line {line}")]
    InvalidNumberOfScores { line: usize, count: usize },

    /// A score token that does not fit an integer.
    #[error("For input string: \"{token}\" at line: {line}")]
    NumberFormat { line: usize, token: String },

    /// The queried course is not part of the session.
    #[error("The course you are trying to get does not exist in the data base!")]
    NonExistingCourse(String),

    /// The queried student is not enrolled in the course.
    #[error("The user name for the student you are trying to get does not exist!")]
    NonExistingStudent(String),

    /// A filter name that maps to no known filter.
    #[error("The given filter is not one of the following: excellent/average/poor: {0}")]
    UnknownFilter(String),

    /// An order name that maps to no known comparator.
    #[error("The comparison query you want, does not exist in the context of the current program: {0}")]
    UnknownOrder(String),

    /// A take count that is neither a non-negative integer nor `all`.
    #[error("The take command expected does not match the format wanted: {0}")]
    InvalidTakeCount(String),

    /// A shell command that could not be interpreted.
    #[error("The command '{0}' is invalid")]
    InvalidCommand(String),
}

impl Diagnostic {
    /// Stable identifier for this kind of diagnostic, independent of context.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::DataAlreadyInitialized => "DATA_ALREADY_INITIALIZED",
            Diagnostic::DataNotInitialized => "DATA_NOT_INITIALIZED",
            Diagnostic::StudentAlreadyEnrolled { .. } => "STUDENT_ALREADY_ENROLLED_IN_GIVEN_COURSE",
            Diagnostic::InvalidScore { .. } => "INVALID_SCORE",
            Diagnostic::InvalidNumberOfScores { .. } => "INVALID_NUMBER_OF_SCORES",
            Diagnostic::NumberFormat { .. } => "NUMBER_FORMAT_ERROR",
            Diagnostic::NonExistingCourse(_) => "NON_EXISTING_COURSE",
            Diagnostic::NonExistingStudent(_) => "NON_EXISTING_STUDENT",
            Diagnostic::UnknownFilter(_) => "INVALID_STUDENTS_FILTER",
            Diagnostic::UnknownOrder(_) => "INVALID_COMPARISON_QUERY",
            Diagnostic::InvalidTakeCount(_) => "INVALID_TAKE_COMMAND",
            Diagnostic::InvalidCommand(_) => "INVALID_COMMAND",
        }
    }

    /// Returns `true` if this diagnostic came from a rejected input record.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Diagnostic::InvalidScore { .. }
                | Diagnostic::InvalidNumberOfScores { .. }
                | Diagnostic::NumberFormat { .. }
        )
    }
}
