//! Student orderings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Diagnostic;
use crate::model::StudentMarks;
use crate::query::Take;
use crate::statistics::mean;

/// A named comparator over a course's students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOrder {
    /// Lowest mean score first.
    Ascending,
    /// Highest mean score first.
    Descending,
    /// By student name.
    Alphabetical,
}

impl StudentOrder {
    pub fn compare(self, a: &StudentMarks<'_>, b: &StudentMarks<'_>) -> Ordering {
        match self {
            StudentOrder::Ascending => mean(a.scores).total_cmp(&mean(b.scores)),
            StudentOrder::Descending => mean(b.scores).total_cmp(&mean(a.scores)),
            StudentOrder::Alphabetical => a.name.cmp(b.name),
        }
    }
}

impl fmt::Display for StudentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentOrder::Ascending => write!(f, "ascending"),
            StudentOrder::Descending => write!(f, "descending"),
            StudentOrder::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl FromStr for StudentOrder {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" => Ok(StudentOrder::Ascending),
            "descending" => Ok(StudentOrder::Descending),
            "alphabetical" => Ok(StudentOrder::Alphabetical),
            _ => Err(Diagnostic::UnknownOrder(s.to_string())),
        }
    }
}

/// The first `take` students after a stable sort by `order`.
///
/// Students that compare equal keep their roster order.
pub fn sort_students<'a>(
    students: &[StudentMarks<'a>],
    order: StudentOrder,
    take: Take,
) -> Vec<StudentMarks<'a>> {
    let mut sorted = students.to_vec();
    sorted.sort_by(|a, b| order.compare(a, b));
    take.apply(sorted.into_iter()).collect()
}
