//! Student filters.
//!
//! Each filter selects students by the grade band their scores fall in.
//! The three bands partition every possible score list.

use std::fmt;
use std::str::FromStr;

use crate::error::Diagnostic;
use crate::model::StudentMarks;
use crate::query::Take;
use crate::statistics::grade;

/// A named selection rule over a student's grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentFilter {
    /// Grade of 5.00 or above.
    Excellent,
    /// Grade from 3.50 up to, but not including, 5.00.
    Average,
    /// Grade below 3.50.
    Poor,
}

impl StudentFilter {
    pub fn matches(self, scores: &[u32]) -> bool {
        let g = grade(scores);
        match self {
            StudentFilter::Excellent => g >= 5.0,
            StudentFilter::Average => (3.5..5.0).contains(&g),
            StudentFilter::Poor => g < 3.5,
        }
    }
}

impl fmt::Display for StudentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentFilter::Excellent => write!(f, "excellent"),
            StudentFilter::Average => write!(f, "average"),
            StudentFilter::Poor => write!(f, "poor"),
        }
    }
}

impl FromStr for StudentFilter {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(StudentFilter::Excellent),
            "average" => Ok(StudentFilter::Average),
            "poor" => Ok(StudentFilter::Poor),
            _ => Err(Diagnostic::UnknownFilter(s.to_string())),
        }
    }
}

/// Students matching `filter`, in roster order, limited by `take`.
pub fn filter_students<'a>(
    students: &[StudentMarks<'a>],
    filter: StudentFilter,
    take: Take,
) -> Vec<StudentMarks<'a>> {
    take.apply(students.iter().filter(|m| filter.matches(m.scores)))
        .copied()
        .collect()
}
