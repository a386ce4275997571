//! Score aggregates.
//!
//! The aggregate of a score list is its arithmetic mean. Filters work on the
//! exam grade derived from it, on the 2.00 to 6.00 scale: `2 + 4 * mean / 100`.

use serde::Serialize;

use crate::model::{Catalog, MAX_SCORE_ON_EXAM_TASK};

/// Arithmetic mean of a score list; 0.0 for an empty list.
pub fn mean(scores: &[u32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    sum as f64 / scores.len() as f64
}

/// Exam grade for a score list.
pub fn grade(scores: &[u32]) -> f64 {
    let fulfilment = mean(scores) / f64::from(MAX_SCORE_ON_EXAM_TASK);
    2.0 + fulfilment * 4.0
}

/// Per-course aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course: String,
    pub students: usize,
    /// Mean of the students' mean scores; `None` for an empty course.
    pub mean_score: Option<f64>,
    pub best_student: Option<String>,
}

/// One summary row per course, in the order courses were first seen.
pub fn summarize(catalog: &Catalog) -> Vec<CourseSummary> {
    catalog
        .courses()
        .iter()
        .map(|course| {
            let roster = catalog.roster(course.id);
            let means: Vec<f64> = roster.iter().map(|m| mean(m.scores)).collect();
            let mean_score = if means.is_empty() {
                None
            } else {
                Some(means.iter().sum::<f64>() / means.len() as f64)
            };
            // First student wins ties.
            let best_student = roster
                .iter()
                .zip(&means)
                .fold(None::<(&str, f64)>, |best, (m, &avg)| match best {
                    Some((_, b)) if b >= avg => best,
                    _ => Some((m.name, avg)),
                })
                .map(|(name, _)| name.to_string());
            CourseSummary {
                course: course.name.clone(),
                students: roster.len(),
                mean_score,
                best_student,
            }
        })
        .collect()
}
