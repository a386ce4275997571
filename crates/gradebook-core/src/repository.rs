//! The students repository.
//!
//! Owns at most one data session and answers course queries against it.
//! Query preconditions are checked in a fixed order: session, course, then
//! student. A failed check reports a [`Diagnostic`] to the injected sink and
//! the query yields `None`. Only a fatal I/O failure on the data file is
//! returned as an error.

use std::path::Path;

use anyhow::Result;

use crate::diagnostics::DiagnosticSink;
use crate::error::Diagnostic;
use crate::filter::{filter_students, StudentFilter};
use crate::model::{Catalog, Course, CourseRoster, Enrollment, StudentId, StudentMarks};
use crate::parser::{self, ParseStats};
use crate::query::Take;
use crate::sorter::{sort_students, StudentOrder};
use crate::statistics::{self, CourseSummary};

/// Summary of a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub stats: ParseStats,
    /// Distinct students in the session.
    pub students: usize,
    /// Distinct courses in the session.
    pub courses: usize,
}

/// In-memory store of students and courses, loaded from a data file.
pub struct StudentsRepository<S: DiagnosticSink> {
    sink: S,
    session: Option<Catalog>,
}

impl<S: DiagnosticSink> StudentsRepository<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            session: None,
        }
    }

    /// The sink diagnostics are reported to.
    pub fn diagnostics(&self) -> &S {
        &self.sink
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// The active session's data, if any.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.session.as_ref()
    }

    /// Load a data file and start a session.
    ///
    /// Returns `Ok(None)` without touching the file if a session is already
    /// active. Fails only if the file cannot be read.
    pub fn load_data(&mut self, path: &Path) -> Result<Option<LoadReport>> {
        if self.is_initialized() {
            self.sink.report(&Diagnostic::DataAlreadyInitialized);
            return Ok(None);
        }
        let content = parser::read_source(path)?;
        tracing::info!(path = %path.display(), "loading data");
        Ok(self.load_str(&content))
    }

    /// Same as [`load_data`](Self::load_data), for data already in memory.
    pub fn load_str(&mut self, content: &str) -> Option<LoadReport> {
        if self.is_initialized() {
            self.sink.report(&Diagnostic::DataAlreadyInitialized);
            return None;
        }

        let sink = &self.sink;
        let mut catalog = Catalog::new();
        let stats = parser::parse_records(
            content,
            |record| {
                let student = catalog.student_or_insert(&record.student);
                let course = catalog.course_or_insert(&record.course);
                if catalog.enroll(student, course, record.scores) == Enrollment::Existing {
                    sink.report(&Diagnostic::StudentAlreadyEnrolled {
                        student: record.student,
                        course: record.course,
                    });
                }
            },
            |diagnostic| sink.report(&diagnostic),
        );

        let report = LoadReport {
            stats,
            students: catalog.students().len(),
            courses: catalog.courses().len(),
        };
        tracing::info!(
            records = stats.records,
            skipped = stats.skipped,
            rejected = stats.rejected,
            students = report.students,
            courses = report.courses,
            "data session started"
        );

        self.session = Some(catalog);
        self.sink.message("Data read.");
        Some(report)
    }

    /// End the session. Returns `false` if there was none.
    pub fn unload_data(&mut self) -> bool {
        if self.session.take().is_none() {
            self.sink.report(&Diagnostic::DataNotInitialized);
            return false;
        }
        tracing::info!("data session ended");
        true
    }

    /// Students of `course` matching the named filter.
    pub fn filtered_students(
        &self,
        course: &str,
        filter: &str,
        take: Take,
    ) -> Option<Vec<StudentMarks<'_>>> {
        self.reported(self.course_query(course).and_then(|(catalog, course)| {
            let filter: StudentFilter = filter.parse()?;
            Ok(filter_students(&catalog.roster(course.id), filter, take))
        }))
    }

    /// Students of `course` sorted by the named order.
    pub fn ordered_students(
        &self,
        course: &str,
        order: &str,
        take: Take,
    ) -> Option<Vec<StudentMarks<'_>>> {
        self.reported(self.course_query(course).and_then(|(catalog, course)| {
            let order: StudentOrder = order.parse()?;
            Ok(sort_students(&catalog.roster(course.id), order, take))
        }))
    }

    /// One student's scores in one course.
    pub fn student_marks_in_course(&self, course: &str, student: &str) -> Option<StudentMarks<'_>> {
        self.reported(
            self.student_query(course, student)
                .map(|(catalog, course, student)| {
                    let student = catalog.student(student);
                    StudentMarks {
                        name: &student.name,
                        scores: student.marks_in(course.id).unwrap_or_default(),
                    }
                }),
        )
    }

    /// Every student of `course` with their scores.
    pub fn students_by_course(&self, course: &str) -> Option<CourseRoster<'_>> {
        self.reported(
            self.course_query(course)
                .map(|(catalog, course)| CourseRoster {
                    course: &course.name,
                    students: catalog.roster(course.id),
                }),
        )
    }

    /// Course names in the order they were first seen.
    pub fn course_names(&self) -> Option<Vec<&str>> {
        self.reported(self.session().map(|catalog| {
            catalog
                .courses()
                .iter()
                .map(|c| c.name.as_str())
                .collect()
        }))
    }

    /// Per-course aggregate rows.
    pub fn summary(&self) -> Option<Vec<CourseSummary>> {
        self.reported(self.session().map(statistics::summarize))
    }

    fn session(&self) -> Result<&Catalog, Diagnostic> {
        self.session.as_ref().ok_or(Diagnostic::DataNotInitialized)
    }

    fn course_query(&self, course: &str) -> Result<(&Catalog, &Course), Diagnostic> {
        let catalog = self.session()?;
        let course = catalog
            .course_by_name(course)
            .ok_or_else(|| Diagnostic::NonExistingCourse(course.to_string()))?;
        Ok((catalog, course))
    }

    fn student_query(
        &self,
        course: &str,
        student: &str,
    ) -> Result<(&Catalog, &Course, StudentId), Diagnostic> {
        let (catalog, course) = self.course_query(course)?;
        let student = course
            .student_named(student)
            .ok_or_else(|| Diagnostic::NonExistingStudent(student.to_string()))?;
        Ok((catalog, course, student))
    }

    fn reported<T>(&self, result: Result<T, Diagnostic>) -> Option<T> {
        result.map_err(|d| self.sink.report(&d)).ok()
    }
}
