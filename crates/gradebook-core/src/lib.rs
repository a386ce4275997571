//! gradebook-core — exam score parsing, relational model, and course queries.
//!
//! A [`StudentsRepository`] loads a text file of exam records into an
//! in-memory [`Catalog`] of students and courses, then answers per-course
//! queries: listings, single-student lookups, grade-band filters and orderings.
//! Recoverable problems are reported as [`Diagnostic`]s to an injected
//! [`DiagnosticSink`].

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod query;
pub mod repository;
pub mod sorter;
pub mod statistics;

pub use diagnostics::{CollectingSink, DiagnosticSink, NoopSink, TracingSink};
pub use error::Diagnostic;
pub use model::{Catalog, CourseRoster, StudentMarks};
pub use query::Take;
pub use repository::{LoadReport, StudentsRepository};
