//! Diagnostic sinks.
//!
//! The repository never prints. It hands each [`Diagnostic`] to the sink it
//! was constructed with.

use std::cell::RefCell;

use crate::error::Diagnostic;

/// Receives recoverable diagnostics and informational messages.
pub trait DiagnosticSink {
    /// Called once per diagnostic, in the order they occur.
    fn report(&self, diagnostic: &Diagnostic);

    /// Called for non-error status messages such as "Data read.".
    fn message(&self, _message: &str) {}
}

/// Sink that discards everything.
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _: &Diagnostic) {}
}

/// Sink that forwards diagnostics to `tracing` at warn level.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(code = diagnostic.code(), "{diagnostic}");
    }

    fn message(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Sink that keeps every diagnostic and message for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
    messages: RefCell<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Codes of the collected diagnostics, without draining.
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.borrow().iter().map(Diagnostic::code).collect()
    }

    /// Number of diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Drain the collected status messages.
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }

    fn message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }

    fn message(&self, message: &str) {
        (**self).message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_preserves_order() {
        let sink = CollectingSink::new();
        sink.report(&Diagnostic::DataNotInitialized);
        sink.report(&Diagnostic::NonExistingCourse("Java_Mar_2017".into()));
        sink.message("Data read.");

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.codes(),
            vec!["DATA_NOT_INITIALIZED", "NON_EXISTING_COURSE"]
        );
        assert_eq!(sink.take_messages(), vec!["Data read."]);

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn tracing_and_noop_sinks_accept_everything() {
        for sink in [&TracingSink as &dyn DiagnosticSink, &NoopSink] {
            sink.report(&Diagnostic::InvalidScore { line: 1, score: 101 });
            sink.message("Data read.");
        }
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn report_through<S: DiagnosticSink>(sink: S) {
            sink.report(&Diagnostic::DataAlreadyInitialized);
        }

        let sink = CollectingSink::new();
        report_through(&sink);
        assert_eq!(sink.codes(), vec!["DATA_ALREADY_INITIALIZED"]);
    }
}
