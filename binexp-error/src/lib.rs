//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! An error kind describes itself through [`ErrorKind::message`], [`ErrorKind::labels`], and
//! [`ErrorKind::help`]; the provided [`ErrorKind::build_report`] assembles those pieces into an
//! [`ariadne`] report, attaching the `i`-th label to the `i`-th span of the error.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as a [`std::any::Any`] reference, allowing callers to downcast it
    /// to the concrete kind.
    fn as_any(&self) -> &dyn std::any::Any;

    /// The message displayed at the top of the report.
    fn message(&self) -> String;

    /// The text of the labels pointing at the spans of the error, one label per span. An empty
    /// string produces a label with no message.
    fn labels(&self) -> Vec<String>;

    /// Optional help text describing what the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(
                self.labels()
                    .into_iter()
                    .zip(spans.iter())
                    .map(|(label_str, span)| {
                        let mut label = Label::new((src_id, span.clone()))
                            .with_color(EXPR);

                        if !label_str.is_empty() {
                            label = label.with_message(label_str);
                        }

                        label
                    })
                    .collect::<Vec<_>>(),
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
