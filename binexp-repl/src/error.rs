use ariadne::Source;
use binexp_parser::parser::error::Error as BinexpError;

/// Utility wrapper for errors that can occur while parsing / simplifying.
pub struct Error(BinexpError);

impl Error {
    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = self.0.build_report("input");
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<BinexpError> for Error {
    fn from(err: BinexpError) -> Self {
        Self(err)
    }
}
