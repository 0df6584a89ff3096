//! Line-oriented console report
//!
//! Every result becomes a `URL:` / `Title:` pair on the report stream. Failures
//! additionally get a diagnostic line on a separate stream, so the report can
//! be piped while errors stay visible.

use crate::crawler::PageResult;
use crate::output::stats::RunSummary;
use crate::output::traits::Reporter;
use std::io::{self, Stderr, Stdout, Write};

/// Writes results to a report writer and failures to a diagnostic writer
pub struct ConsoleReporter<W: Write, E: Write> {
    out: W,
    diag: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Reports to stdout with diagnostics on stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ConsoleReporter<W, E> {
    pub fn new(out: W, diag: E) -> Self {
        Self { out, diag }
    }

    /// Returns the report and diagnostic writers
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.diag)
    }
}

impl<W: Write, E: Write> Reporter for ConsoleReporter<W, E> {
    fn report(&mut self, result: PageResult) -> io::Result<()> {
        writeln!(self.out, "URL: {}", result.url)?;
        writeln!(self.out, "Title: {}", result.title())?;
        self.out.flush()?;

        if let Some(e) = result.error() {
            writeln!(self.diag, "{}: {}", result.url, e)?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.diag, "Done: {}", summary)?;
        self.diag.flush()
    }
}
