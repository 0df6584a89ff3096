//! Reporter trait
//!
//! The orchestrator hands every result to a [`Reporter`] as it arrives and
//! calls [`Reporter::finish`] once the stream has closed. Presentation policy
//! lives entirely behind this trait.

use crate::crawler::PageResult;
use crate::output::stats::RunSummary;
use std::io;

/// Sink for pipeline results
pub trait Reporter {
    /// Presents one result, in arrival order
    fn report(&mut self, result: PageResult) -> io::Result<()>;

    /// Called once after the last result
    fn finish(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps every result in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub results: Vec<PageResult>,
    pub summary: Option<RunSummary>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, result: PageResult) -> io::Result<()> {
        self.results.push(result);
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
