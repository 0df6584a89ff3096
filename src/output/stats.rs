//! Run statistics
//!
//! Counts results by outcome while the orchestrator drains the stream, then
//! picks up the pool's termination tally once the barrier has closed it.

use crate::crawler::{PageError, PageResult};
use std::fmt;
use std::time::Duration;

/// Summary of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Results received from the stream
    pub total_results: u64,

    /// Results carrying a title
    pub succeeded: u64,

    pub transport_errors: u64,
    pub status_errors: u64,
    pub extraction_errors: u64,

    /// Jobs the source handed off before closing
    pub jobs_emitted: u64,

    /// Configured pool size
    pub workers_expected: u64,

    /// Workers that signalled the barrier
    pub workers_finished: u64,

    /// Workers whose task panicked
    pub workers_panicked: u64,

    /// Whether the run was cancelled, by deadline or explicitly
    pub cancelled: bool,

    /// Wall-clock time from start to stream close
    pub elapsed: Duration,
}

impl RunSummary {
    /// Counts one result
    pub fn record(&mut self, result: &PageResult) {
        self.total_results += 1;
        match result.error() {
            None => self.succeeded += 1,
            Some(PageError::Transport(_)) => self.transport_errors += 1,
            Some(PageError::Status { .. }) => self.status_errors += 1,
            Some(PageError::Extraction(_)) => self.extraction_errors += 1,
        }
    }

    pub fn failed(&self) -> u64 {
        self.transport_errors + self.status_errors + self.extraction_errors
    }

    /// Jobs claimed by a worker that never produced a result
    pub fn abandoned(&self) -> u64 {
        self.jobs_emitted.saturating_sub(self.total_results)
    }

    /// Calculates the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_results == 0 {
            0.0
        } else {
            (self.succeeded as f64 / self.total_results as f64) * 100.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} results ({} ok, {} transport, {} status, {} extraction) from {}/{} workers in {:.2?}",
            self.total_results,
            self.succeeded,
            self.transport_errors,
            self.status_errors,
            self.extraction_errors,
            self.workers_finished,
            self.workers_expected,
            self.elapsed
        )?;
        if self.cancelled {
            write!(f, ", cancelled with {} jobs abandoned", self.abandoned())?;
        }
        Ok(())
    }
}
