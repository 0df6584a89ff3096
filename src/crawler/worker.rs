//! Pool worker
//!
//! A worker loops claiming jobs from the shared [`JobSource`], fetching each
//! URL, extracting its title and pushing exactly one [`PageResult`] per
//! claimed job. Per-job failures become results; only cancellation, an
//! exhausted source, or a closed result stream end the loop.

use crate::crawler::fetcher::{Fetcher, TransportError};
use crate::crawler::parser::{extract_title, ExtractError};
use crate::crawler::scheduler::JobSource;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Why a single URL produced no title
#[derive(Debug, Error)]
pub enum PageError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("status: {code}")]
    Status { code: u16 },

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),
}

/// Outcome of processing one job
#[derive(Debug)]
pub struct PageResult {
    /// The URL that was processed
    pub url: String,

    /// The page title, or why there is none
    pub outcome: Result<String, PageError>,
}

impl PageResult {
    /// The title, or an empty string when processing failed
    pub fn title(&self) -> &str {
        self.outcome.as_deref().unwrap_or("")
    }

    pub fn error(&self) -> Option<&PageError> {
        self.outcome.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// How a worker's loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// The job source closed with nothing pending
    Exhausted,
    /// The run was cancelled while waiting for or processing a job
    Cancelled,
    /// Nobody is reading results any more
    SinkClosed,
}

/// What a worker hands back when it terminates
#[derive(Debug, Clone, Copy)]
pub struct WorkerReport {
    pub id: usize,
    /// Results successfully pushed to the stream
    pub processed: usize,
    pub exit: WorkerExit,
}

/// One member of the worker pool
pub struct Worker {
    id: usize,
    jobs: JobSource,
    fetcher: Arc<dyn Fetcher>,
    results: mpsc::Sender<PageResult>,
    cancel: CancellationToken,
}

impl Worker {
    pub fn new(
        id: usize,
        jobs: JobSource,
        fetcher: Arc<dyn Fetcher>,
        results: mpsc::Sender<PageResult>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            id,
            jobs,
            fetcher,
            results,
            cancel,
        }
    }

    /// Runs the claim/process/emit loop until the worker terminates
    ///
    /// Cancellation is checked before every claim and raced against every
    /// fetch. A job whose fetch is still in flight when the token fires is
    /// dropped without a result.
    pub async fn run(self) -> WorkerReport {
        tracing::debug!(worker = self.id, "Worker started");
        let mut processed = 0;

        let exit = loop {
            let url = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break WorkerExit::Cancelled,
                job = self.jobs.next() => match job {
                    Some(url) => url,
                    None => break WorkerExit::Exhausted,
                },
            };

            tracing::debug!(worker = self.id, url = %url, "Claimed job");

            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    tracing::debug!(worker = self.id, url = %url, "Cancelled mid-flight, discarding job");
                    break WorkerExit::Cancelled;
                }
                result = process_job(self.fetcher.as_ref(), &url) => result,
            };

            if let Some(e) = result.error() {
                tracing::debug!(worker = self.id, url = %result.url, error = %e, "Job failed");
            }

            if self.results.send(result).await.is_err() {
                tracing::warn!(worker = self.id, "Result stream closed, stopping worker");
                break WorkerExit::SinkClosed;
            }
            processed += 1;
        };

        tracing::debug!(worker = self.id, processed, ?exit, "Worker finished");

        WorkerReport {
            id: self.id,
            processed,
            exit,
        }
    }
}

/// Fetches one URL and extracts its title
///
/// Never fails: every error is folded into the returned result.
pub async fn process_job(fetcher: &dyn Fetcher, url: &str) -> PageResult {
    let outcome = fetch_title(fetcher, url).await;
    PageResult {
        url: url.to_string(),
        outcome,
    }
}

async fn fetch_title(fetcher: &dyn Fetcher, url: &str) -> Result<String, PageError> {
    let response = fetcher.fetch(url).await?;

    if !response.status_ok() {
        return Err(PageError::Status {
            code: response.status,
        });
    }

    // The body is moved into the extractor and released when it returns
    Ok(extract_title(response.body).await?)
}
