//! Pipeline orchestrator
//!
//! This module wires the whole run together:
//! - Arming the deadline on a cancellation token
//! - Starting the job source and the worker pool
//! - Starting the completion barrier
//! - Draining the result stream into a reporter until it closes

use crate::config::{validate, Config};
use crate::crawler::barrier::CompletionBarrier;
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::scheduler::JobSource;
use crate::crawler::worker::Worker;
use crate::output::{Reporter, RunSummary};
use crate::ScoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Runs the fetch pipeline for a fixed configuration
pub struct Orchestrator {
    config: Config,
    fetcher: Arc<dyn Fetcher>,
    cancel: CancellationToken,
}

impl Orchestrator {
    /// Creates an orchestrator that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - Configuration is valid and the client was built
    /// * `Err(ScoutError)` - Invalid configuration or client construction failed
    pub fn new(config: Config) -> Result<Self, ScoutError> {
        validate(&config)?;
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Creates an orchestrator around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Result<Self, ScoutError> {
        validate(&config)?;
        Ok(Self {
            config,
            fetcher,
            cancel: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Token that cancels any current and future run when triggered
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the pipeline once
    ///
    /// Results are handed to `reporter` in arrival order. The run ends when
    /// the result stream closes, which happens after every worker has exited
    /// either by draining the jobs or by observing cancellation.
    pub async fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, ScoutError> {
        let started = Instant::now();
        let worker_count = self.config.worker_count;

        // Per-run token so each run gets a fresh deadline; the guard cancels
        // it on every way out of this function
        let cancel = self.cancel.child_token();
        let _guard = cancel.clone().drop_guard();
        arm_deadline(&cancel, self.config.deadline);

        tracing::info!(
            "Starting run: {} URLs, {} workers, deadline {:?}",
            self.config.urls.len(),
            worker_count,
            self.config.deadline
        );

        let (jobs, producer) = JobSource::spawn(self.config.urls.clone(), cancel.clone());
        let (results_tx, mut results_rx) = mpsc::channel(worker_count);

        let mut workers = JoinSet::new();
        for id in 1..=worker_count {
            let worker = Worker::new(
                id,
                jobs.clone(),
                Arc::clone(&self.fetcher),
                results_tx.clone(),
                cancel.clone(),
            );
            workers.spawn(worker.run());
        }
        drop(jobs);

        let barrier = CompletionBarrier::spawn(workers, worker_count, results_tx);

        let mut summary = RunSummary {
            workers_expected: worker_count as u64,
            ..Default::default()
        };

        while let Some(result) = results_rx.recv().await {
            summary.record(&result);
            reporter.report(result)?;
        }

        let tally = barrier.wait().await?;
        let emitted = producer.await?;

        summary.jobs_emitted = emitted as u64;
        summary.workers_finished = tally.finished as u64;
        summary.workers_panicked = tally.panicked as u64;
        summary.cancelled = cancel.is_cancelled();
        summary.elapsed = started.elapsed();

        tracing::info!("Run finished: {}", summary);
        reporter.finish(&summary)?;

        Ok(summary)
    }
}

/// Cancels `cancel` once `deadline` has elapsed
///
/// A zero deadline cancels immediately, before any worker starts. The timer
/// task exits as soon as the token is cancelled by any other path.
fn arm_deadline(cancel: &CancellationToken, deadline: Duration) {
    if deadline.is_zero() {
        tracing::info!("Deadline is zero, run starts cancelled");
        cancel.cancel();
        return;
    }

    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(deadline) => {
                tracing::info!("Deadline of {:?} elapsed, cancelling run", deadline);
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    });
}

/// Runs the pipeline over HTTP with `config`
///
/// # Example
///
/// ```no_run
/// use title_scout::config::Config;
/// use title_scout::crawler::run_pipeline;
/// use title_scout::output::ConsoleReporter;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut reporter = ConsoleReporter::stdio();
/// let summary = run_pipeline(Config::default(), &mut reporter).await?;
/// println!("{} titles", summary.succeeded);
/// # Ok(())
/// # }
/// ```
pub async fn run_pipeline(
    config: Config,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, ScoutError> {
    Orchestrator::new(config)?.run(reporter).await
}
