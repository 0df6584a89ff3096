//! Job source feeding the worker pool
//!
//! This module handles:
//! - Emitting the configured URLs in input order
//! - Closing the sequence after the last URL has been taken
//! - Handing each URL to exactly one worker (competing consumers)
//! - Abandoning emission once the run is cancelled

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A single URL to process
pub type Job = String;

/// Shared, finite sequence of jobs
///
/// Cloning yields another handle onto the same sequence; every job is
/// delivered to exactly one caller of [`JobSource::next`].
#[derive(Debug, Clone)]
pub struct JobSource {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
}

impl JobSource {
    /// Starts emitting `urls` on a background task
    ///
    /// The channel has room for a single job, so the producer only runs one
    /// job ahead of the workers. When `cancel` fires the producer stops and
    /// drops its sender, which closes the sequence.
    ///
    /// # Returns
    ///
    /// The source plus the producer's handle, which resolves to the number of
    /// jobs handed off
    pub fn spawn(urls: Vec<String>, cancel: CancellationToken) -> (Self, JoinHandle<usize>) {
        let (tx, rx) = mpsc::channel(1);

        let producer = tokio::spawn(async move {
            let mut emitted = 0;
            for url in urls {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        tracing::debug!("Job source cancelled after {} jobs", emitted);
                        break;
                    }
                    sent = tx.send(url) => {
                        if sent.is_err() {
                            // Every consumer is gone
                            break;
                        }
                        emitted += 1;
                    }
                }
            }
            emitted
        });

        let source = Self {
            rx: Arc::new(Mutex::new(rx)),
        };
        (source, producer)
    }

    /// Claims the next job
    ///
    /// # Returns
    ///
    /// * `Some(job)` - A job claimed by this caller alone
    /// * `None` - The sequence is closed and drained
    pub async fn next(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }
}
