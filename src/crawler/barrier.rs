//! Completion barrier
//!
//! The barrier owns the last handle on the result stream. Workers hold clones
//! that are dropped when their task ends; the barrier drops its own only after
//! joining every worker, so the stream closes exactly once and never while a
//! worker can still send.

use crate::crawler::worker::{PageResult, WorkerExit, WorkerReport};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};

/// Tally of worker terminations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarrierReport {
    /// Configured pool size
    pub expected: usize,
    /// Workers that terminated, on any path
    pub finished: usize,
    pub exhausted: usize,
    pub cancelled: usize,
    pub sink_closed: usize,
    /// Workers whose task panicked
    pub panicked: usize,
    /// Results pushed across the pool
    pub processed: usize,
}

impl BarrierReport {
    fn record(&mut self, joined: Result<WorkerReport, JoinError>) {
        self.finished += 1;
        match joined {
            Ok(report) => {
                self.processed += report.processed;
                match report.exit {
                    WorkerExit::Exhausted => self.exhausted += 1,
                    WorkerExit::Cancelled => self.cancelled += 1,
                    WorkerExit::SinkClosed => self.sink_closed += 1,
                }
            }
            Err(e) => {
                tracing::error!("Worker task failed: {}", e);
                self.panicked += 1;
            }
        }
    }
}

/// Watches the worker pool and closes the result stream once all have exited
pub struct CompletionBarrier {
    handle: JoinHandle<BarrierReport>,
}

impl CompletionBarrier {
    /// Starts the watcher task
    ///
    /// # Arguments
    ///
    /// * `workers` - The running pool
    /// * `expected` - Configured pool size
    /// * `sink` - The result sender not handed to any worker
    pub fn spawn(
        mut workers: JoinSet<WorkerReport>,
        expected: usize,
        sink: mpsc::Sender<PageResult>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut report = BarrierReport {
                expected,
                ..Default::default()
            };

            while let Some(joined) = workers.join_next().await {
                report.record(joined);
            }

            if report.finished != expected {
                tracing::error!(
                    "Joined {} workers but {} were configured",
                    report.finished,
                    expected
                );
            }

            // Every worker's sender is gone; this drop closes the stream
            drop(sink);
            tracing::debug!("All {} workers finished, result stream closed", report.finished);

            report
        });

        Self { handle }
    }

    /// Waits for the watcher and returns its tally
    pub async fn wait(self) -> Result<BarrierReport, JoinError> {
        self.handle.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report(id: usize, processed: usize, exit: WorkerExit) -> WorkerReport {
        WorkerReport {
            id,
            processed,
            exit,
        }
    }

    fn id_is_odd(id: usize) -> bool {
        id % 2 == 1
    }

    #[tokio::test]
    async fn test_closes_only_after_all_workers_exit() {
        let (tx, mut rx) = mpsc::channel::<PageResult>(4);
        let mut workers = JoinSet::new();

        for id in 1..=3 {
            let tx = tx.clone();
            workers.spawn(async move {
                tokio::time::sleep(Duration::from_millis(20 * id as u64)).await;
                tx.send(PageResult {
                    url: format!("https://w{}.example/", id),
                    outcome: Ok(String::new()),
                })
                .await
                .unwrap();
                report(id, 1, WorkerExit::Exhausted)
            });
        }

        let barrier = CompletionBarrier::spawn(workers, 3, tx);

        let mut received = 0;
        while rx.recv().await.is_some() {
            received += 1;
        }
        assert_eq!(received, 3);

        let tally = barrier.wait().await.unwrap();
        assert_eq!(tally.finished, 3);
        assert_eq!(tally.exhausted, 3);
        assert_eq!(tally.processed, 3);
    }

    #[tokio::test]
    async fn test_panicking_worker_still_counts() {
        let (tx, mut rx) = mpsc::channel::<PageResult>(1);
        let mut workers: JoinSet<WorkerReport> = JoinSet::new();

        {
            let tx = tx.clone();
            workers.spawn(async move {
                let _tx = tx;
                if id_is_odd(1) {
                    panic!("worker blew up");
                }
                report(1, 0, WorkerExit::Exhausted)
            });
        }
        workers.spawn(async { report(2, 0, WorkerExit::Cancelled) });

        let barrier = CompletionBarrier::spawn(workers, 2, tx);
        assert!(rx.recv().await.is_none());

        let tally = barrier.wait().await.unwrap();
        assert_eq!(tally.finished, 2);
        assert_eq!(tally.panicked, 1);
        assert_eq!(tally.cancelled, 1);
    }

    #[tokio::test]
    async fn test_empty_pool_closes_immediately() {
        let (tx, mut rx) = mpsc::channel::<PageResult>(1);
        let barrier = CompletionBarrier::spawn(JoinSet::new(), 0, tx);

        assert!(rx.recv().await.is_none());
        assert_eq!(barrier.wait().await.unwrap().finished, 0);
    }
}
