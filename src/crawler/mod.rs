//! Crawler module: the concurrent title-fetch pipeline
//!
//! This module contains the pipeline and its leaf operations:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - Naive `<title>` extraction
//! - The job source and the bounded worker pool
//! - The completion barrier that closes the result stream
//! - The orchestrator that wires them under one deadline

mod barrier;
mod coordinator;
mod fetcher;
mod parser;
mod scheduler;
mod worker;

pub use barrier::{BarrierReport, CompletionBarrier};
pub use coordinator::{run_pipeline, Orchestrator};
pub use fetcher::{
    build_http_client, BodyStream, FetchResponse, Fetcher, HttpFetcher, TransportError,
    TransportErrorKind,
};
pub use parser::{extract_title, find_title, ExtractError};
pub use scheduler::{Job, JobSource};
pub use worker::{process_job, PageError, PageResult, Worker, WorkerExit, WorkerReport};
