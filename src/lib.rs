//! Title-Scout: a bounded concurrent page-title fetcher
//!
//! This crate fetches a fixed list of URLs with a small pool of workers,
//! extracts each page's `<title>`, and reports one result per claimed URL
//! before an overall deadline expires.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Title-Scout operations
///
/// Per-URL failures never surface here; they travel inside a
/// [`crawler::PageResult`] instead.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Title-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Orchestrator, PageError, PageResult};
pub use output::{ConsoleReporter, Reporter, RunSummary};
