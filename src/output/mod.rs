//! Output module for presenting pipeline results
//!
//! This module handles:
//! - The [`Reporter`] seam the orchestrator pushes results into
//! - The line-oriented console report
//! - Run statistics

mod console;
pub mod stats;
mod traits;

pub use console::ConsoleReporter;
pub use stats::RunSummary;
pub use traits::{CollectingReporter, Reporter};
