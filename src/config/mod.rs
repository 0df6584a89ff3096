//! Configuration module for Title-Scout
//!
//! The pipeline takes its whole configuration through [`Config`], which is
//! handed to the orchestrator at construction. [`Config::default`] carries the
//! built-in URL list, worker count and deadline used by the binary.
//!
//! # Example
//!
//! ```
//! use title_scout::config::{validate, Config};
//!
//! let config = Config::default();
//! validate(&config).unwrap();
//! assert_eq!(config.worker_count, 3);
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, DEFAULT_DEADLINE, DEFAULT_URLS, DEFAULT_WORKER_COUNT};

pub use validation::{validate, MAX_WORKER_COUNT};
