use crate::config::types::{Config, FetchConfig};
use crate::{ConfigError, ConfigResult};

/// Upper bound on the worker pool size
pub const MAX_WORKER_COUNT: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_worker_count(config.worker_count)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates the worker pool size
fn validate_worker_count(worker_count: usize) -> Result<(), ConfigError> {
    if worker_count < 1 || worker_count > MAX_WORKER_COUNT {
        return Err(ConfigError::Validation(format!(
            "worker_count must be between 1 and {}, got {}",
            MAX_WORKER_COUNT, worker_count
        )));
    }

    Ok(())
}

/// Validates HTTP fetcher configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.connect_timeout.is_zero() {
        return Err(ConfigError::Validation(
            "connect_timeout must be greater than zero".to_string(),
        ));
    }

    if config.request_timeout.is_zero() {
        return Err(ConfigError::Validation(
            "request_timeout must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
