//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::fmt::Display;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - What the operation acts on (a path, a repository name)
pub fn log_operation_start(operation: &str, target: impl Display) {
    log::info!("{operation} {target}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation, in past tense
/// * `target` - What the operation acted on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: impl Display,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items for {target} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items for {target}");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `cause` - Optional error or detail related to the warning
pub fn log_warning(message: &str, cause: Option<&dyn Display>) {
    if let Some(cause) = cause {
        log::warn!("{message}: {cause}");
    } else {
        log::warn!("{message}");
    }
}
