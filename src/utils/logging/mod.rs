//! Logging utilities for output and diagnostics
//!
//! This module provides utilities for structured logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use self::console::{print_failure, print_items, print_section, print_success};
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
