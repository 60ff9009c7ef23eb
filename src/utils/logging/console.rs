//! Console output utilities
//!
//! This module provides the human-facing output of the demos.

use std::fmt::Display;
use std::sync::Arc;

/// Print a section banner
pub fn print_section(title: &str) {
    println!("========== {title} ==========\n");
}

/// Print every item on its own indented line, or a placeholder when empty
pub fn print_items<T: Display>(items: &[Arc<T>]) {
    if items.is_empty() {
        println!("  (no items)");
        return;
    }
    for item in items {
        println!("  {item}");
    }
}

/// Print the outcome of a successful operation
pub fn print_success(message: impl Display) {
    println!("✔ {message}");
}

/// Print the outcome of a failed operation
pub fn print_failure(context: &str, error: impl Display) {
    println!("✖ {context}: {error}");
}
