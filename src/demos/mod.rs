//! Record-keeping demos built on the repositories
//!
//! Each demo owns its repositories, seeds them, and prints the outcome of its
//! operations. Failures raised by the repositories are either printed and
//! skipped (warehouse) or propagated to the runner.

pub mod finance;
pub mod grading;
pub mod health;
pub mod inventory_log;
pub mod warehouse;

pub use finance::{FinanceApp, SavingsAccount, TransactionProcessor};
pub use grading::{GradingError, StudentResultProcessor};
pub use health::HealthSystemApp;
pub use inventory_log::{InventoryApp, InventoryLogError, InventoryLogger};
pub use warehouse::WarehouseManager;
