//! Configuration for the demo runner.

use std::path::PathBuf;

/// Environment variable overriding [`AppConfig::data_dir`]
pub const DATA_DIR_ENV: &str = "RECORD_STORE_DATA_DIR";

/// Environment variable overriding [`AppConfig::log_filter`]
pub const LOG_FILTER_ENV: &str = "RECORD_STORE_LOG";

/// Configuration for the demo runner
///
/// The repositories take no configuration; this only locates the files read
/// and written by the grading and inventory-log demos.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the demo input and output files
    pub data_dir: PathBuf,
    /// Student results consumed by the grading demo
    pub students_file: String,
    /// Grade report written by the grading demo
    pub report_file: String,
    /// JSON file written and read back by the inventory-log demo
    pub inventory_file: String,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            students_file: "students.txt".to_string(),
            report_file: "report.txt".to_string(),
            inventory_file: "inventory.json".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `RECORD_STORE_DATA_DIR` and `RECORD_STORE_LOG`
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(LOG_FILTER_ENV).ok(),
        )
    }

    /// Apply optional overrides, ignoring empty values
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<String>, log_filter: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(filter) = log_filter.filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }

    #[must_use]
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join(&self.report_file)
    }

    #[must_use]
    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }
}
