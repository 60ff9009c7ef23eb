//! Inventory log demo
//!
//! An append-only record log that is saved to and restored from a JSON file.

use crate::collections::PredicateRepository;
use crate::models::InventoryItem;
use crate::models::traits::EntityModel;
use crate::utils::logging::{log_operation_complete, log_operation_start, print_section};
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Errors raised while persisting an inventory log
#[derive(Debug, thiserror::Error)]
pub enum InventoryLogError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid inventory JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InventoryLogError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A log of records persisted as a JSON array
#[derive(Debug)]
pub struct InventoryLogger<T> {
    log: PredicateRepository<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: EntityModel + Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            log: PredicateRepository::new(),
            file_path: file_path.into(),
        }
    }

    pub fn add(&mut self, item: T) {
        self.log.add(item);
    }

    /// Insertion-ordered snapshot of the log
    #[must_use]
    pub fn get_all(&self) -> Vec<Arc<T>> {
        self.log.get_all()
    }

    /// Write the whole log to the file as pretty-printed JSON
    pub fn save_to_file(&self) -> Result<(), InventoryLogError> {
        let path = self.file_path.as_path();
        log_operation_start("Saving inventory to", path.display());

        let items = self.log.get_all();
        let file = File::create(path).map_err(|e| InventoryLogError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let records: Vec<&T> = items.iter().map(|item| &**item).collect();
        serde_json::to_writer_pretty(&mut writer, &records)
            .map_err(|e| InventoryLogError::json(path, e))?;
        writer.flush().map_err(|e| InventoryLogError::io(path, e))?;

        log_operation_complete("saved", path.display(), items.len(), None);
        Ok(())
    }

    /// Replace the log with the file's contents
    ///
    /// On error the current log is kept.
    pub fn load_from_file(&mut self) -> Result<(), InventoryLogError> {
        let path = self.file_path.as_path();
        log_operation_start("Loading inventory from", path.display());

        let file = File::open(path).map_err(|e| InventoryLogError::io(path, e))?;
        let items: Vec<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| InventoryLogError::json(path, e))?;

        let count = items.len();
        self.log = items.into_iter().collect();

        log_operation_complete("loaded", path.display(), count, None);
        Ok(())
    }
}

/// Seeds, saves and reloads an inventory log
#[derive(Debug)]
pub struct InventoryApp {
    logger: InventoryLogger<InventoryItem>,
}

impl InventoryApp {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            logger: InventoryLogger::new(file_path),
        }
    }

    #[must_use]
    pub fn logger(&self) -> &InventoryLogger<InventoryItem> {
        &self.logger
    }

    pub fn seed_sample_data(&mut self, now: NaiveDateTime) {
        self.logger.add(InventoryItem::new(1, "Laptop", 10, now));
        self.logger.add(InventoryItem::new(2, "Mouse", 25, now));
        self.logger.add(InventoryItem::new(3, "Keyboard", 15, now));
        self.logger.add(InventoryItem::new(4, "Monitor", 8, now));
        self.logger.add(InventoryItem::new(5, "Headphones", 12, now));
    }

    pub fn save_data(&self) -> Result<(), InventoryLogError> {
        self.logger.save_to_file()
    }

    pub fn load_data(&mut self) -> Result<(), InventoryLogError> {
        self.logger.load_from_file()
    }

    pub fn print_all_items(&self) {
        for item in self.logger.get_all() {
            println!("{item}");
        }
    }
}

/// Run the inventory-log demo against `path`
pub fn run(path: &Path, now: NaiveDateTime) -> anyhow::Result<()> {
    print_section("Inventory System");

    let mut app = InventoryApp::new(path);
    app.seed_sample_data(now);
    app.save_data()
        .with_context(|| format!("failed to save inventory to {}", path.display()))?;
    println!("Inventory saved successfully.");

    // A fresh app simulates a restart with empty memory
    let mut app = InventoryApp::new(path);
    app.load_data()
        .with_context(|| format!("failed to load inventory from {}", path.display()))?;
    println!("Inventory loaded successfully.");
    app.print_all_items();
    println!();

    Ok(())
}
