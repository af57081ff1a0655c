// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the parkband wristband system.
//!
//! The entire ledger is persisted as a single JSON document holding the four
//! collections (`bands`, `transactions`, `activityLogs`, `reports`). The
//! store reads the document wholesale at startup and rewrites it wholesale
//! after every committed mutation. There are no partial writes and no schema
//! versioning.
//!
//! ## Stores
//!
//! - [`JsonFileStore`]: file-backed, the standard deployment store
//! - [`MemoryStore`]: in-memory, for tests and ephemeral sessions
//!
//! A store with no prior document loads as an empty ledger, so first-run
//! setup needs no initialization step.
//!
//! ## Durability
//!
//! Durability is whatever the backing filesystem provides. A failed save
//! leaves the previously committed in-memory ledger untouched; retrying is
//! the caller's decision.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use parkband_core::Ledger;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod error;

#[cfg(test)]
mod tests;

pub use error::StoreError;

/// Storage handle for the ledger document.
///
/// Implementations hand back the full ledger on load and replace the full
/// document on save. Callers keep the authoritative copy in memory and save
/// after every mutation.
pub trait LedgerStore {
    /// Loads the persisted ledger.
    ///
    /// A store holding no prior document yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or deserialized.
    fn load(&self) -> Result<Ledger, StoreError>;

    /// Persists the full ledger, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError>;
}

/// File-backed store holding the ledger as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first load or save. The parent
    /// directory must already exist.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        info!("Initializing ledger store at: {}", path.display());
        Self { path }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Ledger, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "No ledger file at: {}, starting with an empty ledger",
                    self.path.display()
                );
                return Ok(Ledger::new());
            }
            Err(err) => return Err(err.into()),
        };

        let ledger: Ledger = serde_json::from_str(&contents)?;
        debug!(
            bands = ledger.bands.len(),
            transactions = ledger.transactions.len(),
            activity_logs = ledger.activity_logs.len(),
            reports = ledger.reports.len(),
            "Loaded ledger from: {}",
            self.path.display()
        );
        Ok(ledger)
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(ledger)?;
        fs::write(&self.path, contents)?;
        debug!(
            bands = ledger.bands.len(),
            "Saved ledger to: {}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// Holds the last saved ledger directly; nothing survives the process.
#[derive(Debug)]
pub struct MemoryStore {
    ledger: Option<Ledger>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self { ledger: None }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Ledger, StoreError> {
        Ok(self.ledger.clone().unwrap_or_default())
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        self.ledger = Some(ledger.clone());
        Ok(())
    }
}
