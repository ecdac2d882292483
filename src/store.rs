// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.financeflow", "FinanceFlow", "financeflow"));

/// Slot keys carried over from the original localStorage layout.
pub const TRANSACTIONS_KEY: &str = "financeFlowTransactions";
pub const ACCOUNTS_KEY: &str = "financeFlowAccounts";

/// How a slot load resolved. The caller policy is always "use the default on
/// any non-Stored outcome", but the outcome itself is reported rather than
/// swallowed at the read site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Slot existed and parsed.
    Stored,
    /// Slot file was absent.
    Missing,
    /// Slot existed but did not parse as the expected shape.
    Corrupt,
}

/// Key/value JSON store, one file per slot under a single directory.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens the store in the platform data directory, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        Self::open_at(proj.data_dir().to_path_buf())
    }

    /// Opens the store rooted at an explicit directory. Tests point this at a
    /// temp dir.
    pub fn open_at(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).context("Failed to create data dir")?;
        Ok(Store { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads a slot, falling back to `default` when the slot is missing or
    /// unparseable. Parse failures are logged and never raised.
    pub fn load_slot<T: DeserializeOwned>(&self, key: &str, default: T) -> (T, LoadOutcome) {
        let path = self.slot_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return (default, LoadOutcome::Missing),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => (value, LoadOutcome::Stored),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse stored slot, using defaults");
                (default, LoadOutcome::Corrupt)
            }
        }
    }

    /// Serializes the full value into the slot. Called on every state change;
    /// there are no partial writes and no versioning.
    pub fn save_slot<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.slot_path(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).with_context(|| format!("Write slot at {}", path.display()))?;
        Ok(())
    }
}
