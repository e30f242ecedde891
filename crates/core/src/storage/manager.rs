use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, error, warn};

use crate::constants::STORAGE_KEY;
use crate::errors::CoreError;
use crate::models::goal::default_target_date_from;
use crate::models::store::FinanceStore;

const GOAL_DATE_KEY: &str = "metaDate";

/// High-level storage operations: save/load the store to/from a JSON blob
/// or a file on disk.
///
/// The blob keeps the layout the app has always written
/// (`entradas`, `gastos`, `contas`, `rendaMensal`, `metaAtual`, `streak`,
/// `metaGoal`, `metaDate`), so round-trips are loss-free and old data loads.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the store to a JSON string.
    pub fn save_to_string(store: &FinanceStore) -> Result<String, CoreError> {
        serde_json::to_string(store)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize store: {e}")))
    }

    /// Parse a store from a JSON string.
    ///
    /// Missing lists default to empty, a missing deadline to one year from
    /// `today`, and null amounts to zero.
    pub fn load_from_str(data: &str, today: NaiveDate) -> Result<FinanceStore, CoreError> {
        let mut blob: serde_json::Value = serde_json::from_str(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize store: {e}")))?;

        if let Some(fields) = blob.as_object_mut() {
            let has_deadline = fields.get(GOAL_DATE_KEY).is_some_and(|v| !v.is_null());
            if !has_deadline {
                let deadline = default_target_date_from(today);
                debug!("Store has no goal deadline, defaulting to {deadline}");
                fields.insert(
                    GOAL_DATE_KEY.to_string(),
                    serde_json::Value::String(deadline.to_string()),
                );
            }
        }

        serde_json::from_value(blob)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize store: {e}")))
    }

    /// `<dir>/financeApp_data.json`
    pub fn default_path(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{STORAGE_KEY}.json"))
    }

    /// Save the store to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(store: &FinanceStore, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let json = Self::save_to_string(store)?;
        std::fs::write(path, json)?;
        debug!("Saved {} records to {}", store.record_count(), path.display());
        Ok(())
    }

    /// Load the store from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<Path>, today: NaiveDate) -> Result<FinanceStore, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::load_from_str(&json, today)?;
        debug!("Loaded {} records from {}", store.record_count(), path.display());
        Ok(store)
    }

    /// Load the store, or start from an empty one if the file is missing or
    /// unreadable. Never fails: losing a corrupt file is preferable to
    /// blocking the app.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: impl AsRef<Path>, today: NaiveDate) -> FinanceStore {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No store at {}, starting empty", path.display());
            return FinanceStore::new(today);
        }
        match Self::load_from_file(path, today) {
            Ok(store) => store,
            Err(e) => {
                warn!("Could not read store at {}: {e}. Starting empty", path.display());
                FinanceStore::new(today)
            }
        }
    }

    /// Save without propagating errors. Returns `false` when the changes
    /// could not be written.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_best_effort(store: &FinanceStore, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match Self::save_to_file(store, path) {
            Ok(()) => true,
            Err(e) => {
                error!("Changes not saved to {}: {e}", path.display());
                false
            }
        }
    }
}
