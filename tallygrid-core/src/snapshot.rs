//! Snapshot codec and the storage seam
//!
//! The roster persists as a JSON array of `{name, scores}` objects under one
//! fixed key in an opaque string key-value store. Platform-specific
//! implementations provide the store (the browser build backs it with
//! localStorage); [`MemoryStore`] backs native tests.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::roster::Roster;

/// Fixed key the roster snapshot lives under.
pub const STORAGE_KEY: &str = "players";

/// Failure inside the backing key-value store (unavailable, over quota).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage backend failure: {0}")]
pub struct StoreError(pub String);

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("snapshot is not a valid roster: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Opaque string key-value store the roster snapshot persists into.
pub trait SnapshotStore {
    /// Writes `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Reads the value under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// Serializes the roster to its snapshot text.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialization fails.
pub fn encode(roster: &Roster) -> Result<String, SnapshotError> {
    serde_json::to_string(roster).map_err(SnapshotError::Encode)
}

/// Parses snapshot text back into a roster.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] when the text is not a valid roster;
/// callers keep their current roster in that case.
pub fn decode(text: &str) -> Result<Roster, SnapshotError> {
    serde_json::from_str(text).map_err(SnapshotError::Decode)
}

/// Writes the roster snapshot under [`STORAGE_KEY`], overwriting any prior
/// value. Lock state is never part of the snapshot.
///
/// # Errors
///
/// Returns an error when encoding fails or the store refuses the write; the
/// persisted value is unchanged in that case.
pub fn save_roster(store: &impl SnapshotStore, roster: &Roster) -> Result<(), SnapshotError> {
    let text = encode(roster)?;
    store.set(STORAGE_KEY, &text)?;
    Ok(())
}

/// Reads the roster snapshot from [`STORAGE_KEY`].
///
/// An absent key is `Ok(None)`: the caller keeps its current roster. A
/// present but malformed value is an error, and the caller keeps its
/// current roster then too.
///
/// # Errors
///
/// Returns an error when the store cannot be read or the stored text does
/// not decode as a roster.
pub fn load_roster(store: &impl SnapshotStore) -> Result<Option<Roster>, SnapshotError> {
    match store.get(STORAGE_KEY)? {
        Some(text) => decode(&text).map(Some),
        None => Ok(None),
    }
}

/// In-memory [`SnapshotStore`] for native tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl SnapshotStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cells.borrow().get(key).cloned())
    }
}
