//! localStorage-backed snapshot store

use tallygrid_core::{SnapshotStore, StoreError};

use crate::dom;

/// [`SnapshotStore`] over the browser's localStorage.
///
/// Access is synchronous, read-then-replace, with no transactional
/// guarantee and no concurrent-writer protection; a single tab is the sole
/// writer in intended usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SnapshotStore for BrowserStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage =
            dom::local_storage().map_err(|e| StoreError(dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError(dom::js_error_message(&e)))
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage =
            dom::local_storage().map_err(|e| StoreError(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| StoreError(dom::js_error_message(&e)))
    }
}
