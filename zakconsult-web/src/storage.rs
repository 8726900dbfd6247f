//! `localStorage` adapter for the preference controller.

use web_sys::Storage;
use zakconsult_core::{KeyValueStore, MemoryStore, StoreError};

use crate::dom::{self, js_error_message};

/// Browser storage, or an in-memory stand-in when storage is blocked
/// (private browsing modes, sandboxed iframes).
pub enum PageStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl PageStore {
    #[must_use]
    pub fn open() -> Self {
        match dom::local_storage() {
            Ok(storage) => Self::Local(storage),
            Err(err) => {
                log::warn!("{err}; accessibility preferences will not survive a reload");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StoreError::Backend(js_error_message(&e))),
            Self::Memory(mem) => mem.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(js_error_message(&e))),
            Self::Memory(mem) => mem.set(key, value),
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| StoreError::Backend(js_error_message(&e))),
            Self::Memory(mem) => mem.delete(key),
        }
    }
}
