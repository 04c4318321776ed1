use backend::{KeyValueStore, MemoryStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`, or an in-memory map when the browser denies access
/// (private mode, disabled storage)
#[derive(Debug, Clone)]
pub struct BrowserStore {
    local: Option<Storage>,
    fallback: MemoryStore,
}

impl BrowserStore {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if local.is_none() {
            log::warn!("Local storage unavailable; changes will not survive a reload");
        }
        Self {
            local,
            fallback: MemoryStore::new(),
        }
    }
}

fn describe(error: JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.local {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(describe(e))),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.local {
            Some(storage) => storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: describe(e),
            }),
            None => self.fallback.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match &self.local {
            Some(storage) => storage.remove_item(key).map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: describe(e),
            }),
            None => self.fallback.remove(key),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        match &self.local {
            Some(storage) => storage
                .clear()
                .map_err(|e| StorageError::Unavailable(describe(e))),
            None => self.fallback.clear(),
        }
    }
}
