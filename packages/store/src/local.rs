//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the web platform. It looks
//! up `window.localStorage` on every call instead of holding a handle, so the
//! type stays zero-size and `Clone`.
//!
//! Errors are logged and otherwise ignored: a blocked or unavailable storage
//! area behaves like an empty one, which the session layer treats as "logged
//! out".

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match self.storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write {key} to localStorage: {e:?}");
                }
            }
            None => tracing::error!("localStorage unavailable, {key} not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {key} from localStorage: {e:?}");
            }
        }
    }
}
