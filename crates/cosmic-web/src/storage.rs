//! Web-storage key-value stores.
//!
//! Storage may be absent or throwing (private browsing, quota). Reads
//! degrade to `None`; failed writes are dropped with a warning, never
//! surfaced to the page.

use web_sys::Storage;

use cosmic_engine::KeyValueStore;

fn local() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn session() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn get_from(storage: Option<Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok()?
}

fn set_on(storage: Option<Storage>, key: &str, value: &str) {
    match storage {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("web storage write for {key:?} dropped");
            }
        }
        None => log::warn!("web storage unavailable; {key:?} not persisted"),
    }
}

/// localStorage: outlives the tab. Holds the poll tallies.
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        get_from(local(), key)
    }

    fn set(&self, key: &str, value: &str) {
        set_on(local(), key, value);
    }
}

/// sessionStorage: cleared when the tab closes. Holds the voted flag.
pub struct SessionStore;

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        get_from(session(), key)
    }

    fn set(&self, key: &str, value: &str) {
        set_on(session(), key, value);
    }
}
