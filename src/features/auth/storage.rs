//! Key-value storage behind the session guard. The guard and the auth
//! screens share one injectable interface so guard logic is testable
//! without a browser environment.

#[cfg(not(target_arch = "wasm32"))]
use std::{cell::RefCell, collections::HashMap};

/// Minimal key-value contract over the credential store. The browser's
/// storage API serializes access per tab; concurrent writes from multiple
/// tabs are out of scope (last write wins).
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backed store used by the running app. Storage
/// errors (denied access, quota) degrade to "no token", which the guard
/// already treats as invalid.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserTokens;

#[cfg(target_arch = "wasm32")]
impl BrowserTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokens {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for native tests of the guard and logout paths.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct MemoryTokens {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for MemoryTokens {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryTokens, TokenStore};

    #[test]
    fn memory_store_round_trip() {
        let tokens = MemoryTokens::default();
        assert_eq!(tokens.get("access_token"), None);

        tokens.set("access_token", "abc");
        assert_eq!(tokens.get("access_token"), Some("abc".to_string()));

        tokens.remove("access_token");
        assert_eq!(tokens.get("access_token"), None);
    }

    #[test]
    fn remove_is_a_noop_for_missing_keys() {
        let tokens = MemoryTokens::default();
        tokens.remove("refresh_token");
        assert_eq!(tokens.get("refresh_token"), None);
    }
}
