//! Durable key-value storage.
//!
//! The only thing giglance persists client-side is the bearer token; domain
//! entities are refetched from the server on every view mount. Backed by
//! `localStorage` on web and JSON files under the platform config directory
//! (`~/.config/giglance/` on Linux) on desktop.

use serde::{de::DeserializeOwned, Serialize};

/// Save a value, returning `true` on success.
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => save_raw(key, &json),
        Err(_) => false,
    }
}

/// Load a value; `None` if the key is absent or the stored JSON is stale.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) {
    remove_raw(key);
}

pub fn exists(key: &str) -> bool {
    load_raw(key).is_some()
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> bool {
    local_storage()
        .map(|s| s.set_item(key, value).is_ok())
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_for_key(key: &str) -> Option<std::path::PathBuf> {
    let dir = dirs::config_dir()?.join("giglance");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    // Sanitize key to be a valid filename
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(dir.join(format!("{}.json", safe_key)))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> bool {
    let Some(path) = file_for_key(key) else {
        return false;
    };
    std::fs::write(path, value).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    std::fs::read_to_string(file_for_key(key)?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = file_for_key(key) {
        let _ = std::fs::remove_file(path);
    }
}
