use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

/// Reads a raw string value from the per-origin key-value store. Absent
/// keys and unreadable storage both surface as an error; callers treat
/// either as "no stored value".
pub fn get(key: &str) -> anyhow::Result<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::Error::msg(format!("no stored value for {key}")))
}

/// Writes a raw string value. Failures are logged and swallowed so a full
/// or disabled store never breaks page behavior.
pub fn set(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        console_error!(format!("Failed to set local storage {key}"), err);
    }
}
