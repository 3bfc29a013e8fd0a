//! JSON persistence for the session snapshot and the local account directory.
//! In the browser this is `localStorage`; native builds use a thread-local map
//! so the same code paths run under `cargo test`.

use crate::app_lib::AppError;
use serde::{Serialize, de::DeserializeOwned};

/// Reads and decodes `key`. A missing entry is `Ok(None)`.
///
/// # Errors
///
/// Returns `AppError::Storage` when storage is unavailable and
/// `AppError::Parse` when the stored value is not valid JSON for `T`.
pub fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>, AppError> {
    match backend::get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` and stores it under `key`.
///
/// # Errors
///
/// Returns an error when encoding fails or storage rejects the write.
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    backend::set(key, &raw)
}

/// Deletes `key`. Removing a missing key is not an error.
///
/// # Errors
///
/// Returns `AppError::Storage` when storage is unavailable.
pub fn remove(key: &str) -> Result<(), AppError> {
    backend::remove(key)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::app_lib::AppError;
    use web_sys::Storage;

    fn local_storage() -> Result<Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("window is not available".to_string()))?
            .local_storage()
            .map_err(|_| AppError::Storage("localStorage is blocked".to_string()))?
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }

    pub(super) fn get(key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("failed to read {key}")))
    }

    pub(super) fn set(key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("failed to write {key}")))
    }

    pub(super) fn remove(key: &str) -> Result<(), AppError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("failed to remove {key}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use crate::app_lib::AppError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ENTRIES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn get(key: &str) -> Result<Option<String>, AppError> {
        Ok(ENTRIES.with(|entries| entries.borrow().get(key).cloned()))
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn set(key: &str, value: &str) -> Result<(), AppError> {
        ENTRIES.with(|entries| {
            entries.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn remove(key: &str) -> Result<(), AppError> {
        ENTRIES.with(|entries| {
            entries.borrow_mut().remove(key);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{backend, load, remove, save};
    use crate::app_lib::AppError;
    use crate::features::auth::types::{AccountStatus, User};

    fn member() -> User {
        User {
            id: "m-7".to_string(),
            email: "grace@example.org".to_string(),
            display_name: Some("Grace".to_string()),
            status: AccountStatus::Suspended,
        }
    }

    #[test]
    fn missing_key_loads_as_none() {
        let loaded: Option<User> = load("storage.test.missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn saved_user_is_loaded_back_and_removed() {
        let key = "storage.test.user";
        save(key, &member()).unwrap();

        let loaded: Option<User> = load(key).unwrap();
        assert_eq!(loaded, Some(member()));

        remove(key).unwrap();
        let loaded: Option<User> = load(key).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupted_entry_is_a_parse_error() {
        let key = "storage.test.corrupt";
        backend::set(key, "{not json").unwrap();

        let err = load::<User>(key).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
