//! Local Storage Backend
//!
//! `TodoStorage` over `window.localStorage`.

use todo_core::{TodoError, TodoResult, TodoStorage};

pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> TodoResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| TodoError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| TodoError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| TodoError::StorageUnavailable("localStorage is disabled".to_string()))
    }
}

impl TodoStorage for LocalStorage {
    fn read(&self) -> TodoResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| TodoError::Storage(format!("read {}: {:?}", self.key, e)))
    }

    fn write(&self, payload: &str) -> TodoResult<()> {
        self.storage()?
            .set_item(&self.key, payload)
            .map_err(|e| TodoError::Storage(format!("write {}: {:?}", self.key, e)))
    }
}
