//! Todo Storage
//!
//! The whole list lives under one key as a JSON array. Reads are forgiving:
//! anything that cannot be decoded is treated as an empty list.

use std::cell::{Cell, RefCell};

use crate::error::TodoResult;
use crate::list::TodoList;
use crate::models::Item;

/// Key/value backend holding the serialized list
pub trait TodoStorage {
    /// Raw payload, `None` when nothing has been saved yet
    fn read(&self) -> TodoResult<Option<String>>;

    /// Overwrite the stored payload
    fn write(&self, payload: &str) -> TodoResult<()>;
}

/// Load the list, falling back to an empty one on any failure
pub fn load_todos<S: TodoStorage + ?Sized>(storage: &S) -> TodoList {
    let payload = match storage.read() {
        Ok(Some(payload)) => payload,
        Ok(None) => return TodoList::new(),
        Err(e) => {
            log::warn!("[STORAGE] read failed, starting empty: {}", e);
            return TodoList::new();
        }
    };

    match serde_json::from_str::<Vec<Item>>(&payload) {
        Ok(items) => {
            let list = TodoList::restored(items);
            log::debug!("[STORAGE] loaded {} items", list.len());
            list
        }
        Err(e) => {
            log::warn!("[STORAGE] discarding malformed payload: {}", e);
            TodoList::new()
        }
    }
}

/// Serialize the full list and overwrite the stored payload
pub fn save_todos<S: TodoStorage + ?Sized>(storage: &S, list: &TodoList) -> TodoResult<()> {
    let payload = serde_json::to_string(list)?;
    storage.write(&payload)?;
    log::debug!("[STORAGE] saved {} items", list.len());
    Ok(())
}

/// In-memory backend for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
            writes: Cell::new(0),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of writes since creation
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl TodoStorage for MemoryStorage {
    fn read(&self) -> TodoResult<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> TodoResult<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
