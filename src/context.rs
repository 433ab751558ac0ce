//! Application Context
//!
//! List container operations, handed to components as callbacks.

use crate::store::{store_apply, AppStore};

/// Mutations on the todo list. Each one is a silent no-op when it does not
/// apply (blank text, unknown id).
#[derive(Clone, Copy)]
pub struct TodoActions {
    store: AppStore,
}

impl TodoActions {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a new item stamped with the current time
    pub fn add(&self, raw_text: &str) -> bool {
        self.add_at(raw_text, js_sys::Date::now() as u64)
    }

    pub fn add_at(&self, raw_text: &str, now_ms: u64) -> bool {
        let added = store_apply(&self.store, |todos| todos.add(raw_text, now_ms));
        if added {
            log::debug!("[TODO] added {:?}", raw_text.trim());
        }
        added
    }

    pub fn delete(&self, id: u64) {
        if store_apply(&self.store, |todos| todos.delete(id)) {
            log::debug!("[TODO] deleted #{}", id);
        }
    }

    pub fn toggle(&self, id: u64) {
        store_apply(&self.store, |todos| todos.toggle(id));
    }

    pub fn toggle_editing(&self, id: u64) {
        store_apply(&self.store, |todos| todos.toggle_editing(id));
    }

    pub fn edit(&self, id: u64, new_text: &str) {
        store_apply(&self.store, |todos| todos.edit(id, new_text));
    }
}
