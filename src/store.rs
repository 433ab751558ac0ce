//! Application State Store
//!
//! Holds the current todo list snapshot. Mutations replace the snapshot as a
//! whole; observers (rendering, persistence) subscribe to `todos`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoList;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub todos: TodoList,
}

impl AppState {
    pub fn new(todos: TodoList) -> Self {
        Self { todos }
    }
}

pub type AppStore = Store<AppState>;

/// Replace the snapshot if the mutation produced one. Returns whether the
/// list changed.
pub fn store_apply(store: &AppStore, mutate: impl FnOnce(&TodoList) -> Option<TodoList>) -> bool {
    match store.todos().with_untracked(mutate) {
        Some(next) => {
            store.todos().set(next);
            true
        }
        None => false,
    }
}
