//! Todo List App
//!
//! List container: owns the store, persists every new snapshot and renders
//! one `TodoItem` per entry.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{load_todos, save_todos, Item, TodoConfig, TodoList};

use crate::components::{NewTodoForm, TodoItem};
use crate::context::TodoActions;
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let storage = LocalStorage::new(config.storage_key.clone());
    let initial = load_todos(&storage);
    log::info!("[APP] Loaded {} items from '{}'", initial.len(), config.storage_key);

    let store = Store::new(AppState::new(initial));
    let actions = TodoActions::new(store);

    // Persist every replaced snapshot; the initial load is not written back
    Effect::watch(
        move || store.todos().get(),
        move |todos: &TodoList, _, _| {
            if let Err(e) = save_todos(&storage, todos) {
                log::error!("[APP] Failed to save todos: {}", e);
            }
        },
        false,
    );

    view! {
        <div class="todo-card">
            <div class="todo-header">
                <span class="todo-icon">"📝"</span>
                <h1>"Todo List"</h1>
            </div>

            <NewTodoForm on_add=move |text: String| actions.add(&text) />

            <div class="todo-list">
                <For
                    each=move || store.todos().get().items().to_vec()
                    // Keyed on the whole item so a changed row remounts with fresh local state
                    key=|item: &Item| item.clone()
                    children=move |item: Item| {
                        view! {
                            <TodoItem
                                item=item
                                on_toggle=move |id: u64| actions.toggle(id)
                                on_toggle_editing=move |id: u64| actions.toggle_editing(id)
                                on_delete=move |id: u64| actions.delete(id)
                                on_save=move |(id, text): (u64, String)| actions.edit(id, &text)
                            />
                        }
                    }
                />
            </div>

            {move || {
                let todos = store.todos().get();
                (!todos.is_empty()).then(|| view! {
                    <p class="todo-count">{remaining_label(&todos)}</p>
                })
            }}
        </div>
    }
}

fn remaining_label(todos: &TodoList) -> String {
    format!("{} / {} restantes", todos.remaining_count(), todos.len())
}
