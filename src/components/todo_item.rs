//! Todo Item Component
//!
//! One row of the list, in view or edit mode. The row keeps only its edit
//! buffer; every change goes back up through the callbacks.

use leptos::prelude::*;
use todo_core::Item;

#[component]
pub fn TodoItem(
    item: Item,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_toggle_editing: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
    #[prop(into)] on_save: Callback<(u64, String)>,
) -> impl IntoView {
    let id = item.id;
    let (edit_text, set_edit_text) = signal(item.text.clone());

    let save = move || {
        if let Some(text) = saved_text(&edit_text.get_untracked()) {
            on_save.run((id, text));
        }
    };

    let body = if item.is_editing {
        view! {
            <div class="todo-edit">
                <input
                    type="text"
                    class="todo-edit-input"
                    autofocus=true
                    prop:value=move || edit_text.get()
                    on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                save();
                            }
                            "Escape" => on_toggle_editing.run(id),
                            _ => {}
                        }
                    }
                />
                <button class="save-btn" on:click=move |_| save()>"Save"</button>
            </div>
        }
        .into_any()
    } else {
        let complete = item.is_complete;
        view! {
            <div class="todo-view" on:click=move |_| on_toggle.run(id)>
                <span class="tick">{if complete { "✔" } else { "○" }}</span>
                <p class=if complete { "todo-text completed" } else { "todo-text" }>
                    {item.text.clone()}
                </p>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="todo-row">
            {body}
            <button class="edit-btn" title="Edit" on:click=move |_| on_toggle_editing.run(id)>"✎"</button>
            <button class="delete-btn" title="Delete" on:click=move |_| on_delete.run(id)>"×"</button>
        </div>
    }
}

/// Text to save from the edit buffer; `None` keeps the row in edit mode
fn saved_text(buffer: &str) -> Option<String> {
    let text = buffer.trim();
    (!text.is_empty()).then(|| text.to_string())
}
