//! New Todo Form Component
//!
//! Text input plus "add" action. Enter submits as well.

use leptos::prelude::*;

/// Input row for new todos. `on_add` returns whether an item was created;
/// the field is cleared only then.
#[component]
pub fn NewTodoForm(#[prop(into)] on_add: Callback<String, bool>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if on_add.run(new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Ajouter votre Tâche"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Ajouter"</button>
        </form>
    }
}
