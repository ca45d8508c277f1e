//! List Actions Component
//!
//! Sort selector and the clear-list button with its confirmation prompt.

use leptos::prelude::*;

use crate::models::SortKey;
use crate::store::{store_clear_items, use_app_store};

/// Sort options shown in the selector
const SORT_OPTIONS: &[(SortKey, &str)] = &[
    (SortKey::Input, "Sort by input order"),
    (SortKey::Description, "Sort by description"),
    (SortKey::Packed, "Sort by packed status"),
    (SortKey::Quantity, "Sort by quantity"),
];

const CLEAR_PROMPT: &str =
    "You are about to delete all items. Click OK to continue or CANCEL to revoke action.";

/// Actions panel below the list
#[component]
pub fn ListActions(
    sort_key: ReadSignal<SortKey>,
    set_sort_key: WriteSignal<SortKey>,
) -> impl IntoView {
    let store = use_app_store();

    let clear_list = move |_| {
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message(CLEAR_PROMPT).ok())
            .unwrap_or(false);
        web_sys::console::log_1(&format!("[LIST] Clear confirmed={}", confirmed).into());
        store_clear_items(&store, confirmed);
    };

    view! {
        <div class="actions">
            <select
                prop:value=move || sort_key.get().as_str().to_string()
                on:change=move |ev| set_sort_key.set(SortKey::from_str(&event_target_value(&ev)))
            >
                {SORT_OPTIONS.iter().map(|(key, label)| view! {
                    <option value=key.as_str()>{*label}</option>
                }).collect_view()}
            </select>

            <button on:click=clear_list>"Clear List"</button>
        </div>
    }
}
