//! Packing List Component
//!
//! Renders the sorted view of the list and the actions panel.

use leptos::prelude::*;

use crate::components::{ItemRow, ListActions};
use crate::list::sorted_view;
use crate::models::SortKey;
use crate::store::{use_app_store, AppStateStoreFields};

/// The packing list with its sort/clear actions panel
#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    // Display order only; stored order stays as entered
    let (sort_key, set_sort_key) = signal(SortKey::Input);

    let sorted_items = move || sorted_view(&store.items().get(), sort_key.get());
    let has_items = move || !store.items().get().is_empty();

    view! {
        <div class="list">
            <ul>
                // packed is part of the key so a toggled row re-renders
                <For
                    each=sorted_items
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>

            // Actions only make sense with something in the list
            <Show when=has_items>
                <ListActions sort_key=sort_key set_sort_key=set_sort_key />
            </Show>
        </div>
    }
}
