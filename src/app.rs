//! Travel List Frontend App
//!
//! Root component: creates the store and lays out the four sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, Logo, PackingList, StatsFooter};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingList />
            <StatsFooter />
        </div>
    }
}
