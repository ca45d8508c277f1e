//! Stats Footer Component
//!
//! Completion summary over the current list.

use leptos::prelude::*;

use crate::list::packing_stats;
use crate::models::PackingStats;
use crate::store::{use_app_store, AppStateStoreFields};

/// Footer summarizing packing progress
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    move || match packing_stats(&store.items().get()) {
        PackingStats::Empty => view! {
            <p class="stats">"Start adding some items to your list 🚀"</p>
        }
        .into_any(),
        PackingStats::Progress { percent: 100, .. } => view! {
            <footer class="stats">
                <em>"You got everything! Ready to go ✈️"</em>
            </footer>
        }
        .into_any(),
        PackingStats::Progress {
            total,
            packed,
            percent,
        } => view! {
            <footer class="stats">
                <em>
                    {format!(
                        "💼 You have {} items on your list, and you already packed {} ({}%)",
                        total, packed, percent,
                    )}
                </em>
            </footer>
        }
        .into_any(),
    }
}
