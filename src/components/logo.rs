//! Logo Component

use leptos::prelude::*;

/// Static app heading
#[component]
pub fn Logo() -> impl IntoView {
    view! { <h1>"🌴 Travel Diary 💼"</h1> }
}
