//! Add Item Form Component
//!
//! Form for adding new items with a quantity selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::MAX_QUANTITY;
use crate::store::{store_add_item, use_app_store};

/// Form for adding a new item to the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u8);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = description.get();
        if !text.is_empty() {
            web_sys::console::log_1(
                &format!("[FORM] Adding {} x {}", quantity.get(), text).into(),
            );
            store_add_item(&store, &text, quantity.get());
        }
        // The form resets either way, matching the submit-and-start-over flow
        set_description.set(String::new());
        set_quantity.set(1);
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your trip 😊?"</h3>

            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    set_quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                }
            >
                {(1..=MAX_QUANTITY).map(|num| view! {
                    <option value=num.to_string()>{num.to_string()}</option>
                }).collect_view()}
            </select>

            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_description.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
