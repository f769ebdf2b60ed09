//! List Toolbar Controls
//!
//! Sort dropdown and search box shared by both panels.

use grocery_core::view::SortOrder;
use leptos::prelude::*;

#[component]
pub fn SortSelect(
    #[prop(into)] value: Signal<SortOrder>,
    options: &'static [SortOrder],
    #[prop(into)] on_change: Callback<SortOrder>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            on:change=move |ev| on_change.run(SortOrder::from_value(&event_target_value(&ev)))
        >
            {options.iter().map(|order| {
                let order = *order;
                view! {
                    <option value=order.as_str() prop:selected=move || value.get() == order>
                        {order.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn SearchBox(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
