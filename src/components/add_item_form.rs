//! Add Item Form Component
//!
//! Form for creating master list items with a category selector.

use grocery_core::actions;
use grocery_core::domain::{category_emoji, parse_quantity, CATEGORIES, DEFAULT_CATEGORY};
use grocery_core::MasterItemDraft;
use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(DEFAULT_CATEGORY.to_string());
    let (quantity, set_quantity) = signal(String::from("1"));
    let name_input = NodeRef::<html::Input>::new();

    // Focus the name field when the form opens
    Effect::new(move |_| {
        if let Some(input) = name_input.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = MasterItemDraft::new(name.get_untracked())
            .with_category(category.get_untracked());
        let draft = match parse_quantity(&quantity.get_untracked()) {
            Some(qty) => draft.with_quantity(qty),
            None => draft,
        };

        match actions::submit_master_item(&ctx.repo(), draft) {
            Ok(notice) => {
                set_name.set(String::new());
                set_category.set(DEFAULT_CATEGORY.to_string());
                set_quantity.set(String::from("1"));
                store.show_add_form().set(false);
                ctx.report(Ok(notice));
            }
            Err(e) => ctx.notify(e.notice()),
        }
    };

    view! {
        <form id="add-item-form" class="add-item-form" on:submit=on_submit>
            <input
                type="text"
                id="item-name"
                node_ref=name_input
                placeholder="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <select id="item-category" on:change=move |ev| set_category.set(event_target_value(&ev))>
                {CATEGORIES.into_iter().map(|c| {
                    view! {
                        <option value=c prop:selected=move || category.get() == c>
                            {category_emoji(c)} " " {c}
                        </option>
                    }
                }).collect_view()}
            </select>
            <input
                type="number"
                id="item-quantity"
                min="1"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Add to Master List"</button>
        </form>
    }
}
