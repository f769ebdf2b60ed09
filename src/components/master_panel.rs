//! Master List Panel
//!
//! Inventory grouped by category with add/delete controls.

use grocery_core::actions;
use grocery_core::view::{render_master_list, SortOrder};
use grocery_core::MasterItem;
use leptos::prelude::*;

use crate::components::{AddItemForm, ConfirmButton, EmptyStateView, SearchBox, SortSelect};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn MasterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rendered = Memo::new(move |_| {
        store.master_list().with(|items| store.view().with(|state| render_master_list(items, state)))
    });
    let show_form = move || store.show_add_form().get();

    view! {
        <section id="master-section" class="tab-content active">
            <div class="list-toolbar">
                <button
                    id="toggle-add-form"
                    class="btn btn-primary"
                    on:click=move |_| store.show_add_form().update(|open| *open = !*open)
                >
                    {move || if show_form() { "- Cancel" } else { "+ Add Item" }}
                </button>
                <SortSelect
                    value=Signal::derive(move || store.view().with(|v| v.master_sort))
                    options=&SortOrder::MASTER_OPTIONS
                    on_change=move |order: SortOrder| store.view().update(|v| v.master_sort = order)
                />
            </div>
            <SearchBox
                placeholder="Search master list..."
                value=Signal::derive(move || store.view().with(|v| v.master_search.clone()))
                on_input=move |term: String| store.view().update(|v| v.master_search = term)
            />
            <Show when=show_form>
                <AddItemForm />
            </Show>
            <div id="master-list" class="master-list">
                {move || {
                    let list = rendered.get();
                    match list.empty {
                        Some(state) => view! { <EmptyStateView state=state /> }.into_any(),
                        None => list.groups.into_iter().map(|group| view! {
                            <div class="category-group">
                                <div class="category-header">{group.emoji} " " {group.category}</div>
                                {group.items.into_iter()
                                    .map(|item| view! { <MasterItemRow item=item /> })
                                    .collect_view()}
                            </div>
                        }).collect_view().into_any(),
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn MasterItemRow(item: MasterItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;

    view! {
        <div class="master-item">
            <div class="master-item-content">
                <div class="master-item-info">
                    <div class="master-item-name">{item.name}</div>
                    <div class="master-item-details">
                        <span>"Qty: " {item.quantity}</span>
                        <span>"Category: " {item.category}</span>
                    </div>
                </div>
                <div class="master-item-actions">
                    <button
                        class="btn btn-primary btn-sm add-to-shopping"
                        on:click=move |_| ctx.report(actions::move_to_shopping_list(&ctx.repo(), id))
                    >
                        "+ Add"
                    </button>
                    <ConfirmButton
                        label="🗑️"
                        button_class="btn btn-danger btn-sm delete-item"
                        prompt=move |_: ()| Some(actions::DELETE_MASTER_ITEM_PROMPT.to_string())
                        on_confirm=move |_: ()| ctx.report(actions::delete_master_item(&ctx.repo(), id))
                    />
                </div>
            </div>
        </div>
    }
}
