//! Shopping List Panel
//!
//! Checkable entries with category filter, bulk clear and share.

use grocery_core::actions::{self, ClearPrompt};
use grocery_core::domain::{category_emoji, CATEGORIES};
use grocery_core::view::{render_shopping_list, CategoryFilter, SortOrder};
use grocery_core::ShoppingItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{ConfirmButton, EmptyStateView, SearchBox, SortSelect};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ShoppingPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rendered = Memo::new(move |_| {
        store.shopping_list().with(|items| store.view().with(|state| render_shopping_list(items, state)))
    });

    view! {
        <section id="shopping-section" class="tab-content active">
            <div class="list-toolbar">
                <span id="shopping-count" class="shopping-count">
                    {move || rendered.with(|v| v.status_line())}
                </span>
                <SortSelect
                    value=Signal::derive(move || store.view().with(|v| v.shopping_sort))
                    options=&SortOrder::SHOPPING_OPTIONS
                    on_change=move |order: SortOrder| store.view().update(|v| v.shopping_sort = order)
                />
            </div>
            <SearchBox
                placeholder="Search shopping list..."
                value=Signal::derive(move || store.view().with(|v| v.shopping_search.clone()))
                on_input=move |term: String| store.view().update(|v| v.shopping_search = term)
            />
            <Show when=move || rendered.with(|v| v.show_filter_bar)>
                <CategoryFilterBar active=Signal::derive(move || rendered.with(|v| v.active_filter.clone())) />
            </Show>
            <div id="shopping-list" class="shopping-list">
                <Show
                    when=move || rendered.with(|v| v.empty.is_none())
                    fallback=move || rendered.with(|v| v.empty).map(|state| view! { <EmptyStateView state=state /> })
                >
                    <For
                        each=move || rendered.with(|v| v.items.clone())
                        key=|item| (item.id, item.completed)
                        children=move |item| view! { <ShoppingItemRow item=item /> }
                    />
                </Show>
            </div>
            <ListControls />
        </section>
    }
}

#[component]
fn ShoppingItemRow(item: ShoppingItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let row_class = if item.completed { "shopping-item completed" } else { "shopping-item" };
    let text = format!("{} ({}) - {}", item.name, item.quantity, item.category);

    view! {
        <div class=row_class>
            <label class="item-label">
                <input
                    type="checkbox"
                    class="item-checkbox check-item"
                    prop:checked=item.completed
                    on:change=move |_| ctx.report(actions::check_off(&ctx.repo(), id))
                />
                <span class="item-text">{text}</span>
            </label>
        </div>
    }
}

#[component]
fn CategoryFilterBar(#[prop(into)] active: Signal<CategoryFilter>) -> impl IntoView {
    let store = use_app_context().store;

    let choices = std::iter::once((CategoryFilter::All, "All".to_string())).chain(
        CATEGORIES
            .into_iter()
            .map(|c| (CategoryFilter::from_value(c), format!("{} {}", category_emoji(c), c))),
    );

    view! {
        <div id="category-filter-section" class="category-filter-section">
            <div id="category-filter-bar" class="category-filter-bar">
                {choices.map(|(filter, label)| {
                    let data_category = filter.as_str().to_string();
                    let selected = filter.clone();
                    let btn_class = move || {
                        if active.with(|a| *a == selected) { "category-filter-btn active" } else { "category-filter-btn" }
                    };
                    view! {
                        <button
                            class=btn_class
                            data-category=data_category
                            on:click=move |_| store.view().update(|v| v.category_filter = filter.clone())
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Clear completed, clear all and share
#[component]
fn ListControls() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (sharing, set_sharing) = signal(false);

    let confirm_question = move |prompt: ClearPrompt| match prompt {
        ClearPrompt::Nothing(notice) => {
            ctx.notify(notice);
            None
        }
        ClearPrompt::Confirm { message, .. } => Some(message),
    };

    let share = move |_| {
        if sharing.get_untracked() {
            return;
        }
        set_sharing.set(true);
        let list = store.shopping_list().get_untracked();
        let title = ctx.config().share_title;
        spawn_local(async move {
            let chain = browser::share_chain(browser::page_url());
            let flow = actions::share_shopping_list(&chain, &list, &title).await;
            if let Some(notice) = flow.notice {
                ctx.notify(notice);
            }
            if let Some(data) = flow.modal {
                store.share_modal().set(Some(data));
            }
            set_sharing.set(false);
        });
    };

    view! {
        <div class="list-controls">
            <ConfirmButton
                label="Clear Completed"
                button_class="btn btn-secondary"
                prompt=move |_: ()| confirm_question(actions::clear_completed_prompt(&store.shopping_list().get_untracked()))
                on_confirm=move |_: ()| ctx.report(actions::clear_completed(&ctx.repo()))
            />
            <ConfirmButton
                label="Clear All"
                button_class="btn btn-danger"
                prompt=move |_: ()| confirm_question(actions::clear_all_prompt(&store.shopping_list().get_untracked()))
                on_confirm=move |_: ()| ctx.report(actions::clear_all(&ctx.repo()))
            />
            <button id="share-list" class="btn btn-primary" prop:disabled=move || sharing.get() on:click=share>
                "📤 Share List"
            </button>
        </div>
    }
}
