use grocery_core::view::EmptyState;
use leptos::prelude::*;

#[component]
pub fn EmptyStateView(state: EmptyState) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{state.icon()}</div>
            <h3>{state.title()}</h3>
            <p>{state.hint()}</p>
        </div>
    }
}
