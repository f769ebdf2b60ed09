//! Notification Stack
//!
//! Colored toasts in the top-right corner. Entries are removed by
//! `AppContext::notify` once their timer runs out.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notification-stack">
            <For
                each=move || store.notifications().get()
                key=|n| n.id
                children=move |n| {
                    let style = format!("background-color: {};", n.notice.kind.color());
                    view! { <div class="notification" style=style>{n.notice.message}</div> }
                }
            />
        </div>
    }
}
