//! Share Modal Component
//!
//! Manual share options shown when neither the share sheet nor the
//! clipboard could be used.

use gloo_timers::future::TimeoutFuture;
use grocery_core::share::{ShareData, ShareLinks, ShareTarget};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ShareModal() -> impl IntoView {
    let store = use_app_context().store;

    move || store.share_modal().get().map(|data| view! { <ShareDialog data=data /> })
}

#[component]
fn ShareDialog(data: ShareData) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let links = ShareLinks::new(&data.title, &data.text);
    let text = StoredValue::new(data.text.clone());
    let (copied, set_copied) = signal(false);
    let preview = NodeRef::<html::Textarea>::new();

    let close = move || store.share_modal().set(None);

    let copy = move |_| {
        let text = text.get_value();
        let feedback_ms = ctx.config().copy_feedback_ms;
        spawn_local(async move {
            match browser::copy_to_clipboard(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(feedback_ms).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    log::error!("[SHARE] Copy failed: {}", e);
                    // Leave the text selected for a manual copy
                    if let Some(area) = preview.get_untracked() {
                        area.select();
                        let _ = area.set_selection_range(0, 99_999);
                    }
                }
            }
        });
    };

    view! {
        <div
            class="share-modal"
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <div class="share-modal-content">
                <div class="share-modal-header">
                    <h3>"Share Shopping List"</h3>
                    <button class="close-modal" on:click=move |_| close()>"×"</button>
                </div>
                <label>"Share via:"</label>
                <div class="share-options">
                    {ShareTarget::ALL.into_iter().map(|target| {
                        let url = links.url(target).to_string();
                        view! {
                            <button
                                class="share-btn"
                                style=format!("background: {};", target.color())
                                on:click=move |_| browser::open_in_new_tab(&url)
                            >
                                {target.label()}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="share-btn copy-btn"
                        style=move || if copied.get() { "background: #059669;" } else { "background: #64748b;" }
                        on:click=copy
                    >
                        {move || if copied.get() { "✅ Copied!" } else { "📋 Copy" }}
                    </button>
                </div>
                <label>"Preview:"</label>
                <textarea class="share-preview" readonly node_ref=preview prop:value=data.text></textarea>
            </div>
        </div>
    }
}
