//! Confirm Button Component
//!
//! Inline confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, `prompt` decides what happens:
/// `None` means there is nothing to confirm, `Some(question)` shows the
/// question with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `prompt` - Returns the confirmation question, if any
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: Callback<(), Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (question, set_question) = signal::<Option<String>>(None);

    view! {
        <Show when=move || question.with(|q| q.is_none())>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_question.set(prompt.run(()));
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || question.with(|q| q.is_some())>
            <span class="confirm-inline">
                <span class="confirm-text">{move || question.get().unwrap_or_default()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_question.set(None);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_question.set(None);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
