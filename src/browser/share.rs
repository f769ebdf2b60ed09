//! Share Providers
//!
//! `navigator.share` and `navigator.clipboard.writeText` as stages of
//! the core share chain.

use async_trait::async_trait;
use grocery_core::share::{ShareChain, ShareData, ShareMethod, ShareProvider, StageOutcome};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Whether `navigator[property]` exists
fn navigator_has(property: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match js_sys::Reflect::get(&window.navigator(), &JsValue::from_str(property)) {
        Ok(value) => !value.is_undefined() && !value.is_null(),
        Err(_) => false,
    }
}

fn error_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()?
        .as_string()
}

fn describe(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Platform share sheet
pub struct NativeShare;

#[async_trait(?Send)]
impl ShareProvider for NativeShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Native
    }

    async fn share(&self, data: &ShareData) -> StageOutcome {
        if !navigator_has("share") {
            return StageOutcome::Unavailable;
        }
        let payload = match serde_wasm_bindgen::to_value(data) {
            Ok(payload) => payload,
            Err(e) => return StageOutcome::Failed(format!("Failed to serialize share data: {}", e)),
        };
        match navigator_share(payload).await {
            Ok(_) => StageOutcome::Shared,
            Err(err) if error_name(&err).as_deref() == Some("AbortError") => StageOutcome::Cancelled,
            Err(err) => StageOutcome::Failed(describe(&err)),
        }
    }
}

/// Copies the share text
pub struct ClipboardShare;

#[async_trait(?Send)]
impl ShareProvider for ClipboardShare {
    fn method(&self) -> ShareMethod {
        ShareMethod::Clipboard
    }

    async fn share(&self, data: &ShareData) -> StageOutcome {
        if !navigator_has("clipboard") {
            return StageOutcome::Unavailable;
        }
        match clipboard_write_text(&data.text).await {
            Ok(_) => StageOutcome::Shared,
            Err(err) => StageOutcome::Failed(describe(&err)),
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    if !navigator_has("clipboard") {
        return Err("Clipboard is not available".to_string());
    }
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|err| describe(&err))
}

/// Native share first, then clipboard, then manual links
pub fn share_chain(page_url: String) -> ShareChain {
    ShareChain::new(page_url)
        .with_provider(NativeShare)
        .with_provider(ClipboardShare)
}
