//! Browser Bindings
//!
//! Thin wrappers over the browser APIs the app needs: local storage,
//! the navigator share sheet and clipboard, and a few document helpers.

mod document;
mod share;
mod storage;

pub use document::{apply_theme, expose_log_dump, open_in_new_tab, page_url};
pub use share::{copy_to_clipboard, share_chain};
pub use storage::LocalStorage;
