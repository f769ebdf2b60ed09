//! Share Layer
//!
//! Turns the shopping list into shareable text and delivers it through
//! an ordered chain of providers: native share, then clipboard, then
//! manual deep links.

mod chain;
mod format;
mod links;

pub use chain::{ShareChain, ShareError, ShareMethod, ShareProvider, ShareResult, StageOutcome};
pub use format::{format_share_data, format_share_date, ShareData};
pub use links::{encode_uri_component, ShareLinks, ShareTarget};
