//! Share Provider Chain
//!
//! Providers are tried in fixed order: native share sheet, clipboard,
//! then manual deep links. The first stage that shares wins. A native
//! failure other than cancellation is an error; a clipboard failure
//! falls through to the manual links.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::ShoppingItem;

use super::format::{format_share_data, ShareData};
use super::links::ShareLinks;

/// Delivery stage, in the order stages run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShareMethod {
    Native,
    Clipboard,
    Manual,
}

impl ShareMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareMethod::Native => "native",
            ShareMethod::Clipboard => "clipboard",
            ShareMethod::Manual => "manual",
        }
    }

    fn failure_is_fatal(&self) -> bool {
        matches!(self, ShareMethod::Native)
    }
}

impl fmt::Display for ShareMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one provider did with the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Shared,
    /// The user dismissed the share sheet
    Cancelled,
    /// The capability does not exist here
    Unavailable,
    Failed(String),
}

/// One delivery capability, such as `navigator.share` or the clipboard
#[async_trait(?Send)]
pub trait ShareProvider {
    fn method(&self) -> ShareMethod;

    async fn share(&self, data: &ShareData) -> StageOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareResult {
    Shared(ShareMethod),
    Cancelled,
    /// Nothing shared automatically; offer these links instead
    Manual { links: ShareLinks, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Shopping list is empty")]
    EmptyList,
    #[error("{method} share failed: {reason}")]
    Failed { method: ShareMethod, reason: String },
}

pub struct ShareChain {
    providers: Vec<Box<dyn ShareProvider>>,
    page_url: String,
}

impl ShareChain {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            providers: Vec::new(),
            page_url: page_url.into(),
        }
    }

    /// Register a provider; it is slotted in by stage regardless of the
    /// order of registration
    pub fn with_provider(mut self, provider: impl ShareProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self.providers.sort_by_key(|p| p.method());
        self
    }

    pub fn share_data(&self, items: &[ShoppingItem], title: &str, generated: NaiveDate) -> ShareData {
        format_share_data(items, title, &self.page_url, generated)
    }

    /// Format today's list and run every stage
    pub async fn share_list(&self, items: &[ShoppingItem], title: &str) -> Result<ShareResult, ShareError> {
        if items.is_empty() {
            return Err(ShareError::EmptyList);
        }
        let data = self.share_data(items, title, chrono::Local::now().date_naive());
        self.deliver(&data, false).await
    }

    /// Clipboard, then manual links; never fails
    pub async fn fallback_share(&self, data: &ShareData) -> ShareResult {
        match self.deliver(data, true).await {
            Ok(result) => result,
            Err(_) => manual(data),
        }
    }

    async fn deliver(&self, data: &ShareData, skip_native: bool) -> Result<ShareResult, ShareError> {
        let stages = self
            .providers
            .iter()
            .filter(|p| !(skip_native && p.method() == ShareMethod::Native));

        for provider in stages {
            let method = provider.method();
            match provider.share(data).await {
                StageOutcome::Shared => {
                    log::info!("[SHARE] Shared via {}", method);
                    return Ok(ShareResult::Shared(method));
                }
                StageOutcome::Cancelled => {
                    log::info!("[SHARE] Cancelled at {} stage", method);
                    return Ok(ShareResult::Cancelled);
                }
                StageOutcome::Unavailable => {
                    log::debug!("[SHARE] {} unavailable, trying next stage", method);
                }
                StageOutcome::Failed(reason) if method.failure_is_fatal() => {
                    log::error!("[SHARE] {} share failed: {}", method, reason);
                    return Err(ShareError::Failed { method, reason });
                }
                StageOutcome::Failed(reason) => {
                    log::warn!("[SHARE] {} share failed, falling back: {}", method, reason);
                }
            }
        }
        Ok(manual(data))
    }
}

fn manual(data: &ShareData) -> ShareResult {
    ShareResult::Manual {
        links: ShareLinks::new(&data.title, &data.text),
        text: data.text.clone(),
    }
}
