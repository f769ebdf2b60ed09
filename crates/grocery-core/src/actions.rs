//! User Workflows
//!
//! What happens when the user submits the add form, presses a list
//! button, switches tabs or shares. Each workflow validates, touches the
//! repository and hands back the notification to show. Errors display
//! as the text the user sees.

use thiserror::Error;

use crate::domain::{ItemId, MasterItemDraft, ShoppingItem};
use crate::error::StorageError;
use crate::repository::{Clock, GroceryRepository};
use crate::share::{ShareChain, ShareData, ShareError, ShareMethod, ShareResult};
use crate::storage::KeyValueStore;
use crate::view::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn color(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#059669",
            NoticeKind::Error => "#dc2626",
            NoticeKind::Warning => "#d97706",
            NoticeKind::Info => "#2563eb",
        }
    }
}

/// Transient message for the notification stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please enter an item name")]
    EmptyName,
    #[error("This item already exists in your master list!")]
    DuplicateMasterItem,
    #[error("Item already in shopping list!")]
    AlreadyInShoppingList,
    #[error("Item no longer exists in your master list")]
    UnknownItem(ItemId),
    #[error("Shopping list is empty. Add items to view it.")]
    EmptyShoppingList,
    #[error("Unable to save changes: {0}")]
    Storage(#[from] StorageError),
}

impl ActionError {
    pub fn notice(&self) -> Notice {
        let kind = match self {
            ActionError::EmptyName | ActionError::DuplicateMasterItem | ActionError::AlreadyInShoppingList => {
                NoticeKind::Warning
            }
            ActionError::EmptyShoppingList => NoticeKind::Info,
            ActionError::UnknownItem(_) | ActionError::Storage(_) => NoticeKind::Error,
        };
        Notice::new(kind, self.to_string())
    }
}

pub type ActionResult = Result<Notice, ActionError>;

// ========================
// Master List
// ========================

/// Validate and store a new master item
///
/// The name is trimmed and must not be empty. A case-insensitive name
/// match within the same category is a duplicate.
pub fn submit_master_item<S: KeyValueStore, C: Clock>(
    repo: &GroceryRepository<S, C>,
    mut draft: MasterItemDraft,
) -> ActionResult {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(ActionError::EmptyName);
    }
    let category = draft.resolved_category();
    let lowered = name.to_lowercase();
    let duplicate = repo
        .master_list()
        .iter()
        .any(|item| item.name.to_lowercase() == lowered && item.category == category);
    if duplicate {
        return Err(ActionError::DuplicateMasterItem);
    }

    draft.name = name;
    let item = repo.add_item_to_master_list(draft)?;
    log::info!("[APP] Master item {} added", item.id);
    Ok(Notice::success("Item added to master list!"))
}

/// Question shown before a master item is deleted
pub const DELETE_MASTER_ITEM_PROMPT: &str = "Are you sure you want to delete this item from your master list?";

/// Delete after the user has confirmed
pub fn delete_master_item<S: KeyValueStore, C: Clock>(repo: &GroceryRepository<S, C>, id: ItemId) -> ActionResult {
    repo.delete_item_from_master_list(id)?;
    Ok(Notice::success("Item deleted from master list"))
}

/// Copy a master item onto the shopping list unless an entry with the
/// same name (ignoring case) is already there
pub fn move_to_shopping_list<S: KeyValueStore, C: Clock>(repo: &GroceryRepository<S, C>, id: ItemId) -> ActionResult {
    let item = repo.find_master_item(id).ok_or(ActionError::UnknownItem(id))?;
    let lowered = item.name.to_lowercase();
    if repo
        .shopping_list()
        .iter()
        .any(|entry| entry.name.to_lowercase() == lowered)
    {
        return Err(ActionError::AlreadyInShoppingList);
    }
    repo.add_item_to_shopping_list(&item)?;
    Ok(Notice::success("Item added to shopping list!"))
}

// ========================
// Shopping List
// ========================

pub fn check_off<S: KeyValueStore, C: Clock>(repo: &GroceryRepository<S, C>, id: ItemId) -> ActionResult {
    match repo.toggle_item_completed(id)? {
        Some(entry) if entry.completed => Ok(Notice::info("Item completed!")),
        _ => Ok(Notice::info("Item unchecked")),
    }
}

/// Whether a bulk clear needs confirmation or has nothing to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearPrompt {
    Nothing(Notice),
    Confirm { message: String, count: usize },
}

pub fn clear_completed_prompt(list: &[ShoppingItem]) -> ClearPrompt {
    let count = list.iter().filter(|item| item.completed).count();
    if count == 0 {
        return ClearPrompt::Nothing(Notice::info("No completed items to clear"));
    }
    ClearPrompt::Confirm {
        message: format!("Clear {} completed item(s)?", count),
        count,
    }
}

pub fn clear_all_prompt(list: &[ShoppingItem]) -> ClearPrompt {
    if list.is_empty() {
        return ClearPrompt::Nothing(Notice::info("Shopping list is already empty"));
    }
    ClearPrompt::Confirm {
        message: "Clear entire shopping list?".to_string(),
        count: list.len(),
    }
}

pub fn clear_completed<S: KeyValueStore, C: Clock>(repo: &GroceryRepository<S, C>) -> ActionResult {
    let removed = repo.clear_completed_items()?;
    Ok(Notice::success(format!("{} completed item(s) cleared", removed)))
}

pub fn clear_all<S: KeyValueStore, C: Clock>(repo: &GroceryRepository<S, C>) -> ActionResult {
    repo.clear_all_items()?;
    Ok(Notice::success("Shopping list cleared"))
}

// ========================
// Navigation
// ========================

/// The shopping tab cannot be opened while the list is empty
pub fn switch_tab(list: &[ShoppingItem], tab: Tab) -> Result<Tab, ActionError> {
    if tab == Tab::Shopping && list.is_empty() {
        return Err(ActionError::EmptyShoppingList);
    }
    Ok(tab)
}

// ========================
// Sharing
// ========================

/// What the UI should do once a share attempt settles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareFlow {
    pub notice: Option<Notice>,
    /// Open the manual share modal with this payload
    pub modal: Option<ShareData>,
}

pub async fn share_shopping_list(chain: &ShareChain, list: &[ShoppingItem], title: &str) -> ShareFlow {
    if list.is_empty() {
        return ShareFlow {
            notice: Some(Notice::warning("Shopping list is empty - nothing to share!")),
            modal: None,
        };
    }

    let modal_data = || chain.share_data(list, title, chrono::Local::now().date_naive());
    match chain.share_list(list, title).await {
        Ok(ShareResult::Shared(ShareMethod::Clipboard)) => ShareFlow {
            notice: Some(Notice::success("Shopping list copied to clipboard!")),
            modal: None,
        },
        Ok(ShareResult::Shared(_)) => ShareFlow {
            notice: Some(Notice::success("List shared successfully!")),
            modal: None,
        },
        Ok(ShareResult::Cancelled) => ShareFlow::default(),
        Ok(ShareResult::Manual { .. }) => ShareFlow {
            notice: None,
            modal: Some(modal_data()),
        },
        Err(ShareError::EmptyList) => ShareFlow {
            notice: Some(Notice::warning("Shopping list is empty - nothing to share!")),
            modal: None,
        },
        Err(e) => {
            log::error!("[APP] Error sharing: {}", e);
            ShareFlow {
                notice: Some(Notice::error("Unable to share list. Please try again.")),
                modal: Some(modal_data()),
            }
        }
    }
}
