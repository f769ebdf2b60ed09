//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod app_header;
mod confirm_button;
mod empty_state;
mod list_toolbar;
mod master_panel;
mod notification_stack;
mod share_modal;
mod shopping_panel;
mod tab_bar;

pub use add_item_form::AddItemForm;
pub use app_header::AppHeader;
pub use confirm_button::ConfirmButton;
pub use empty_state::EmptyStateView;
pub use list_toolbar::{SearchBox, SortSelect};
pub use master_panel::MasterPanel;
pub use notification_stack::NotificationStack;
pub use share_modal::ShareModal;
pub use shopping_panel::ShoppingPanel;
pub use tab_bar::TabBar;
