//! Share Text Formatting

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::ShoppingItem;

/// Payload for the native share sheet: `{title, text, url}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// `M/D/YYYY`, without zero padding
pub fn format_share_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Build the share text: a header, the items still to buy, then the
/// completed ones. Sections with no items are left out.
pub fn format_share_data(items: &[ShoppingItem], title: &str, url: &str, generated: NaiveDate) -> ShareData {
    let (completed, active): (Vec<&ShoppingItem>, Vec<&ShoppingItem>) =
        items.iter().partition(|item| item.completed);

    let mut text = String::new();
    let _ = writeln!(text, "🛒 {}", title);
    let _ = writeln!(text, "Generated: {}", format_share_date(generated));
    text.push('\n');

    if !active.is_empty() {
        let _ = writeln!(text, "📝 To Buy ({} items):", active.len());
        for item in &active {
            text.push_str("• ");
            text.push_str(&item.name);
            if item.quantity > 1 {
                let _ = write!(text, " ({})", item.quantity);
            }
            if !item.category.is_empty() {
                let _ = write!(text, " - {}", item.category);
            }
            text.push('\n');
        }
        text.push('\n');
    }

    if !completed.is_empty() {
        let _ = writeln!(text, "✅ Completed ({} items):", completed.len());
        for item in &completed {
            text.push_str("• ");
            text.push_str(&item.name);
            if item.quantity > 1 {
                let _ = write!(text, " ({})", item.quantity);
            }
            text.push('\n');
        }
    }

    ShareData {
        title: title.to_string(),
        text,
        url: url.to_string(),
    }
}
