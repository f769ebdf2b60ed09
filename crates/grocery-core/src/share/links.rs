//! Manual Share Deep Links

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters JavaScript's `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Destinations offered by the manual share modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Email,
    Sms,
    WhatsApp,
    Telegram,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Email,
        ShareTarget::Sms,
        ShareTarget::WhatsApp,
        ShareTarget::Telegram,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Email => "📧 Email",
            ShareTarget::Sms => "💬 SMS",
            ShareTarget::WhatsApp => "📱 WhatsApp",
            ShareTarget::Telegram => "✈️ Telegram",
        }
    }

    /// Button background
    pub fn color(&self) -> &'static str {
        match self {
            ShareTarget::Email => "#059669",
            ShareTarget::Sms => "#2563eb",
            ShareTarget::WhatsApp => "#25d366",
            ShareTarget::Telegram => "#229ed9",
        }
    }
}

/// Pre-built deep links carrying the share text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub email: String,
    pub sms: String,
    pub whatsapp: String,
    pub telegram: String,
}

impl ShareLinks {
    pub fn new(title: &str, text: &str) -> Self {
        let body = encode_uri_component(text);
        Self {
            email: format!("mailto:?subject={}&body={}", encode_uri_component(title), body),
            sms: format!("sms:?body={}", body),
            whatsapp: format!("https://wa.me/?text={}", body),
            telegram: format!("https://t.me/share/url?text={}", body),
        }
    }

    pub fn url(&self, target: ShareTarget) -> &str {
        match target {
            ShareTarget::Email => &self.email,
            ShareTarget::Sms => &self.sms,
            ShareTarget::WhatsApp => &self.whatsapp,
            ShareTarget::Telegram => &self.telegram,
        }
    }
}
